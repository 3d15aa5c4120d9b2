pub mod env_dump;
pub mod run;
pub mod snapshots;
pub mod upload;
