//! Dated snapshot storage
//!
//! Provides:
//! - Filesystem store keyed by calendar date (`YYYY-MM-DD.json`)
//! - Atomic writes with per-writer temp files
//! - Listing of stored dates

mod atomic;
mod fs_store;
mod layout;

pub use atomic::atomic_write;
pub use fs_store::{FsSnapshotStore, StoredSnapshot};
pub use layout::{date_from_file_name, file_name_for};
