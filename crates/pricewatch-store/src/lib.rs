//! pricewatch store - dated snapshot persistence
//!
//! Provides:
//! - One JSON file per calendar date under a snapshot directory
//! - Atomic temp→rename writes (readers never see a partial snapshot)
//! - "Not found" as a value, distinct from storage faults

pub mod errors;
pub mod snapshot;

// Re-export key types
pub use errors::Result;
pub use snapshot::{FsSnapshotStore, StoredSnapshot};
