//! Error handling for pricewatch-store
//!
//! Wraps pricewatch-core PwError with store-specific helpers

use chrono::NaiveDate;
use pricewatch_core::errors::{PriceWatchError, PwError, PwErrorKind};
use std::path::Path;

pub use pricewatch_core::errors::io_error;

/// Result type alias using PwError
pub type Result<T> = std::result::Result<T, PwError>;

/// Create a corrupt-snapshot error for an undecodable file
pub fn snapshot_corrupt(date: NaiveDate, path: &Path, reason: impl Into<String>) -> PwError {
    PwError::from(PriceWatchError::CorruptSnapshot {
        date,
        reason: reason.into(),
    })
    .with_path(path)
}

/// Create a malformed-entity error raised while reading a stored snapshot
pub fn snapshot_entity_invalid(date: NaiveDate, path: &Path, err: PriceWatchError) -> PwError {
    PwError::from(err)
        .with_op("snapshot_read")
        .with_date(date)
        .with_path(path)
}

/// Create a persistence error wrapping a lower-level failure
pub fn snapshot_write_failed(date: NaiveDate, path: &Path, source: PwError) -> PwError {
    PwError::new(PwErrorKind::Persistence)
        .with_op("snapshot_write")
        .with_date(date)
        .with_path(path)
        .with_message(format!("Failed to persist snapshot: {}", source.message()))
        .with_source(source)
}
