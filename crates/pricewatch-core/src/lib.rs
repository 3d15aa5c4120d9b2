//! pricewatch core - snapshot model, diff engine and report rendering
//!
//! This crate provides the pure, I/O-free part of pricewatch:
//! - Entity, group-label and snapshot models
//! - The snapshot diff engine (risers / fallers by exact integer delta)
//! - Text, HTML and JSON report rendering
//! - The canonical error facility and the structured logging facility

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod report;

pub use pricewatch_core_types as types;

// Re-export commonly used types
pub use diff::{diff, DiffResult, Movement};
pub use errors::{PriceWatchError, PwError, PwErrorKind, Result};
pub use model::{Entity, GroupMap};
pub use report::ReportStyle;
