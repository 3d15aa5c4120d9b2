//! Snapshot diff engine.
//!
//! Compares the previous and current entity collections and classifies
//! every entity present in both by the sign of its value change.
//!
//! ## Entry point
//!
//! ```
//! use pricewatch_core::diff::diff;
//! use pricewatch_core::model::Entity;
//!
//! let previous = vec![Entity::new(1, 50, "Saka", 1)];
//! let current = vec![Entity::new(1, 55, "Saka", 1)];
//! let result = diff(&previous, &current);
//! assert_eq!(result.risers[0].delta, 5);
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical inputs produce identical output.
//! - **Order preservation**: risers and fallers follow the order of `current`.
//! - **Exact arithmetic**: deltas are integer tenths, no float comparison.
//! - **Comparable only**: entities new in `current` or gone from it are
//!   counted but never listed.

pub mod engine;
pub mod model;

pub use engine::diff;
pub use model::{DiffResult, Movement};
