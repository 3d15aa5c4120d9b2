//! Correlation id for a single pipeline run
//!
//! Every log event emitted during a run carries the same `RunId`, so the
//! lines belonging to one fetch/diff cycle can be pulled out of a shared
//! log file.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(String);

impl RunId {
    /// Generate a new time-ordered RunId using UUIDv7
    pub fn new() -> Self {
        Self(Uuid::now_v7().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
