//! Snapshot diff output types.

use crate::model::Entity;
use serde::{Deserialize, Serialize};

/// A signed value change for one entity between two snapshots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movement {
    /// The entity as it appears in the current snapshot
    pub entity: Entity,
    /// `current_value − previous_value`, in tenths, saturated to the i64 range
    pub delta: i64,
}

/// Classified result of diffing two snapshots.
///
/// Entities with a zero delta, entities new in the current snapshot and
/// entities missing from it are only counted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DiffResult {
    /// Entities whose value went up, in current-snapshot order
    pub risers: Vec<Movement>,
    /// Entities whose value went down, in current-snapshot order
    pub fallers: Vec<Movement>,
    /// Entities present in both snapshots
    pub compared: usize,
    /// Compared entities with a zero delta
    pub unchanged: usize,
    /// Entities present only in the current snapshot
    pub new_entities: usize,
    /// Entities present only in the previous snapshot
    pub removed_entities: usize,
}

impl DiffResult {
    /// True when nothing rose or fell
    pub fn is_quiet(&self) -> bool {
        self.risers.is_empty() && self.fallers.is_empty()
    }
}
