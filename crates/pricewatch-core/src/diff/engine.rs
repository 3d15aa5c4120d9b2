//! Snapshot diff computation.

use crate::diff::model::{DiffResult, Movement};
use crate::model::{Entity, EntityId};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Classify the value movement of every entity present in both collections.
///
/// Walks `current` in order; an entity absent from `previous` is skipped,
/// otherwise comparing `current.now_cost` with `previous.now_cost` puts it in
/// `risers` (higher), `fallers` (lower) or the unchanged count (equal). The
/// recorded delta saturates rather than overflowing. If an id repeats in
/// `previous`, its last occurrence is the one compared against.
///
/// The caller decides what to do when there is no previous snapshot; an
/// empty `previous` simply yields an empty result with every entity counted
/// as new.
pub fn diff(previous: &[Entity], current: &[Entity]) -> DiffResult {
    let previous_values: HashMap<EntityId, i64> =
        previous.iter().map(|e| (e.id, e.now_cost)).collect();

    let mut result = DiffResult::default();
    let mut seen: HashSet<EntityId> = HashSet::with_capacity(current.len());

    for entity in current {
        seen.insert(entity.id);
        let Some(&old_value) = previous_values.get(&entity.id) else {
            result.new_entities += 1;
            continue;
        };
        result.compared += 1;

        // Classify on the values themselves; the delta saturates at the i64 range
        let delta = entity.now_cost.saturating_sub(old_value);
        match entity.now_cost.cmp(&old_value) {
            Ordering::Greater => result.risers.push(Movement {
                entity: entity.clone(),
                delta,
            }),
            Ordering::Less => result.fallers.push(Movement {
                entity: entity.clone(),
                delta,
            }),
            Ordering::Equal => result.unchanged += 1,
        }
    }

    result.removed_entities = previous_values
        .keys()
        .filter(|id| !seen.contains(id))
        .count();

    tracing::debug!(
        compared = result.compared,
        risers = result.risers.len(),
        fallers = result.fallers.len(),
        new_entities = result.new_entities,
        removed_entities = result.removed_entities,
        "Snapshot diff computed"
    );

    result
}
