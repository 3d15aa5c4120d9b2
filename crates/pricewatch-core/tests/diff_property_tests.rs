//! Property tests for the diff engine partition and ordering guarantees.

use pricewatch_core::diff::diff;
use pricewatch_core::model::Entity;
use proptest::prelude::*;
use std::collections::{HashMap, HashSet};

/// Unique-id entity collections with small costs so collisions of value are common.
fn collection() -> impl Strategy<Value = Vec<Entity>> {
    prop::collection::btree_map(0i64..40, 0i64..20, 0..30).prop_flat_map(|m| {
        let entities: Vec<Entity> = m
            .into_iter()
            .map(|(id, cost)| Entity::new(id, cost, format!("P{}", id), 1))
            .collect();
        Just(entities).prop_shuffle()
    })
}

proptest! {
    #[test]
    fn prop_partition_by_sign(previous in collection(), current in collection()) {
        let result = diff(&previous, &current);
        let prev: HashMap<i64, i64> = previous.iter().map(|e| (e.id, e.now_cost)).collect();

        let mut risers = HashSet::new();
        let mut fallers = HashSet::new();
        for m in &result.risers {
            prop_assert!(m.delta > 0);
            prop_assert_eq!(m.delta, m.entity.now_cost - prev[&m.entity.id]);
            risers.insert(m.entity.id);
        }
        for m in &result.fallers {
            prop_assert!(m.delta < 0);
            prop_assert_eq!(m.delta, m.entity.now_cost - prev[&m.entity.id]);
            fallers.insert(m.entity.id);
        }
        prop_assert!(risers.is_disjoint(&fallers));

        for e in &current {
            match prev.get(&e.id) {
                None => {
                    prop_assert!(!risers.contains(&e.id));
                    prop_assert!(!fallers.contains(&e.id));
                }
                Some(old) if e.now_cost > *old => prop_assert!(risers.contains(&e.id)),
                Some(old) if e.now_cost < *old => prop_assert!(fallers.contains(&e.id)),
                Some(_) => {
                    prop_assert!(!risers.contains(&e.id));
                    prop_assert!(!fallers.contains(&e.id));
                }
            }
        }

        let current_ids: HashSet<i64> = current.iter().map(|e| e.id).collect();
        for id in prev.keys().filter(|id| !current_ids.contains(id)) {
            prop_assert!(!risers.contains(id));
            prop_assert!(!fallers.contains(id));
        }

        prop_assert_eq!(
            result.compared,
            result.risers.len() + result.fallers.len() + result.unchanged
        );
    }

    #[test]
    fn prop_order_preserved(previous in collection(), current in collection()) {
        let result = diff(&previous, &current);
        let position: HashMap<i64, usize> =
            current.iter().enumerate().map(|(i, e)| (e.id, i)).collect();

        for list in [&result.risers, &result.fallers] {
            let positions: Vec<usize> = list.iter().map(|m| position[&m.entity.id]).collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
