//! Entity records.
//!
//! An entity is one tracked item of the feed (a player). Four fields are
//! required and typed; everything else in the source record is kept
//! verbatim in [`Entity::extra`] so a stored snapshot reproduces the feed
//! record it came from.

use crate::errors::PriceWatchError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Stable entity identifier (the feed's `id` field)
pub type EntityId = i64;

/// One tracked item of a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Stable unique identifier
    pub id: EntityId,
    /// Current value in tenths of a currency unit
    pub now_cost: i64,
    /// Display name
    pub web_name: String,
    /// Group (team) membership reference
    pub team: i64,
    /// Remaining source fields, carried opaquely
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Entity {
    /// Build an entity with no extra fields
    pub fn new(id: EntityId, now_cost: i64, web_name: impl Into<String>, team: i64) -> Self {
        Self {
            id,
            now_cost,
            web_name: web_name.into(),
            team,
            extra: Map::new(),
        }
    }

    /// Attach an extra opaque field
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// Parse raw feed records into entities.
///
/// Every record must carry integer `id`, `now_cost` and `team` fields and a
/// string `web_name`. The first record that does not is reported with its
/// position; nothing is skipped or defaulted.
///
/// # Errors
///
/// - `MalformedEntity`: a record is not an object, lacks a required field,
///   or has a required field of the wrong type
pub fn parse_entities(records: Vec<Value>) -> Result<Vec<Entity>, PriceWatchError> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| parse_entity(index, record))
        .collect()
}

fn parse_entity(index: usize, record: Value) -> Result<Entity, PriceWatchError> {
    if !record.is_object() {
        return Err(PriceWatchError::MalformedEntity {
            index,
            entity_id: None,
            reason: format!("expected a JSON object, got {}", json_type(&record)),
        });
    }
    let entity_id = record.get("id").map(|v| v.to_string());
    serde_json::from_value(record).map_err(|e| PriceWatchError::MalformedEntity {
        index,
        entity_id,
        reason: e.to_string(),
    })
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extra_fields_survive_round_trip() {
        let raw = json!({
            "id": 7,
            "now_cost": 125,
            "web_name": "Salah",
            "team": 12,
            "selected_by_percent": "45.3",
            "status": "a"
        });
        let entity: Entity = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(entity.extra.len(), 2);
        assert_eq!(serde_json::to_value(&entity).unwrap(), raw);
    }

    #[test]
    fn test_non_object_record_is_rejected() {
        let err = parse_entities(vec![json!([1, 2])]).unwrap_err();
        match err {
            PriceWatchError::MalformedEntity { index, reason, .. } => {
                assert_eq!(index, 0);
                assert!(reason.contains("an array"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
