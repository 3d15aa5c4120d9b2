//! Group (team) label lookup.

use serde::Deserialize;
use std::collections::BTreeMap;

/// One record of the feed's `teams` array; other fields are ignored
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupRecord {
    pub id: i64,
    pub short_name: String,
}

/// Mapping from group id to short display label.
///
/// Built fresh from every fetch and never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupMap {
    labels: BTreeMap<i64, String>,
}

impl GroupMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the mapping from feed records; a repeated id keeps the last label
    pub fn from_records(records: impl IntoIterator<Item = GroupRecord>) -> Self {
        Self {
            labels: records
                .into_iter()
                .map(|r| (r.id, r.short_name))
                .collect(),
        }
    }

    pub fn insert(&mut self, id: i64, label: impl Into<String>) {
        self.labels.insert(id, label.into());
    }

    /// Label for `id`, or `None` when the reference cannot be resolved
    pub fn label(&self, id: i64) -> Option<&str> {
        self.labels.get(&id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
