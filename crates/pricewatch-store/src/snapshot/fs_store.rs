//! Filesystem-based snapshot store
//!
//! Persists one entity collection per calendar date. Writing a date that
//! already has a snapshot replaces it; reading a date with no snapshot is
//! `Ok(None)`, never an error.

use crate::errors::{
    io_error, snapshot_corrupt, snapshot_entity_invalid, snapshot_write_failed, Result,
};
use crate::snapshot::atomic::atomic_write;
use crate::snapshot::layout::{date_from_file_name, file_name_for};
use chrono::{DateTime, Local, NaiveDate};
use pricewatch_core::errors::{PwError, PwErrorKind};
use pricewatch_core::model::{parse_entities, Entity};
use pricewatch_core::{log_op_end, log_op_error, log_op_start};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Filesystem snapshot store rooted at a directory
#[derive(Debug, Clone)]
pub struct FsSnapshotStore {
    root: PathBuf,
}

/// What a successful write produced
#[derive(Debug, Clone, PartialEq)]
pub struct StoredSnapshot {
    pub date: NaiveDate,
    pub path: PathBuf,
    /// SHA256 of the written bytes (hex)
    pub digest: String,
    pub size_bytes: usize,
    pub entity_count: usize,
    /// Modification time reported by the filesystem after the rename
    pub modified: Option<DateTime<Local>>,
}

impl FsSnapshotStore {
    /// Create a store at the given root directory (created on first write)
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the snapshot file for `date`
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.root.join(file_name_for(date))
    }

    /// Persist `entities` as the snapshot for `date`
    ///
    /// - Serializes the entity array as JSON
    /// - Writes atomically using temp→rename
    /// - Silently replaces an existing snapshot for the same date
    ///
    /// # Errors
    ///
    /// - `Serialization`: an opaque entity field cannot be encoded
    /// - `Persistence`: the file cannot be written or renamed into place
    pub fn write(&self, date: NaiveDate, entities: &[Entity]) -> Result<StoredSnapshot> {
        let start = Instant::now();
        let path = self.path_for(date);
        log_op_start!("snapshot_write", snapshot_date = %date, path = %path.display());

        let result = self.write_inner(date, &path, entities);
        let duration_ms = start.elapsed().as_millis() as u64;
        match &result {
            Ok(stored) => {
                log_op_end!(
                    "snapshot_write",
                    duration_ms = duration_ms,
                    snapshot_date = %date,
                    entity_count = stored.entity_count,
                    digest = %stored.digest
                );
                if let Some(modified) = stored.modified {
                    tracing::info!(
                        path = %stored.path.display(),
                        "Snapshot file last modified at {}",
                        modified.format("%Y-%m-%d %H:%M:%S%.6f")
                    );
                }
            }
            Err(e) => log_op_error!("snapshot_write", e, duration_ms = duration_ms),
        }
        result
    }

    fn write_inner(
        &self,
        date: NaiveDate,
        path: &Path,
        entities: &[Entity],
    ) -> Result<StoredSnapshot> {
        let json = serde_json::to_vec(entities).map_err(|e| {
            PwError::new(PwErrorKind::Serialization)
                .with_op("snapshot_write")
                .with_date(date)
                .with_message(format!("Failed to serialize snapshot: {}", e))
        })?;

        atomic_write(path, &json).map_err(|e| snapshot_write_failed(date, path, e))?;

        let modified = fs::metadata(path)
            .and_then(|m| m.modified())
            .ok()
            .map(DateTime::<Local>::from);

        Ok(StoredSnapshot {
            date,
            path: path.to_path_buf(),
            digest: compute_digest(&json),
            size_bytes: json.len(),
            entity_count: entities.len(),
            modified,
        })
    }

    /// Read the snapshot for `date`
    ///
    /// Returns `Ok(None)` when no snapshot exists for the date.
    ///
    /// # Errors
    ///
    /// - `Io`: the file exists but cannot be read
    /// - `CorruptSnapshot`: the file is not a JSON array
    /// - `MalformedEntity`: a stored record lacks a required field
    pub fn read(&self, date: NaiveDate) -> Result<Option<Vec<Entity>>> {
        let path = self.path_for(date);
        tracing::info!(snapshot_date = %date, path = %path.display(), "Loading snapshot");

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(snapshot_date = %date, "Snapshot file does not exist");
                return Ok(None);
            }
            Err(e) => {
                return Err(io_error("snapshot_read", e)
                    .with_date(date)
                    .with_path(&path))
            }
        };

        let records: Vec<Value> = serde_json::from_slice(&bytes)
            .map_err(|e| snapshot_corrupt(date, &path, e.to_string()))?;
        let entities =
            parse_entities(records).map_err(|e| snapshot_entity_invalid(date, &path, e))?;

        tracing::info!(
            snapshot_date = %date,
            entity_count = entities.len(),
            "Snapshot loaded successfully"
        );
        Ok(Some(entities))
    }

    /// Dates that currently have a snapshot, ascending
    ///
    /// A missing root directory means no snapshots yet. Files that are not
    /// named `YYYY-MM-DD.json` (including in-flight temp files) are ignored.
    pub fn dates(&self) -> Result<Vec<NaiveDate>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error("snapshot_list", e).with_path(&self.root)),
        };

        let mut dates = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| io_error("snapshot_list", e))?;
            if !entry.path().is_file() {
                continue;
            }
            if let Some(date) = entry.file_name().to_str().and_then(date_from_file_name) {
                dates.push(date);
            }
        }
        dates.sort_unstable();
        Ok(dates)
    }
}

/// Compute SHA256 digest of content
fn compute_digest(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}
