//! Atomic write primitives
//!
//! Uses temp→rename so a reader sees either the old file or the new one.
//! Each writer gets its own temp name, so concurrent writers for the same
//! target never interleave bytes; the last rename wins.

use crate::errors::{io_error, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Suffix shared by every in-flight temp file
pub(crate) const TEMP_SUFFIX: &str = ".tmp";

/// Atomically write bytes to a file
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| io_error("create_snapshot_dir", e))?;
        }
    }

    let temp_path = temp_path_for(target_path);

    let written = write_synced(&temp_path, content).and_then(|()| {
        fs::rename(&temp_path, target_path).map_err(|e| io_error("rename_snapshot_temp", e))
    });

    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written
}

fn write_synced(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = fs::File::create(path).map_err(|e| io_error("write_snapshot_temp", e))?;
    file.write_all(content)
        .map_err(|e| io_error("write_snapshot_temp", e))?;
    file.sync_all()
        .map_err(|e| io_error("sync_snapshot_temp", e))?;
    Ok(())
}

/// `<dir>/.<file name>.<uuid>.tmp`, in the target's own directory so the
/// rename never crosses filesystems
fn temp_path_for(target_path: &Path) -> PathBuf {
    let name = target_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    target_path.with_file_name(format!(".{}.{}{}", name, Uuid::new_v4(), TEMP_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_atomic_write() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("2024-08-17.json");

        atomic_write(&target, b"[]").unwrap();

        let content = fs::read(&target).unwrap();
        assert_eq!(content, b"[]");
    }

    #[test]
    fn test_atomic_write_creates_parent() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("snapshots").join("2024-08-17.json");

        atomic_write(&target, b"nested").unwrap();

        let content = fs::read(&target).unwrap();
        assert_eq!(content, b"nested");
    }

    #[test]
    fn test_no_tmp_files_after_write() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("2024-08-17.json");

        atomic_write(&target, b"clean").unwrap();
        atomic_write(&target, b"cleaner").unwrap();

        let tmp_count = fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map(|s| s.ends_with(TEMP_SUFFIX))
                    .unwrap_or(false)
            })
            .count();

        assert_eq!(tmp_count, 0);
    }

    #[test]
    fn test_temp_paths_are_unique_per_writer() {
        let target = Path::new("/snapshots/2024-08-17.json");
        assert_ne!(temp_path_for(target), temp_path_for(target));
        assert_eq!(temp_path_for(target).parent(), target.parent());
    }
}
