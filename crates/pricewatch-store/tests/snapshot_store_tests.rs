//! Snapshot store integration tests.
//!
//! All tests use a real filesystem root (via TempDir).

use chrono::NaiveDate;
use pricewatch_core::errors::PwErrorKind;
use pricewatch_core::model::Entity;
use pricewatch_store::FsSnapshotStore;
use serde_json::json;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Setup helpers
// ---------------------------------------------------------------------------

fn setup() -> (TempDir, FsSnapshotStore) {
    let temp_dir = TempDir::new().unwrap();
    let store = FsSnapshotStore::new(temp_dir.path().join("fpl_snapshots"));
    (temp_dir, store)
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, d).unwrap()
}

fn entities() -> Vec<Entity> {
    vec![
        Entity::new(3, 70, "Mount", 14).with_field("status", json!("a")),
        Entity::new(1, 100, "Saka", 1)
            .with_field("selected_by_percent", json!("31.2"))
            .with_field("news", json!("")),
        Entity::new(2, 125, "Salah", 12),
    ]
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn test_write_then_read_round_trips_content_and_order() {
    let (_dir, store) = setup();
    let written = entities();

    store.write(day(17), &written).unwrap();
    let read = store.read(day(17)).unwrap().expect("snapshot should exist");

    assert_eq!(read, written);
    let read_ids: Vec<i64> = read.iter().map(|e| e.id).collect();
    assert_eq!(read_ids, vec![3, 1, 2]);
}

#[test]
fn test_read_missing_date_is_none_not_error() {
    let (_dir, store) = setup();
    store.write(day(17), &entities()).unwrap();

    let result = store.read(day(16)).unwrap();

    assert!(result.is_none());
}

#[test]
fn test_read_before_any_write_is_none() {
    let (_dir, store) = setup();
    assert!(store.read(day(1)).unwrap().is_none());
}

#[test]
fn test_second_write_same_date_replaces_first() {
    let (_dir, store) = setup();
    let first = entities();
    let second = vec![Entity::new(9, 45, "Onana", 14)];

    store.write(day(17), &first).unwrap();
    store.write(day(17), &second).unwrap();

    assert_eq!(store.read(day(17)).unwrap(), Some(second));
    assert_eq!(store.dates().unwrap(), vec![day(17)]);
}

#[test]
fn test_file_layout_is_one_json_array_per_date() {
    let (_dir, store) = setup();

    let stored = store.write(day(5), &entities()).unwrap();

    assert_eq!(stored.path, store.root().join("2024-08-05.json"));
    assert_eq!(stored.entity_count, 3);
    let raw: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&stored.path).unwrap()).unwrap();
    assert_eq!(raw.as_array().unwrap().len(), 3);
    assert_eq!(raw[0]["web_name"], "Mount");
    assert_eq!(raw[0]["status"], "a");
}

#[test]
fn test_dates_sorted_and_foreign_files_ignored() {
    let (_dir, store) = setup();
    store.write(day(17), &entities()).unwrap();
    store.write(day(3), &entities()).unwrap();
    store.write(day(10), &entities()).unwrap();
    fs::write(store.root().join("README.txt"), "not a snapshot").unwrap();
    fs::write(store.root().join(".2024-08-18.json.abc.tmp"), "[").unwrap();
    fs::create_dir_all(store.root().join("2024-08-19.json")).unwrap();

    assert_eq!(store.dates().unwrap(), vec![day(3), day(10), day(17)]);
}

#[test]
fn test_corrupt_file_is_a_fault_not_missing() {
    let (_dir, store) = setup();
    fs::create_dir_all(store.root()).unwrap();
    fs::write(store.path_for(day(16)), "[{\"id\": 1,").unwrap();

    let err = store.read(day(16)).unwrap_err();

    assert_eq!(err.kind(), PwErrorKind::CorruptSnapshot);
    assert_eq!(err.date(), Some(day(16)));
}

#[test]
fn test_stored_record_missing_field_is_malformed() {
    let (_dir, store) = setup();
    fs::create_dir_all(store.root()).unwrap();
    fs::write(
        store.path_for(day(16)),
        r#"[{"id": 1, "web_name": "A", "team": 1}]"#,
    )
    .unwrap();

    let err = store.read(day(16)).unwrap_err();

    assert_eq!(err.kind(), PwErrorKind::MalformedEntity);
    assert_eq!(err.entity_id(), Some("1"));
}

#[test]
fn test_concurrent_same_date_writes_leave_one_whole_payload() {
    let (_dir, store) = setup();
    let store = Arc::new(store);

    let payloads: Vec<Vec<Entity>> = (0..8)
        .map(|w| {
            (0..200)
                .map(|i| Entity::new(i, 40 + w, format!("W{}P{}", w, i), 1))
                .collect()
        })
        .collect();

    let handles: Vec<_> = payloads
        .iter()
        .cloned()
        .map(|payload| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.write(day(17), &payload).unwrap())
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let read = store.read(day(17)).unwrap().expect("snapshot should exist");
    assert!(payloads.contains(&read), "read payload must equal one writer's payload");

    let leftovers = fs::read_dir(store.root())
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
        .count();
    assert_eq!(leftovers, 0);
}
