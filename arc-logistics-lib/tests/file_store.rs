use std::fs;

use arc_logistics_lib::catalog::builtin_catalog;
use arc_logistics_lib::{FileStore, KeyValueStore, PROGRESS_KEY, ProgressState, Tracker};
use tempfile::TempDir;

#[test]
fn missing_file_reads_as_none() {
    let tmp = TempDir::new().unwrap();
    let store = FileStore::new(tmp.path());
    assert!(store.get(PROGRESS_KEY).unwrap().is_none());
}

#[test]
fn set_creates_directory_and_replaces_value() {
    let tmp = TempDir::new().unwrap();
    let store = FileStore::new(tmp.path().join("nested").join("data"));

    store.set("key", "first").unwrap();
    store.set("key", "second").unwrap();

    assert_eq!(store.get("key").unwrap().as_deref(), Some("second"));
    assert!(!store.path_for("key").with_extension("json.tmp").exists());
}

#[test]
fn tracker_persists_across_reopen() {
    let tmp = TempDir::new().unwrap();
    let catalog = builtin_catalog().unwrap();

    {
        let mut tracker = Tracker::open(catalog.clone(), FileStore::new(tmp.path()));
        tracker.advance_phase(2).unwrap();
        tracker.upgrade_workshop("medical_lab").unwrap();
    }

    let tracker = Tracker::open(catalog, FileStore::new(tmp.path()));
    assert_eq!(tracker.state().project_phase_completed, 2);
    assert_eq!(tracker.state().workshop_level("medical_lab"), 2);
}

#[test]
fn corrupt_file_falls_back_to_default() {
    let tmp = TempDir::new().unwrap();
    let store = FileStore::new(tmp.path());
    fs::write(store.path_for(PROGRESS_KEY), "{ this is not json").unwrap();

    let catalog = builtin_catalog().unwrap();
    let mut tracker = Tracker::open(catalog.clone(), store);
    assert_eq!(tracker.state(), &ProgressState::default_for(&catalog));

    // Reset overwrites the unreadable record.
    tracker.reset_progress().unwrap();
    let contents = fs::read_to_string(FileStore::new(tmp.path()).path_for(PROGRESS_KEY)).unwrap();
    let parsed: ProgressState = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed, ProgressState::default_for(&catalog));
}
