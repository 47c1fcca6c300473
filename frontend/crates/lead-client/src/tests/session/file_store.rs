use crate::{FileSessionStore, SessionStore};

use std::fs;

use tempfile::TempDir;

#[test]
fn test_missing_file_reads_empty() {
    let temp = TempDir::new().unwrap();
    let store = FileSessionStore::new(temp.path().join("session.json"));

    assert!(store.get("leadsite_token").unwrap().is_none());
}

#[test]
fn test_values_survive_a_new_store() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");

    FileSessionStore::new(&path).set("leadsite_token", "abc").unwrap();

    let reopened = FileSessionStore::new(&path);
    assert_eq!(reopened.get("leadsite_token").unwrap().as_deref(), Some("abc"));
}

#[test]
fn test_creates_parent_directory() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested").join("session.json");
    let store = FileSessionStore::new(&path);

    store.set("k", "v").unwrap();

    assert!(path.exists());
}

#[test]
fn test_no_temp_file_left_behind() {
    let temp = TempDir::new().unwrap();
    let store = FileSessionStore::new(temp.path().join("session.json"));

    store.set("k", "v").unwrap();
    store.set("k2", "v2").unwrap();

    let names: Vec<String> = fs::read_dir(temp.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["session.json".to_string()]);
}

#[test]
fn test_corrupted_file_reads_empty_and_is_replaced() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("session.json");
    fs::write(&path, "{not json").unwrap();
    let store = FileSessionStore::new(&path);

    assert!(store.get("k").unwrap().is_none());

    store.set("k", "v").unwrap();
    let contents = fs::read_to_string(&path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed["k"], "v");
}

#[test]
fn test_remove_keeps_other_keys() {
    let temp = TempDir::new().unwrap();
    let store = FileSessionStore::new(temp.path().join("session.json"));
    store.set("a", "1").unwrap();
    store.set("b", "2").unwrap();

    store.remove("a").unwrap();

    assert!(store.get("a").unwrap().is_none());
    assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
}
