use crate::{MemorySessionStore, SessionStore};

#[test]
fn test_set_get_remove() {
    let store = MemorySessionStore::new();

    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));

    store.remove("k").unwrap();
    assert!(store.get("k").unwrap().is_none());
}

#[test]
fn test_remove_missing_key_is_ok() {
    let store = MemorySessionStore::new();
    assert!(store.remove("nothing").is_ok());
}

#[test]
fn test_with_entries() {
    let store = MemorySessionStore::with_entries([("a", "1"), ("b", "2")]);
    assert_eq!(store.get("b").unwrap().as_deref(), Some("2"));
}
