use crate::{MemorySessionStore, SessionContext, SessionStore, TOKEN_KEY, USER_ID_KEY};

use lead_core::AuthResponse;

use std::sync::Arc;

use serde_json::json;

fn context_over(store: Arc<MemorySessionStore>) -> SessionContext {
    SessionContext::new(store)
}

#[test]
fn test_empty_store_has_no_token() {
    let session = SessionContext::in_memory();
    assert!(session.token().unwrap().is_none());
    assert!(!session.is_signed_in());
}

#[test]
fn test_establish_stores_token_and_user_id() {
    let store = Arc::new(MemorySessionStore::new());
    let session = context_over(store.clone());
    let auth: AuthResponse = serde_json::from_value(json!({
        "token": "jwt-abc",
        "user": {"id": 7, "email": "a@b.co"}
    }))
    .unwrap();

    session.establish(&auth).unwrap();

    assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("jwt-abc"));
    assert_eq!(session.user_id().unwrap().as_deref(), Some("7"));
    assert!(session.is_signed_in());
}

#[test]
fn test_legacy_token_migrated_on_first_read() {
    let store = Arc::new(MemorySessionStore::with_entries([("auth_token", "old-jwt")]));
    let session = context_over(store.clone());

    assert_eq!(session.token().unwrap().as_deref(), Some("old-jwt"));

    assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("old-jwt"));
    assert!(store.get("auth_token").unwrap().is_none());
}

#[test]
fn test_canonical_key_wins_over_legacy() {
    let store = Arc::new(MemorySessionStore::with_entries([
        (TOKEN_KEY, "new-jwt"),
        ("token", "old-jwt"),
    ]));
    let session = context_over(store);

    assert_eq!(session.token().unwrap().as_deref(), Some("new-jwt"));
}

#[test]
fn test_empty_token_treated_as_absent() {
    let store = Arc::new(MemorySessionStore::with_entries([(TOKEN_KEY, "")]));
    let session = context_over(store);

    assert!(session.token().unwrap().is_none());
}

#[test]
fn test_clear_removes_every_key() {
    let store = Arc::new(MemorySessionStore::with_entries([
        (TOKEN_KEY, "jwt"),
        ("token", "legacy"),
        (USER_ID_KEY, "42"),
    ]));
    let session = context_over(store.clone());

    session.clear().unwrap();

    assert!(store.get(TOKEN_KEY).unwrap().is_none());
    assert!(store.get("token").unwrap().is_none());
    assert!(store.get(USER_ID_KEY).unwrap().is_none());
    assert!(session.token().unwrap().is_none());
}
