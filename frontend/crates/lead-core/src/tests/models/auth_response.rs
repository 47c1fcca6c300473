use crate::AuthResponse;

use serde_json::json;

#[test]
fn given_numeric_user_id_when_deserialize_then_stringified() {
    let response: AuthResponse = serde_json::from_value(json!({
        "token": "jwt-abc",
        "user": {"id": 17, "email": "owner@acme.test"}
    }))
    .unwrap();

    assert_eq!(response.token, "jwt-abc");
    assert_eq!(response.user.id, "17");
    assert_eq!(response.user.email.as_deref(), Some("owner@acme.test"));
}

#[test]
fn given_missing_token_when_deserialize_then_error() {
    let result = serde_json::from_value::<AuthResponse>(json!({
        "user": {"id": "u-1"}
    }));

    assert!(result.is_err());
}
