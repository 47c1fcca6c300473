use crate::client::client::error_message;
use crate::{Client, SessionContext};

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = Client::new("http://localhost:5000/", "/api/auth", SessionContext::in_memory());
    assert_eq!(client.base_url(), "http://localhost:5000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = Client::new("http://localhost:5000", "/api/auth", SessionContext::in_memory());
    assert_eq!(client.base_url(), "http://localhost:5000");
}

#[test]
fn test_error_message_top_level() {
    let body = br#"{"message": "Email already registered"}"#;
    assert_eq!(
        error_message(body).as_deref(),
        Some("Email already registered")
    );
}

#[test]
fn test_error_message_error_string() {
    let body = br#"{"error": "Invalid credentials"}"#;
    assert_eq!(error_message(body).as_deref(), Some("Invalid credentials"));
}

#[test]
fn test_error_message_nested_error_object() {
    let body = br#"{"error": {"code": "VALIDATION_ERROR", "message": "Bad website"}}"#;
    assert_eq!(error_message(body).as_deref(), Some("Bad website"));
}

#[test]
fn test_error_message_absent_or_blank() {
    assert!(error_message(b"<html>oops</html>").is_none());
    assert!(error_message(br#"{"message": "  "}"#).is_none());
    assert!(error_message(br#"{"success": false}"#).is_none());
}
