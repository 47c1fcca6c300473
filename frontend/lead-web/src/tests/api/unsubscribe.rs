use crate::{UnsubscribeRequest, api::unsubscribe::page_url};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};

#[test]
fn test_page_url_encodes_email() {
    assert_eq!(
        page_url("jane+news@example.com", None),
        "/unsubscribe?email=jane%2Bnews%40example.com"
    );
}

#[test]
fn test_page_url_appends_status() {
    assert_eq!(
        page_url("a@b.co", Some("success")),
        "/unsubscribe?email=a%40b.co&status=success"
    );
}

#[test]
fn test_request_email_is_trimmed_and_blank_is_absent() {
    let request = UnsubscribeRequest {
        email: Some("  a@b.co ".into()),
        token: None,
    };
    assert_that!(request.email(), some(eq("a@b.co")));

    let blank = UnsubscribeRequest {
        email: Some("   ".into()),
        token: None,
    };
    assert_that!(blank.email(), none());
}

#[test]
fn test_request_without_token_serializes_email_only() {
    let request: UnsubscribeRequest = serde_json::from_str(r#"{"email":"a@b.co"}"#).unwrap();

    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        serde_json::json!({"email": "a@b.co"})
    );
}
