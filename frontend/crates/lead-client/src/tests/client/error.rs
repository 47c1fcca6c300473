use crate::{ClientError, SessionError};

use lead_core::ErrorKind;

#[test]
fn test_kind_mapping() {
    assert_eq!(ClientError::no_token().kind(), ErrorKind::NoToken);
    assert_eq!(ClientError::unauthorized(None).kind(), ErrorKind::Unauthorized);
    assert_eq!(ClientError::http(500, "boom").kind(), ErrorKind::Http);

    let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    assert_eq!(ClientError::from(decode).kind(), ErrorKind::Network);

    assert_eq!(
        ClientError::from(SessionError::poisoned()).kind(),
        ErrorKind::NoToken
    );
}

#[test]
fn test_status() {
    assert_eq!(ClientError::unauthorized(None).status(), Some(401));
    assert_eq!(ClientError::http(422, "bad").status(), Some(422));
    assert_eq!(ClientError::no_token().status(), None);
}

#[test]
fn test_user_message_prefers_backend_text() {
    assert_eq!(ClientError::http(400, "Website is invalid").user_message(), "Website is invalid");
    assert_eq!(
        ClientError::unauthorized(Some("Token expired".to_string())).user_message(),
        "Token expired"
    );
    assert!(!ClientError::unauthorized(None).user_message().is_empty());
}

#[test]
fn test_display_includes_status() {
    let err = ClientError::http(503, "Service unavailable");
    assert!(err.to_string().contains("503"));
    assert!(err.to_string().contains("Service unavailable"));
}
