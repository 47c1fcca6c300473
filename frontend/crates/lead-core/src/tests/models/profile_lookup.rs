use crate::{ProfileEnvelope, ProfileLookup};

use serde_json::json;

fn lookup(body: serde_json::Value) -> ProfileLookup {
    let envelope: ProfileEnvelope = serde_json::from_value(body).unwrap();
    ProfileLookup::from(envelope)
}

#[test]
fn given_success_with_null_profile_then_not_found() {
    assert_eq!(
        lookup(json!({"success": true, "profile": null})),
        ProfileLookup::NotFound
    );
}

#[test]
fn given_exists_false_then_not_found() {
    assert_eq!(lookup(json!({"exists": false})), ProfileLookup::NotFound);
}

#[test]
fn given_profile_object_then_found() {
    let result = lookup(json!({"success": true, "profile": {"business_name": "Acme"}}));

    let profile = result.profile().expect("profile should be present");
    assert_eq!(profile.business_name.as_deref(), Some("Acme"));
}

#[test]
fn given_unrecognized_shape_then_unspecified() {
    assert_eq!(lookup(json!({})), ProfileLookup::Unspecified);
    assert_eq!(lookup(json!({"exists": true})), ProfileLookup::Unspecified);
    assert_eq!(
        lookup(json!({"success": false, "message": "later"})),
        ProfileLookup::Unspecified
    );
}

#[test]
fn given_profile_with_number_phone_then_found() {
    let result = lookup(json!({
        "success": true,
        "profile": {"business_name": "Acme", "phone": 5551234}
    }));

    let profile = result.profile().expect("profile should be present");
    assert_eq!(profile.extra["phone"], json!(5551234));
}
