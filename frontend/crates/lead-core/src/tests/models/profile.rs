use crate::Profile;

use serde_json::json;

#[test]
fn given_comma_string_targeting_when_deserialize_then_split_and_trimmed() {
    let profile: Profile = serde_json::from_value(json!({
        "business_name": "Acme",
        "target_industries": "Tech, Finance",
        "target_job_titles": " CEO ,, Founder ,",
    }))
    .unwrap();

    assert_eq!(profile.target_industries, vec!["Tech", "Finance"]);
    assert_eq!(profile.target_job_titles, vec!["CEO", "Founder"]);
}

#[test]
fn given_list_targeting_when_deserialize_then_blank_entries_dropped_and_order_kept() {
    let profile: Profile = serde_json::from_value(json!({
        "target_company_sizes": ["51-200", " ", "1-10", "51-200"],
        "target_job_levels": ["VP", null, " Director "],
    }))
    .unwrap();

    assert_eq!(
        profile.target_company_sizes,
        vec!["51-200", "1-10", "51-200"]
    );
    assert_eq!(profile.target_job_levels, vec!["VP", "Director"]);
}

#[test]
fn given_null_or_missing_targeting_when_deserialize_then_empty() {
    let profile: Profile = serde_json::from_value(json!({
        "target_industries": null,
    }))
    .unwrap();

    assert!(profile.target_industries.is_empty());
    assert!(profile.target_company_sizes.is_empty());
}

#[test]
fn given_unknown_fields_when_roundtrip_then_preserved() {
    let profile: Profile = serde_json::from_value(json!({
        "id": 42,
        "business_name": "Acme",
        "plan": "pro",
        "target_industries": "Tech",
    }))
    .unwrap();

    assert_eq!(profile.extra["id"], json!(42));
    assert_eq!(profile.extra["plan"], json!("pro"));

    let value = serde_json::to_value(&profile).unwrap();
    assert_eq!(value["id"], json!(42));
    assert_eq!(value["plan"], json!("pro"));
    assert_eq!(value["target_industries"], json!(["Tech"]));
}

#[test]
fn test_display_name_prefers_business_name() {
    let mut profile = Profile {
        owner_name: Some("Jordan".into()),
        ..Default::default()
    };
    assert_eq!(profile.display_name(), "Jordan");

    profile.business_name = Some("Acme".into());
    assert_eq!(profile.display_name(), "Acme");
}

#[test]
fn given_non_string_known_fields_when_deserialize_then_kept_verbatim_in_extra() {
    let profile: Profile = serde_json::from_value(json!({
        "business_name": "Acme",
        "phone": 5551234,
        "services": ["Roofing", "Gutters"],
    }))
    .unwrap();

    assert_eq!(profile.business_name.as_deref(), Some("Acme"));
    assert!(profile.phone.is_none());
    assert_eq!(profile.extra["phone"], json!(5551234));

    let value = serde_json::to_value(&profile).unwrap();
    assert_eq!(value["phone"], json!(5551234));
    assert_eq!(value["services"], json!(["Roofing", "Gutters"]));
}

#[test]
fn given_absent_fields_when_serialize_then_omitted_and_nulls_kept() {
    let profile: Profile = serde_json::from_value(json!({
        "business_name": "Acme",
        "website": null,
    }))
    .unwrap();

    let value = serde_json::to_value(&profile).unwrap();

    assert_eq!(value["website"], json!(null));
    assert!(value.get("phone").is_none());
    assert!(value.get("address").is_none());
}

#[test]
fn given_unreadable_targeting_shape_when_deserialize_then_empty() {
    let profile: Profile = serde_json::from_value(json!({
        "target_industries": 7,
    }))
    .unwrap();

    assert!(profile.target_industries.is_empty());
    assert!(profile.extra.is_empty());
}
