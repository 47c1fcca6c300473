use crate::{Profile, TargetingDraft};

use serde_json::json;

fn profile_with_targeting() -> Profile {
    serde_json::from_value(json!({
        "id": 42,
        "business_name": "Acme Roofing",
        "target_industries": "Tech, Finance",
        "target_company_sizes": ["1-10"],
        "target_job_titles": ["CEO", "CTO"],
        "target_job_levels": [],
    }))
    .unwrap()
}

#[test]
fn given_comma_string_profile_then_list_and_mirror_agree() {
    let draft = TargetingDraft::from_profile(&profile_with_targeting());

    assert_eq!(draft.target_industries, vec!["Tech", "Finance"]);
    assert_eq!(draft.industries_input, "Tech, Finance");
    assert_eq!(draft.job_titles_input, "CEO, CTO");
}

#[test]
fn given_toggle_twice_then_selection_unchanged() {
    let mut draft = TargetingDraft::from_profile(&profile_with_targeting());
    let before = draft.target_company_sizes.clone();

    assert!(draft.toggle_company_size("51-200"));
    assert!(!draft.toggle_company_size("51-200"));

    assert_eq!(draft.target_company_sizes, before);
}

#[test]
fn given_selected_value_when_toggle_then_removed() {
    let mut draft = TargetingDraft::from_profile(&profile_with_targeting());

    assert!(!draft.toggle_company_size("1-10"));
    assert!(draft.target_company_sizes.is_empty());

    assert!(draft.toggle_job_level("VP"));
    assert_eq!(draft.target_job_levels, vec!["VP"]);
}

#[test]
fn given_mirror_edit_then_list_not_updated_until_selection() {
    let mut draft = TargetingDraft::from_profile(&profile_with_targeting());

    draft.set_industries_input("Healthcare,  , Retail ");

    assert_eq!(draft.target_industries, vec!["Tech", "Finance"]);
    let selection = draft.selection();
    assert_eq!(selection.target_industries, vec!["Healthcare", "Retail"]);
    assert_eq!(selection.target_job_titles, vec!["CEO", "CTO"]);
}

#[test]
fn given_empty_mirror_then_selection_list_empty() {
    let mut draft = TargetingDraft::default();
    draft.set_job_titles_input("   ");

    assert!(draft.selection().target_job_titles.is_empty());
}

#[test]
fn given_selection_when_merge_then_other_profile_fields_preserved() {
    let profile = profile_with_targeting();
    let mut draft = TargetingDraft::from_profile(&profile);
    draft.set_job_titles_input("Owner");
    draft.toggle_job_level("Director");

    let merged = draft.selection().merge_into(Some(&profile));

    assert_eq!(merged.business_name.as_deref(), Some("Acme Roofing"));
    assert_eq!(merged.extra.get("id"), Some(&json!(42)));
    assert_eq!(merged.target_job_titles, vec!["Owner"]);
    assert_eq!(merged.target_job_levels, vec!["Director"]);
}

#[test]
fn given_no_profile_when_merge_then_only_targeting_fields_serialized() {
    let mut draft = TargetingDraft::default();
    draft.set_industries_input("Tech");

    let merged = draft.selection().merge_into(None);

    assert_eq!(
        serde_json::to_value(&merged).unwrap(),
        json!({
            "target_industries": ["Tech"],
            "target_company_sizes": [],
            "target_job_titles": [],
            "target_job_levels": [],
        })
    );
}

#[test]
fn given_partial_profile_when_merge_then_absent_fields_stay_absent() {
    let profile: Profile = serde_json::from_value(json!({"business_name": "Acme"})).unwrap();
    let mut draft = TargetingDraft::from_profile(&profile);
    draft.toggle_company_size("1-10");

    let value = serde_json::to_value(draft.selection().merge_into(Some(&profile))).unwrap();

    assert_eq!(value["business_name"], json!("Acme"));
    assert_eq!(value["target_company_sizes"], json!(["1-10"]));
    assert!(value.get("website").is_none());
    assert!(value.get("phone").is_none());
}
