use crate::{
    BannerKind, CoreError, PROFILE_NOT_LOADED_MESSAGE, Profile, ProfileLookup,
    SAVE_TARGETING_SUCCESS_MESSAGE, TargetingEditor,
};

use std::time::{Duration, Instant};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err};
use serde_json::json;

const TTL: Duration = Duration::from_secs(3);

fn loaded_editor() -> TargetingEditor {
    let profile: Profile = serde_json::from_value(json!({
        "business_name": "Acme Roofing",
        "plan": "pro",
        "target_industries": ["Tech"],
    }))
    .unwrap();

    let mut editor = TargetingEditor::new();
    editor.load(ProfileLookup::Found(profile));
    editor
}

#[test]
fn given_new_editor_then_loading_until_load() {
    let mut editor = TargetingEditor::new();
    assert!(editor.is_loading());

    editor.load(ProfileLookup::NotFound);

    assert!(!editor.is_loading());
    assert!(editor.profile().is_none());
    assert!(editor.draft().target_industries.is_empty());
}

#[test]
fn given_loaded_profile_then_draft_seeded() {
    let editor = loaded_editor();

    assert_eq!(editor.draft().industries_input, "Tech");
    assert_eq!(
        editor.profile().and_then(|p| p.business_name.as_deref()),
        Some("Acme Roofing")
    );
}

#[test]
fn given_begin_save_then_merged_payload_keeps_unknown_fields() {
    let mut editor = loaded_editor();
    editor.draft_mut().set_industries_input("Tech, Finance");
    editor.draft_mut().toggle_company_size("11-50");

    let payload = editor.begin_save().unwrap();

    assert!(editor.is_saving());
    assert_eq!(payload.target_industries, vec!["Tech", "Finance"]);
    assert_eq!(payload.target_company_sizes, vec!["11-50"]);
    assert_eq!(payload.extra.get("plan"), Some(&json!("pro")));
}

#[test]
fn given_successful_save_then_banner_expires_after_ttl() {
    let mut editor = loaded_editor();
    editor.draft_mut().set_job_titles_input("CEO");
    editor.begin_save().unwrap();
    let now = Instant::now();

    editor.finish_save(Ok(()), now, TTL);

    assert!(!editor.is_saving());
    let banner = editor.banner(now).unwrap();
    assert_eq!(banner.kind, BannerKind::Success);
    assert_eq!(banner.message, SAVE_TARGETING_SUCCESS_MESSAGE);
    assert!(editor.banner(now + Duration::from_secs(2)).is_some());
    assert!(editor.banner(now + TTL).is_none());
}

#[test]
fn given_successful_save_then_profile_adopts_merged_lists() {
    let mut editor = loaded_editor();
    editor.draft_mut().set_job_titles_input("CEO, CFO");
    editor.begin_save().unwrap();

    editor.finish_save(Ok(()), Instant::now(), TTL);

    let profile = editor.profile().unwrap();
    assert_eq!(profile.target_job_titles, vec!["CEO", "CFO"]);
    assert_eq!(editor.draft().target_job_titles, vec!["CEO", "CFO"]);
}

#[test]
fn given_failed_save_then_error_banner_persists_and_profile_untouched() {
    let mut editor = loaded_editor();
    editor.draft_mut().set_industries_input("Retail");
    editor.begin_save().unwrap();
    let now = Instant::now();

    editor.finish_save(Err("Backend unavailable".to_string()), now, TTL);

    let banner = editor.banner(now + Duration::from_secs(3600)).unwrap();
    assert_eq!(banner.kind, BannerKind::Error);
    assert_eq!(banner.message, "Backend unavailable");
    assert_eq!(editor.profile().unwrap().target_industries, vec!["Tech"]);
    assert_eq!(editor.draft().industries_input, "Retail");
}

#[test]
fn given_error_banner_when_dismiss_then_hidden() {
    let mut editor = loaded_editor();
    editor.begin_save().unwrap();
    let now = Instant::now();
    editor.finish_save(Err("nope".to_string()), now, TTL);

    editor.dismiss_banner();

    assert!(editor.banner(now).is_none());
}

#[test]
fn given_success_banner_when_dismiss_then_still_shown() {
    let mut editor = loaded_editor();
    editor.begin_save().unwrap();
    let now = Instant::now();
    editor.finish_save(Ok(()), now, TTL);

    editor.dismiss_banner();

    assert!(editor.banner(now).is_some());
}

#[test]
fn given_new_save_attempt_then_previous_banner_cleared() {
    let mut editor = loaded_editor();
    editor.begin_save().unwrap();
    let now = Instant::now();
    editor.finish_save(Err("nope".to_string()), now, TTL);

    editor.begin_save().unwrap();

    assert!(editor.banner(now).is_none());
}

#[test]
fn given_discard_then_edits_and_profile_dropped() {
    let mut editor = loaded_editor();
    editor.draft_mut().set_industries_input("Retail");
    editor.begin_save().unwrap();

    editor.discard();

    assert!(!editor.is_loading());
    assert!(!editor.is_saving());
    assert!(editor.profile().is_none());
    assert_eq!(editor.draft().industries_input, "");
}

#[test]
fn given_failed_load_then_save_refused_with_error_banner() {
    let mut editor = TargetingEditor::new();
    editor.fail_load("Unable to reach the server. Please try again.");
    editor.draft_mut().set_industries_input("Tech");

    let result = editor.begin_save();

    assert!(matches!(result, Err(CoreError::ProfileNotLoaded { .. })));
    assert_that!(result, err(anything()));
    assert!(!editor.is_saving());
    assert!(!editor.is_loading());
    let banner = editor.banner(Instant::now()).unwrap();
    assert_that!(banner.kind, eq(BannerKind::Error));
    assert_that!(banner.message.as_str(), eq(PROFILE_NOT_LOADED_MESSAGE));
}

#[test]
fn given_failed_load_when_reloaded_then_save_allowed() {
    let mut editor = TargetingEditor::new();
    editor.fail_load("nope");

    editor.load(ProfileLookup::NotFound);

    assert!(!editor.load_failed());
    assert!(editor.begin_save().is_ok());
}
