pub mod draft_field;
pub mod onboarding_draft;
pub mod onboarding_step;
pub mod onboarding_wizard;
pub mod profile_payload;
