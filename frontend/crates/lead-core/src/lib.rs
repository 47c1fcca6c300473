//! View-state machines for the LeadSite frontend.
//!
//! Everything here is pure: no IO, no clocks beyond the `Instant`s callers
//! pass in. Network orchestration lives in `lead-client`.

pub mod banner;
pub mod error;
pub mod error_kind;
pub mod forms;
pub mod guard;
pub mod models;
pub mod onboarding;
pub mod options;
pub mod route;
pub mod targeting;

#[cfg(test)]
mod tests;

pub use banner::{Banner, BannerKind};
pub use error::{CoreError, Result};
pub use error_kind::ErrorKind;
pub use forms::{
    admin_reset_gate::AdminResetGate, login_form::LoginForm,
    password_reset_form::{ForgotPasswordForm, ResetPasswordForm},
    signup_form::SignupForm,
};
pub use guard::{guard_decision::GuardDecision, guard_state::GuardState};
pub use models::{
    auth_response::{AuthResponse, AuthUser},
    profile::Profile,
    profile_lookup::{ProfileEnvelope, ProfileLookup},
    save_response::SaveResponse,
};
pub use onboarding::{
    draft_field::DraftField, onboarding_draft::OnboardingDraft,
    onboarding_step::OnboardingStep, onboarding_wizard::OnboardingWizard,
    profile_payload::ProfilePayload,
};
pub use route::Route;
pub use targeting::{
    targeting_draft::{TargetingDraft, TargetingSelection},
    targeting_editor::TargetingEditor,
};

/// Shown whenever a wizard step fails validation. Never names the field.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please complete all required fields";
/// Fallback when the backend rejects a profile save without a message.
pub const SAVE_PROFILE_FAILED_MESSAGE: &str = "Failed to save profile";
/// Fallback for targeting saves.
pub const SAVE_TARGETING_FAILED_MESSAGE: &str = "Failed to save targeting preferences";
/// Shown after a successful targeting save.
pub const SAVE_TARGETING_SUCCESS_MESSAGE: &str = "Targeting preferences saved";
/// Targeting save refused because the profile never loaded.
pub const PROFILE_NOT_LOADED_MESSAGE: &str =
    "Your profile could not be loaded. Reload before saving.";
