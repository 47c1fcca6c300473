//! Backend access for the LeadSite frontend.
//!
//! [`Client`] talks to the remote API, [`SessionContext`] owns the stored
//! token, and the `flows` module strings them together with the view-state
//! machines from `lead-core`. Auth failures never surface as redirects from
//! inside the client; the [`Dispatcher`] turns them into navigation.

pub mod client;
pub mod dispatcher;
pub mod flows;
pub mod navigation;
pub mod scope;
pub mod session;

#[cfg(test)]
mod tests;

pub use client::{
    client::{Client, RawResponse},
    error::{ClientError, Result as ClientResult},
};
pub use dispatcher::Dispatcher;
pub use reqwest::Method;
pub use flows::FlowOutcome;
pub use navigation::{Navigator, RecordingNavigator};
pub use scope::ViewScope;
pub use session::{
    error::{Result as SessionResult, SessionError},
    file_store::FileSessionStore,
    memory_store::MemorySessionStore,
    session_context::SessionContext,
    session_store::SessionStore,
};

/// Canonical storage key for the bearer token
pub const TOKEN_KEY: &str = "leadsite_token";
/// Canonical storage key for the cached user id
pub const USER_ID_KEY: &str = "leadsite_user_id";
/// Keys older builds wrote the token under, read once and migrated
pub const LEGACY_TOKEN_KEYS: &[&str] = &["token", "auth_token"];

const PROFILE_PATH: &str = "/api/profile";
const UNSUBSCRIBE_PATH: &str = "/api/unsubscribe";
const ADMIN_RESET_USERS_PATH: &str = "/api/admin/reset-users";
const ADMIN_SECRET_HEADER: &str = "X-Admin-Secret";
