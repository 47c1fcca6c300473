//! Server-side routes owned by the LeadSite frontend.
//!
//! Unsubscribe links from outreach emails land here, and the admin reset
//! call is proxied through here so the shared secret never reaches a
//! browser.

pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod shutdown;
pub mod state;


pub use api::{
    admin::reset_users,
    error::{ApiError, Result as ApiResult},
    extractors::bearer_token::BearerToken,
    unsubscribe::{unsubscribe_link, unsubscribe_post},
    unsubscribe_request::{UnsubscribeQuery, UnsubscribeRequest},
};
pub use routes::build_router;
pub use shutdown::ShutdownCoordinator;
pub use state::AppState;

/// Public page that renders the unsubscribe result
pub const UNSUBSCRIBE_PAGE: &str = "/unsubscribe";
const BACKEND_UNSUBSCRIBE_PATH: &str = "/api/unsubscribe";
const BACKEND_RESET_USERS_PATH: &str = "/api/admin/reset-users";
const ADMIN_SECRET_HEADER: &str = "X-Admin-Secret";
