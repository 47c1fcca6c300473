//! Admin reset proxy.
//!
//! The shared secret lives in server config and is attached here, so the
//! browser only ever holds its own bearer token.

use crate::{
    ADMIN_SECRET_HEADER, ApiError, ApiResult, AppState, BACKEND_RESET_USERS_PATH, BearerToken,
    api::unsubscribe::passthrough,
};

use lead_client::Method;

use axum::{extract::State, response::Response};
use log::{info, warn};
use serde_json::json;

/// POST /api/admin/reset-users
pub async fn reset_users(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> ApiResult<Response> {
    let Some(secret) = state.admin_secret.as_deref() else {
        warn!("Admin reset requested but no admin secret is configured");
        return Err(ApiError::internal("Admin secret is not configured"));
    };

    info!("Forwarding admin user reset");

    let raw = state
        .client
        .send_raw(
            Method::POST,
            BACKEND_RESET_USERS_PATH,
            Some(&token),
            &[(ADMIN_SECRET_HEADER, secret)],
            Some(&json!({})),
        )
        .await?;

    if !(200..300).contains(&raw.status) {
        warn!("Backend rejected admin reset with status {}", raw.status);
    }

    Ok(passthrough(raw.status, raw.body))
}
