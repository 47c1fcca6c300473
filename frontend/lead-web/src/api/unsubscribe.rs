//! Unsubscribe endpoints.
//!
//! `GET` serves the link embedded in outreach emails and always ends in a
//! redirect to the public unsubscribe page. `POST` is the JSON call that
//! page makes.

use crate::{
    ApiError, ApiResult, AppState, BACKEND_UNSUBSCRIBE_PATH, UNSUBSCRIBE_PAGE, UnsubscribeQuery,
    UnsubscribeRequest,
};

use lead_client::Method;

use axum::{
    Json,
    extract::{Query, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use log::{info, warn};
use reqwest::Url;
use serde_json::{Value, json};

const STATUS_SUCCESS: &str = "success";
const STATUS_ERROR: &str = "error";

/// GET /api/unsubscribe?email=..[&token=..]
///
/// With only an email the visitor is sent to the confirmation page. With a
/// token the request is forwarded first and the outcome passed on as
/// `status=success|error`.
pub async fn unsubscribe_link(
    State(state): State<AppState>,
    Query(query): Query<UnsubscribeQuery>,
) -> ApiResult<Redirect> {
    let request = UnsubscribeRequest {
        email: query.email,
        token: query.token,
    };
    let email = request
        .email()
        .ok_or_else(|| ApiError::validation("Email is required", Some("email")))?
        .to_string();

    let Some(token) = request.token.as_deref().filter(|t| !t.trim().is_empty()) else {
        return Ok(Redirect::temporary(&page_url(&email, None)));
    };

    let body = json!({ "email": email, "token": token });
    let status = match state
        .client
        .send_raw(Method::POST, BACKEND_UNSUBSCRIBE_PATH, None, &[], Some(&body))
        .await
    {
        Ok(raw) if (200..300).contains(&raw.status) => {
            info!("Unsubscribed via link");
            STATUS_SUCCESS
        }
        Ok(raw) => {
            warn!("Backend rejected unsubscribe link with status {}", raw.status);
            STATUS_ERROR
        }
        Err(e) => {
            warn!("Unsubscribe link forward failed: {e}");
            STATUS_ERROR
        }
    };

    Ok(Redirect::temporary(&page_url(&email, Some(status))))
}

/// POST /api/unsubscribe
///
/// A missing or blank email is rejected here and never reaches the
/// backend. Otherwise the backend's status and body are returned as-is.
pub async fn unsubscribe_post(
    State(state): State<AppState>,
    payload: Result<Json<UnsubscribeRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload?;
    let email = request
        .email()
        .ok_or_else(|| ApiError::validation("Email is required", Some("email")))?;

    let forwarded = UnsubscribeRequest {
        email: Some(email.to_string()),
        token: request.token.clone(),
    };
    let body = serde_json::to_value(&forwarded).map_err(|e| ApiError::internal(e.to_string()))?;
    let raw = state
        .client
        .send_raw(Method::POST, BACKEND_UNSUBSCRIBE_PATH, None, &[], Some(&body))
        .await?;

    Ok(passthrough(raw.status, raw.body))
}

/// Relay a backend answer with its original status.
pub(crate) fn passthrough(status: u16, body: Value) -> Response {
    let status = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
    let body = if body.is_null() { json!({}) } else { body };
    (status, Json(body)).into_response()
}

/// `/unsubscribe?email=..[&status=..]`, percent-encoded.
pub(crate) fn page_url(email: &str, status: Option<&str>) -> String {
    let Ok(mut url) = Url::parse(&format!("http://localhost{UNSUBSCRIBE_PAGE}")) else {
        return format!("{UNSUBSCRIBE_PAGE}?email={email}");
    };
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("email", email);
        if let Some(status) = status {
            pairs.append_pair("status", status);
        }
    }
    format!("{}?{}", url.path(), url.query().unwrap_or_default())
}
