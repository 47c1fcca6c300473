use crate::ApiError;

use std::panic::Location;

use axum::{http::StatusCode, response::IntoResponse};
use error_location::ErrorLocation;
use googletest::assert_that;
use googletest::prelude::eq;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let (status, json) = body_json(ApiError::validation("Email is required", Some("email"))).await;

    assert_that!(status, eq(StatusCode::BAD_REQUEST));
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["message"], "Email is required");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_validation_error_without_field_omits_it() {
    let (_, json) = body_json(ApiError::validation("Bad body", None)).await;

    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let (status, json) = body_json(ApiError::unauthorized("Missing Authorization header")).await;

    assert_that!(status, eq(StatusCode::UNAUTHORIZED));
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_bad_gateway_returns_502() {
    let error = ApiError::BadGateway {
        message: "Backend unavailable".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let (status, json) = body_json(error).await;

    assert_that!(status, eq(StatusCode::BAD_GATEWAY));
    assert_eq!(json["error"]["code"], "BAD_GATEWAY");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let (status, json) = body_json(ApiError::internal("Admin secret is not configured")).await;

    assert_that!(status, eq(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_client_error_converts_to_bad_gateway() {
    let error: ApiError = lead_client::ClientError::no_token().into();

    assert!(matches!(error, ApiError::BadGateway { .. }));
}
