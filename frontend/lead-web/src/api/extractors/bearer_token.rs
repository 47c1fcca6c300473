//! Bearer token pulled from the `Authorization` header.

use crate::ApiError;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

const BEARER_PREFIX: &str = "Bearer ";

/// The raw token, without the `Bearer ` prefix. Rejects with 401 when the
/// header is missing, not a bearer credential, or empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl<S: Send + Sync> FromRequestParts<S> for BearerToken {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

            let token = header
                .strip_prefix(BEARER_PREFIX)
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .ok_or_else(|| ApiError::unauthorized("Expected a Bearer token"))?;

            Ok(BearerToken(token.to_string()))
        }
    }
}
