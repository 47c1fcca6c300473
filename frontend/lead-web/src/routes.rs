use crate::{AppState, health, reset_users, unsubscribe_link, unsubscribe_post};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Unsubscribe link and form
        .route(
            "/api/unsubscribe",
            get(unsubscribe_link).post(unsubscribe_post),
        )
        // Admin proxy
        .route("/api/admin/reset-users", post(reset_users))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
