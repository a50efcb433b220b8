//! Route definitions for the Discord Notes API
//!
//! This module organizes all API routes and applies middleware.

use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod auth;
mod bot;
mod health;
mod notes;

#[cfg(test)]
mod auth_tests;

pub use auth::auth_routes;
pub use bot::bot_routes;
pub use notes::note_routes;

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config().cors_origins());
    let expose_bot_api = state.config().server.expose_bot_api;

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api", api_routes(expose_bot_api))
        // Apply middleware layers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API routes under the common /api prefix
fn api_routes(expose_bot_api: bool) -> Router<AppState> {
    let router = Router::new()
        .route("/", get(health::api_root))
        .nest("/auth", auth::auth_routes())
        .nest("/notes", notes::note_routes());

    // The bot surface is unauthenticated; deployments opt out of mounting
    // it entirely via server.expose_bot_api.
    if expose_bot_api {
        router.nest("/bot", bot::bot_routes())
    } else {
        router
    }
}

/// Build the CORS layer from configured origins; "*" allows any origin
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let parsed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        layer.allow_origin(parsed)
    }
}
