//! strokesense-api
//!
//! HTTP transport for stroke triage. Thin: request validation and routing
//! only, analysis lives in `strokesense-bedrock` and `strokesense-triage`.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/analyze", post(routes::analyze::analyze_note))
        .fallback(routes::not_found)
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
