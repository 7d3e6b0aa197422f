//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`       - Create a short code
//! - `GET  /metrics`       - Top domains report
//! - `GET  /metrics/list`  - Full code to URL listing
//! - `GET  /{code}`        - Short link redirect
//!
//! Fixed routes win over `/{code}`, so no short code can shadow them.
//! `GET /shorten` is still served as a short code lookup.
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .merge(api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer())
}
