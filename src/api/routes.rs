//! API route configuration.

use crate::api::handlers::{
    metrics_handler, metrics_list_handler, shorten_handler, shorten_path_redirect_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Fixed API routes.
///
/// # Endpoints
///
/// - `POST /shorten`       - Create a short code for a URL
/// - `GET  /shorten`       - Lookup of the short code `shorten`, like any `/{code}`
/// - `GET  /metrics`       - Top three domains by number of shortened links
/// - `GET  /metrics/list`  - Every stored code and its original URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/shorten",
            post(shorten_handler).get(shorten_path_redirect_handler),
        )
        .route("/metrics", get(metrics_handler))
        .route("/metrics/list", get(metrics_list_handler))
}
