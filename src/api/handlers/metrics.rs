//! Handler for the top domains report.

use axum::{extract::State, http::header, response::IntoResponse};

use crate::error::AppError;
use crate::state::AppState;

/// Reports the three most shortened domains.
///
/// # Endpoint
///
/// `GET /metrics`
///
/// # Response
///
/// ```text
/// example: 3, google: 1, github: 1,
/// ```
///
/// The body is plain text but is labelled `application/json`; existing
/// clients rely on that header.
pub async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let report = state.stats_service.top_domains_report().await?;

    Ok(([(header::CONTENT_TYPE, "application/json")], report))
}
