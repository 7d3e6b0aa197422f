//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::redirect_target::{location_header_value, redirect_body, resolve_target};

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Absolute URLs are sent in `Location` as stored; they are not checked for
/// safety, so any target that was shortened is reachable. Relative ones are
/// resolved against `/` first. The response carries a short HTML body
/// linking to the target.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 500 if the stored URL cannot be sent as a header value.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    redirect_to(&state, &code).await
}

/// `GET /shorten`: only `POST` creates links, so a `GET` is treated as an
/// ordinary short code lookup.
pub async fn shorten_path_redirect_handler(
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    redirect_to(&state, "shorten").await
}

async fn redirect_to(state: &AppState, code: &str) -> Result<Response, AppError> {
    let link = state.link_service.resolve(code).await?;

    let target = resolve_target(&link.long_url);
    let location = HeaderValue::from_str(&location_header_value(&target))
        .map_err(|_| AppError::internal("Stored URL is not a valid redirect target"))?;

    debug!(code = %link.code, "Redirecting");

    Ok((
        StatusCode::FOUND,
        [
            (header::LOCATION, location),
            (
                header::CONTENT_TYPE,
                HeaderValue::from_static("text/html; charset=utf-8"),
            ),
        ],
        redirect_body(&target),
    )
        .into_response())
}
