//! Handler for link shortening endpoint.

use axum::{body::Bytes, extract::State};

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::api::response::JsonLine;
use crate::error::AppError;
use crate::state::AppState;

/// Creates (or reuses) a short code for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/page" }
/// ```
///
/// # Response
///
/// ```json
/// { "short_url": "aZ3k9Qx" }
/// ```
///
/// The body is terminated by a newline. Shortening the same string again
/// returns the same code.
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not a JSON object with a string `url`.
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<JsonLine<ShortenResponse>, AppError> {
    let request = ShortenRequest::from_body(&body)?;

    let link = state.link_service.shorten(request.url).await?;

    Ok(JsonLine(ShortenResponse {
        short_url: link.code,
    }))
}
