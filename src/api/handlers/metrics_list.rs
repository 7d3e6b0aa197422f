//! Handler listing every stored link.

use std::collections::BTreeMap;

use axum::extract::State;

use crate::api::response::JsonLine;
use crate::error::AppError;
use crate::state::AppState;

/// Dumps the whole store as a JSON object.
///
/// # Endpoint
///
/// `GET /metrics/list`
///
/// # Response
///
/// ```json
/// {
///   "aZ3k9Qx": "https://example.com/some/page",
///   "b7Yq2Lm": "https://github.com"
/// }
/// ```
pub async fn metrics_list_handler(
    State(state): State<AppState>,
) -> Result<JsonLine<BTreeMap<String, String>>, AppError> {
    let links = state.link_service.list().await?;
    Ok(JsonLine(links))
}
