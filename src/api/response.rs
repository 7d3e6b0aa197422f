//! Response helpers shared by the JSON endpoints.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::error::AppError;

/// JSON body terminated by a newline.
///
/// `<`, `>`, `&`, U+2028 and U+2029 are written as `\uXXXX` escapes so the
/// body stays safe to embed in HTML. Otherwise it matches [`axum::Json`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonLine<T>(pub T);

impl<T: Serialize> IntoResponse for JsonLine<T> {
    fn into_response(self) -> Response {
        match to_json_line(&self.0) {
            Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
            Err(e) => AppError::internal(format!("Failed to encode response: {e}")).into_response(),
        }
    }
}

/// Serializes `value` to a single escaped JSON line.
pub fn to_json_line<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let raw = serde_json::to_string(value)?;

    let mut out = String::with_capacity(raw.len() + 1);
    for c in raw.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c => out.push(c),
        }
    }
    out.push('\n');

    Ok(out)
}
