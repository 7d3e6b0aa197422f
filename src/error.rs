//! Application error type and its HTTP mapping.
//!
//! Every handler returns `Result<_, AppError>`. Errors are terminal: they are
//! rendered straight into a plain-text response and never retried.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// Errors surfaced to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request could not be understood (malformed JSON body).
    #[error("{0}")]
    BadRequest(String),

    /// The requested short code is unknown.
    #[error("{0}")]
    NotFound(String),

    /// A stored value could not be turned into a response.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (
            status,
            [
                (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
                (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
            ],
            format!("{self}\n"),
        )
            .into_response()
    }
}
