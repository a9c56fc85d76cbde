use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use booktracker_core::storage::{repository_error_to_status_code, RepositoryError};

/// Body detail returned for any missing book.
pub const BOOK_NOT_FOUND: &str = "Book not found";

/// Application error type that wraps `anyhow::Error`.
///
/// Repository errors are mapped to their HTTP status; anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let repo_error = self.0.downcast_ref::<RepositoryError>();

        let status_code = repo_error
            .map(repository_error_to_status_code)
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let detail = match repo_error {
            Some(RepositoryError::NotFound { .. }) => BOOK_NOT_FOUND.to_string(),
            _ => self.0.to_string(),
        };

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Application error");
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "Request failed");
        }

        (status_code, Json(json!({ "detail": detail }))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
