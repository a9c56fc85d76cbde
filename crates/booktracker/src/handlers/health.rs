//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Storage probe (counts the stored books)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::state::AppState;

/// GET /livez - Basic liveness probe.
///
/// Returns 200 immediately. Does not touch storage.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Storage probe.
///
/// Returns 200 with the book count when the repository answers, 503 otherwise.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Response {
    let storage = state.book_repo.backend_name();

    match state.book_repo.count_books().await {
        Ok(books) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "status": "ok",
                "storage": storage,
                "books": books,
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, storage, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({
                    "status": "unavailable",
                    "storage": storage,
                    "error": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
