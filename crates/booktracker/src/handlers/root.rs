use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// Welcome message (GET /).
pub async fn index(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "message": format!(
            "Welcome to the Book Tracker API with {}!",
            state.book_repo.backend_name()
        )
    }))
}
