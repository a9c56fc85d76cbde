//! Book CRUD handlers.
//!
//! Each handler makes exactly one repository call.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use booktracker_core::book::{Book, NewBook};
use booktracker_core::storage::RepositoryError;

use crate::{handlers::AppError, state::AppState};

/// Response body for a successful delete.
#[derive(Debug, Serialize)]
pub struct Deleted {
    pub deleted: i64,
}

/// List all books (GET /books).
pub async fn list_books(State(state): State<AppState>) -> Result<Json<Vec<Book>>, AppError> {
    let books = state.book_repo.list_books().await?;
    Ok(Json(books))
}

/// Create a new book (POST /books).
///
/// Any `id` in the body is ignored; the store assigns one.
pub async fn create_book(
    State(state): State<AppState>,
    Json(payload): Json<NewBook>,
) -> Result<Json<Book>, AppError> {
    tracing::debug!(payload = ?payload, "Received create book request");

    let book = state.book_repo.create_book(&payload).await?;

    tracing::info!(book_id = book.id, title = %book.title, "Created new book");

    Ok(Json(book))
}

/// Get a single book by ID (GET /books/{id}).
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Book>, AppError> {
    match state.book_repo.get_book(id).await? {
        Some(book) => Ok(Json(book)),
        None => Err(RepositoryError::book_not_found(id).into()),
    }
}

/// Delete a book by ID (DELETE /books/{id}).
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Deleted>, AppError> {
    state.book_repo.delete_book(id).await?;

    tracing::info!(book_id = id, "Deleted book");

    Ok(Json(Deleted { deleted: id }))
}
