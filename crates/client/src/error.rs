//! Errors surfaced by the book tracker client.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered 404 for a book lookup or delete.
    #[error("Book {id}: {detail}")]
    BookNotFound { id: i64, detail: String },

    /// Any other non-success answer, with the server's `detail` text when present.
    #[error("Server returned {status}: {detail}")]
    Api { status: u16, detail: String },
}

impl ClientError {
    /// Classify a non-success response. `book_id` is set for per-book endpoints.
    pub fn from_status(status: u16, book_id: Option<i64>, detail: String) -> Self {
        match (status, book_id) {
            (404, Some(id)) => Self::BookNotFound { id, detail },
            _ => Self::Api { status, detail },
        }
    }

    /// Returns true when the server reported that the book does not exist.
    pub fn is_book_not_found(&self) -> bool {
        matches!(self, Self::BookNotFound { .. })
    }
}
