use async_trait::async_trait;

use crate::book::{Book, NewBook};

use super::Result;

/// Repository for book operations.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Short human-readable name of the backend (e.g. "SQLite").
    fn backend_name(&self) -> &'static str;

    /// Inserts a book and returns it with its store-assigned ID.
    async fn create_book(&self, book: &NewBook) -> Result<Book>;

    /// Lists all books in ascending ID order.
    async fn list_books(&self) -> Result<Vec<Book>>;

    /// Gets a book by its ID.
    async fn get_book(&self, id: i64) -> Result<Option<Book>>;

    /// Deletes a book by its ID.
    ///
    /// Returns `RepositoryError::NotFound` when no book has this ID.
    async fn delete_book(&self, id: i64) -> Result<()>;

    /// Counts the stored books.
    async fn count_books(&self) -> Result<u64>;
}
