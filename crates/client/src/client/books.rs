//! Book API operations.

use serde::Deserialize;

use super::BooktrackerClient;
use crate::error::Result;
use booktracker_core::book::{Book, NewBook};

/// Body returned by a successful delete.
#[derive(Debug, Deserialize)]
pub struct Deleted {
    pub deleted: i64,
}

impl BooktrackerClient {
    /// List all books.
    pub async fn list_books(&self) -> Result<Vec<Book>> {
        let response = self.client.get(self.url("/books")).send().await?;
        self.handle_response(response, None).await
    }

    /// Create a new book.
    pub async fn create_book(&self, book: &NewBook) -> Result<Book> {
        let response = self
            .client
            .post(self.url("/books"))
            .json(book)
            .send()
            .await?;
        self.handle_response(response, None).await
    }

    /// Get book by ID.
    pub async fn get_book(&self, id: i64) -> Result<Book> {
        let response = self
            .client
            .get(self.url(&format!("/books/{}", id)))
            .send()
            .await?;
        self.handle_response(response, Some(id)).await
    }

    /// Delete book by ID, returning the deleted ID.
    pub async fn delete_book(&self, id: i64) -> Result<i64> {
        let response = self
            .client
            .delete(self.url(&format!("/books/{}", id)))
            .send()
            .await?;
        let deleted: Deleted = self.handle_response(response, Some(id)).await?;
        Ok(deleted.deleted)
    }
}
