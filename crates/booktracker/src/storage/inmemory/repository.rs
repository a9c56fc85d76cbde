//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use booktracker_core::book::{Book, NewBook};
use booktracker_core::storage::{BookRepository, RepositoryError, Result};

/// Ordered book list plus the next identifier to hand out.
#[derive(Debug)]
struct BookList {
    books: Vec<Book>,
    next_id: i64,
}

/// In-memory storage backend.
///
/// Books are kept in insertion order, which is also ascending ID order since
/// identifiers only ever grow. Data lives as long as the process.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    inner: Arc<RwLock<BookList>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(BookList {
                books: Vec::new(),
                next_id: 1,
            })),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryRepository {
    fn backend_name(&self) -> &'static str {
        "in-memory storage"
    }

    async fn create_book(&self, book: &NewBook) -> Result<Book> {
        let mut list = self.inner.write().await;
        let book = book.clone().into_book(list.next_id);
        list.next_id += 1;
        list.books.push(book.clone());
        Ok(book)
    }

    async fn list_books(&self) -> Result<Vec<Book>> {
        let list = self.inner.read().await;
        Ok(list.books.clone())
    }

    async fn get_book(&self, id: i64) -> Result<Option<Book>> {
        let list = self.inner.read().await;
        Ok(list.books.iter().find(|b| b.id == id).cloned())
    }

    async fn delete_book(&self, id: i64) -> Result<()> {
        let mut list = self.inner.write().await;
        let position = list
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| RepositoryError::book_not_found(id))?;
        list.books.remove(position);
        Ok(())
    }

    async fn count_books(&self) -> Result<u64> {
        let list = self.inner.read().await;
        Ok(list.books.len() as u64)
    }
}
