//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds the book repository as a trait object and picks
//! the concrete backend via feature flags.

use std::sync::Arc;

use booktracker_core::storage::BookRepository;

use crate::config::Config;

/// Shared application state.
///
/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Book repository for the active storage backend.
    pub book_repo: Arc<dyn BookRepository>,
}

impl AppState {
    /// Creates an AppState around an already opened repository.
    pub fn with_repository(book_repo: Arc<dyn BookRepository>) -> Self {
        Self { book_repo }
    }
}

// ============================================================================
// Factory functions for the storage backends
// ============================================================================

#[cfg(feature = "sqlite")]
mod sqlite_backend {
    use super::*;
    use crate::storage::SqliteRepository;

    impl AppState {
        /// Creates AppState with SQLite storage.
        ///
        /// The books table is created if it does not exist.
        pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!(path = %config.sqlite_path, "Opening SQLite database");
            let sqlite_repo = Arc::new(SqliteRepository::new(&config.sqlite_path).await?);
            Ok(Self::with_repository(sqlite_repo))
        }
    }
}

#[cfg(feature = "inmemory")]
mod inmemory_backend {
    use super::*;
    use crate::storage::InMemoryRepository;

    impl AppState {
        /// Creates AppState with in-memory storage.
        pub async fn new(_config: &Config) -> Result<Self, anyhow::Error> {
            tracing::info!("Using in-memory storage, books will not survive a restart");
            Ok(Self::with_repository(Arc::new(InMemoryRepository::new())))
        }
    }
}

// ============================================================================
// Test support - provides Default implementation for unit tests
// ============================================================================
