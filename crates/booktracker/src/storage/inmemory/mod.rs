//! In-memory storage backend.
//!
//! Holds the books in an ordered `Vec` behind a tokio `RwLock`. Nothing is
//! persisted; the list is gone when the process exits. Handy for local
//! development and for tests that need no database.
//!
//! # Example
//!
//! ```rust,ignore
//! use booktracker::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
