//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `BookRepository`
//! trait defined in `booktracker_core::storage`. The backend used by the
//! server is selected at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage using `rusqlite` and `tokio-rusqlite`
//! - `inmemory`: process-lifetime storage in an ordered list
//!
//! These features are mutually exclusive.
//!
//! # Examples
//!
//! Build with SQLite (default):
//! ```bash
//! cargo build -p booktracker
//! ```
//!
//! Build with in-memory storage:
//! ```bash
//! cargo build -p booktracker --no-default-features --features inmemory
//! ```

#[cfg(all(feature = "sqlite", feature = "inmemory"))]
compile_error!(
    "Features 'sqlite' and 'inmemory' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "sqlite", feature = "inmemory")))]
compile_error!(
    "No storage backend selected. Enable 'sqlite' or 'inmemory' feature. \
    Example: cargo build -p booktracker --features sqlite"
);

// Always compiled: the router tests run against it regardless of backend.
#[cfg_attr(not(feature = "inmemory"), allow(dead_code))]
pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[allow(unused_imports)]
pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
