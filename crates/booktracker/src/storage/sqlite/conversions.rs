//! SQLite row conversion functions.
//!
//! Pure functions for converting between SQLite rows and domain types.

use booktracker_core::book::Book;
use booktracker_core::storage::RepositoryError;
use rusqlite::Row;

/// Convert a SQLite row to a Book.
///
/// Expected columns: id, title, author, description
pub fn row_to_book(row: &Row) -> rusqlite::Result<Book> {
    Ok(Book {
        id: row.get(0)?,
        title: row.get(1)?,
        author: row.get(2)?,
        description: row.get(3)?,
    })
}

/// Convert a `COUNT(*)` result to an unsigned count.
pub fn parse_count(count: i64) -> Result<u64, RepositoryError> {
    u64::try_from(count)
        .map_err(|_| RepositoryError::InvalidData(format!("negative row count: {count}")))
}
