//! SQLite schema definitions and SQL query constants.
//!
//! Pure data, no I/O.

/// Creates the books table when it does not exist yet.
///
/// `AUTOINCREMENT` keeps SQLite from handing out the ID of a deleted row again.
pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS books (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    author TEXT NOT NULL,
    description TEXT
);
"#;

pub const INSERT_BOOK: &str = r#"
INSERT INTO books (title, author, description)
VALUES (?1, ?2, ?3)
"#;

pub const SELECT_ALL_BOOKS: &str = r#"
SELECT id, title, author, description
FROM books
ORDER BY id
"#;

pub const SELECT_BOOK_BY_ID: &str = r#"
SELECT id, title, author, description
FROM books
WHERE id = ?1
"#;

pub const DELETE_BOOK: &str = r#"
DELETE FROM books
WHERE id = ?1
"#;

pub const COUNT_BOOKS: &str = r#"
SELECT COUNT(*)
FROM books
"#;
