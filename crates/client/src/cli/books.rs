//! Book CLI commands.

use clap::{Parser, Subcommand};

/// Book management commands.
#[derive(Debug, Parser)]
pub struct BooksCommand {
    #[command(subcommand)]
    pub action: BooksAction,
}

/// Available book actions.
#[derive(Debug, Subcommand)]
pub enum BooksAction {
    /// List all books.
    List,
    /// Create a new book.
    Create {
        /// Book title.
        #[arg(long)]
        title: String,
        /// Book author.
        #[arg(long)]
        author: String,
        /// Optional description.
        #[arg(long)]
        description: Option<String>,
    },
    /// Get book by ID.
    Get {
        /// Book ID.
        id: i64,
    },
    /// Delete book by ID.
    Delete {
        /// Book ID.
        id: i64,
    },
}
