//! Pretty output formatting.

use booktracker_core::book::Book;

use crate::client::health::HealthReport;

/// Format a book for display.
pub fn format_book(book: &Book) -> String {
    let mut output = format!("{} by {}\n  ID: {}", book.title, book.author, book.id);
    if let Some(desc) = &book.description {
        output.push_str(&format!("\n  Description: {}", desc));
    }
    output
}

/// Format books for display.
pub fn format_books(books: &[Book]) -> String {
    if books.is_empty() {
        return "No books found.".to_string();
    }
    let mut output = format!("BOOKS ({})\n", books.len());
    output.push_str(&"-".repeat(40));
    for book in books {
        output.push_str(&format!("\n{}", format_book(book)));
        output.push('\n');
    }
    output
}

/// Format a health report for display.
pub fn format_health(report: &HealthReport) -> String {
    format!(
        "Status: {}\n  Storage: {}\n  Books: {}",
        report.status, report.storage, report.books
    )
}
