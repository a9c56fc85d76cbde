//! Startup seeding of an empty store.

use booktracker_core::book::sample_books;
use booktracker_core::storage::{BookRepository, Result};

/// Inserts the sample books when the store holds no books.
///
/// Returns how many books were inserted; a non-empty store is left untouched.
pub async fn seed_sample_books(repo: &dyn BookRepository) -> Result<usize> {
    let existing = repo.count_books().await?;
    if existing > 0 {
        tracing::debug!(existing, "Store already has books, skipping seed");
        return Ok(0);
    }

    let samples = sample_books();
    for book in &samples {
        let created = repo.create_book(book).await?;
        tracing::debug!(book_id = created.id, title = %created.title, "Seeded book");
    }

    tracing::info!(
        count = samples.len(),
        backend = repo.backend_name(),
        "Initialized storage with sample books"
    );

    Ok(samples.len())
}
