mod sample_data;
mod types;

pub use sample_data::sample_books;
pub use types::{Book, NewBook};
