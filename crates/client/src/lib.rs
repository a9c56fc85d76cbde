//! booktracker_client - CLI client for the book tracker API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::BooktrackerClient;
pub use error::{ClientError, Result};
