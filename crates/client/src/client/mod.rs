//! HTTP client for the book tracker API.

pub mod books;
pub mod health;

use serde::Deserialize;

use crate::error::{ClientError, Result};

/// Error body returned by the server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// HTTP client for the book tracker API.
#[derive(Debug, Clone)]
pub struct BooktrackerClient {
    client: reqwest::Client,
    base_url: String,
}

impl BooktrackerClient {
    /// Create a new client with the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a success body, or turn the response into a client error.
    ///
    /// `book_id` names the book for per-book endpoints so a 404 becomes
    /// [`ClientError::BookNotFound`].
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
        book_id: Option<i64>,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return response.json().await.map_err(ClientError::from);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        Err(ClientError::from_status(
            status.as_u16(),
            book_id,
            error_message(text),
        ))
    }
}

/// Pull the `detail` field out of an error body, falling back to the raw text.
fn error_message(text: String) -> String {
    serde_json::from_str::<ErrorBody>(&text)
        .map(|body| body.detail)
        .unwrap_or(text)
}
