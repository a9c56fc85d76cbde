//! Health check operations.

use super::BooktrackerClient;
use crate::error::{ClientError, Result};
use serde::{Deserialize, Serialize};

/// Storage health report from `/healthz`.
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub storage: String,
    pub books: u64,
}

impl BooktrackerClient {
    /// Liveness probe; succeeds when the server answers 200.
    pub async fn live(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                detail: "liveness probe failed".to_string(),
            })
        }
    }

    /// Storage health check.
    pub async fn health_check(&self) -> Result<HealthReport> {
        let response = self.client.get(self.url("/healthz")).send().await?;
        self.handle_response(response, None).await
    }
}
