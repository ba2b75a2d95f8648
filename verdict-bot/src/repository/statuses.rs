//! Statuses repository
//!
//! Fetches raw homework status payloads from the status API.

use async_trait::async_trait;
use verdict_client::{ClientError, PracticumClient};
use verdict_core::domain::TimeCursor;

/// Repository trait for reading homework statuses
#[async_trait]
pub trait StatusRepository: Send + Sync {
    /// Fetches statuses changed since `cursor`
    ///
    /// Returns the raw JSON body; shape validation is the caller's job.
    /// Performs a single request and never retries.
    async fn fetch(&self, cursor: TimeCursor) -> Result<serde_json::Value, ClientError>;
}

/// HTTP implementation of StatusRepository
pub struct HttpStatusRepository {
    client: PracticumClient,
}

impl HttpStatusRepository {
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StatusRepository for HttpStatusRepository {
    async fn fetch(&self, cursor: TimeCursor) -> Result<serde_json::Value, ClientError> {
        self.client.fetch_statuses(cursor).await
    }
}
