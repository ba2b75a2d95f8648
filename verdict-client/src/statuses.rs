//! Homework status API endpoint

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use tracing::debug;
use verdict_core::domain::TimeCursor;
use verdict_core::dto::status::StatusQuery;

use crate::error::Result;
use crate::handle_json_response;

/// HTTP client for the homework status API
#[derive(Clone)]
pub struct PracticumClient {
    /// Full URL of the statuses endpoint
    endpoint: String,
    /// OAuth token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new status client with a default HTTP client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the homework statuses endpoint
    /// * `token` - OAuth token of the student account
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new status client with a custom HTTP client
    ///
    /// Use this to set request timeouts, proxies or TLS settings.
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch statuses of homeworks changed since `from_date`
    ///
    /// Issues exactly one GET request. The body is returned as raw JSON so
    /// the caller can validate its shape.
    ///
    /// # Errors
    /// * `Transport` - endpoint unreachable or request timed out
    /// * `UpstreamUnavailable` - non-success status code
    /// * `MalformedResponse` - body is not JSON
    pub async fn fetch_statuses(&self, from_date: TimeCursor) -> Result<serde_json::Value> {
        debug!("Requesting homework statuses from {}", from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&StatusQuery { from_date })
            .send()
            .await?;

        handle_json_response(response).await
    }
}

impl std::fmt::Debug for PracticumClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PracticumClient")
            .field("endpoint", &self.endpoint)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use crate::test_server::{closed_url, http_response, serve_once, serve_silence};
    use std::time::Duration;

    #[tokio::test]
    async fn test_fetch_sends_cursor_and_token() {
        let body = r#"{"homeworks": [], "current_date": 2000}"#;
        let (url, request) = serve_once(http_response("200 OK", "application/json", body)).await;

        let client = PracticumClient::new(format!("{url}/api/user_api/homework_statuses/"), "secret");
        let raw = client.fetch_statuses(TimeCursor::new(1000)).await.unwrap();

        assert_eq!(raw["current_date"], 2000);
        let request = request.await.unwrap();
        assert!(request.starts_with("GET /api/user_api/homework_statuses/?from_date=1000 "));
        assert!(request.to_ascii_lowercase().contains("authorization: oauth secret"));
    }

    #[tokio::test]
    async fn test_non_success_is_upstream_unavailable() {
        let (url, _request) = serve_once(http_response(
            "503 Service Unavailable",
            "text/plain",
            "maintenance",
        ))
        .await;

        let client = PracticumClient::new(url, "secret");
        let err = client.fetch_statuses(TimeCursor::new(0)).await.unwrap_err();

        match err {
            ClientError::UpstreamUnavailable { status, body } => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("expected UpstreamUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_body_is_malformed() {
        let (url, _request) =
            serve_once(http_response("200 OK", "text/html", "<html>oops</html>")).await;

        let client = PracticumClient::new(url, "secret");
        let err = client.fetch_statuses(TimeCursor::new(0)).await.unwrap_err();

        assert!(matches!(err, ClientError::MalformedResponse(ref msg) if msg.contains("<html>")));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        let client = PracticumClient::new(closed_url().await, "secret");
        let err = client.fetch_statuses(TimeCursor::new(0)).await.unwrap_err();

        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let http = Client::builder()
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        let client = PracticumClient::with_client(serve_silence().await, "secret", http);
        let err = client.fetch_statuses(TimeCursor::new(0)).await.unwrap_err();

        assert!(err.is_timeout());
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = PracticumClient::new("http://localhost", "secret");
        let debug = format!("{client:?}");
        assert!(!debug.contains("secret"));
        assert_eq!(client.endpoint(), "http://localhost");
    }
}
