//! Telegram Bot API endpoint

use reqwest::Client;
use tracing::debug;
use verdict_core::dto::telegram::{ApiResponse, SendMessage};

use crate::error::{ClientError, Result};

/// HTTP client for the Telegram Bot API
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API (e.g., "https://api.telegram.org")
    api_url: String,
    /// Bot token, part of every method URL
    token: String,
    /// HTTP client instance
    client: Client,
}

impl TelegramClient {
    /// Create a new Telegram client with a default HTTP client
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(api_url, token, Client::new())
    }

    /// Create a new Telegram client with a custom HTTP client
    pub fn with_client(api_url: impl Into<String>, token: impl Into<String>, client: Client) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the base URL of the Bot API
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Send a plain text message to a chat
    ///
    /// # Errors
    /// * `Transport` - API unreachable or request timed out
    /// * `Rejected` - the API refused the message (unknown chat, rate limit, ...)
    /// * `UpstreamUnavailable` - non-success status without a Bot API envelope
    /// * `MalformedResponse` - success status but unreadable envelope
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);
        debug!("Sending message to chat {}", chat_id);

        let response = self
            .client
            .post(&url)
            .json(&SendMessage {
                chat_id: chat_id.to_string(),
                text: text.to_string(),
            })
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.without_url()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(e.without_url()))?;

        // Bot API errors carry an `ok: false` envelope even on 4xx/5xx.
        match serde_json::from_slice::<ApiResponse>(&body) {
            Ok(envelope) if envelope.ok && status.is_success() => Ok(()),
            Ok(envelope) => Err(ClientError::Rejected {
                code: envelope.error_code.or(Some(i64::from(status.as_u16()))),
                description: envelope
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            }),
            Err(_) if !status.is_success() => Err(ClientError::upstream(
                status.as_u16(),
                String::from_utf8_lossy(&body),
            )),
            Err(e) => Err(ClientError::MalformedResponse(format!(
                "unreadable Bot API envelope: {}",
                e
            ))),
        }
    }
}

impl std::fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .finish()
    }
}
