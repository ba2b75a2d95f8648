//! Telegram Bot API DTOs

use serde::{Deserialize, Serialize};

/// Body of a `sendMessage` call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendMessage {
    pub chat_id: String,
    pub text: String,
}

/// Envelope every Bot API method answers with
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub ok: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub error_code: Option<i64>,
}
