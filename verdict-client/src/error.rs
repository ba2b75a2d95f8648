//! Error types for the status and Telegram clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Longest response body fragment kept in an error
const BODY_FRAGMENT_LEN: usize = 200;

/// Errors that can occur when talking to a remote API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Endpoint unreachable, connection dropped or request timed out
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// API answered with a non-success status code
    #[error("upstream unavailable (status {status}): {body}")]
    UpstreamUnavailable {
        /// HTTP status code
        status: u16,
        /// Leading fragment of the response body
        body: String,
    },

    /// Success status but the body is not valid JSON
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The messaging API accepted the request but refused to act on it
    #[error("message rejected{}: {description}", code_suffix(.code))]
    Rejected {
        code: Option<i64>,
        description: String,
    },
}

impl ClientError {
    /// Create an upstream error from a status code and response body
    pub fn upstream(status: u16, body: impl AsRef<str>) -> Self {
        Self::UpstreamUnavailable {
            status,
            body: fragment(body.as_ref()),
        }
    }

    /// Check if the request never produced a response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Check if the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable { status, .. } if (400..500).contains(status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable { status, .. } if *status >= 500)
    }

    /// HTTP status of the failed response, if there was one
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UpstreamUnavailable { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

fn code_suffix(code: &Option<i64>) -> String {
    code.map(|c| format!(" (code {c})")).unwrap_or_default()
}

/// Truncates a body to a loggable fragment on a char boundary
pub(crate) fn fragment(body: &str) -> String {
    match body.char_indices().nth(BODY_FRAGMENT_LEN) {
        Some((end, _)) => format!("{}…", &body[..end]),
        None => body.to_string(),
    }
}
