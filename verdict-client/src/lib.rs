//! Verdict HTTP Clients
//!
//! Type-safe HTTP clients for the two remote services the bot talks to:
//! - [`PracticumClient`]: the homework status API (read side)
//! - [`TelegramClient`]: the Telegram Bot API (notification side)
//!
//! Both classify every failure into a single [`ClientError`] and never
//! retry on their own; the retry policy belongs to the poller.
//!
//! # Example
//!
//! ```no_run
//! use verdict_client::PracticumClient;
//! use verdict_core::domain::TimeCursor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), verdict_client::ClientError> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "token",
//!     );
//!
//!     let raw = client.fetch_statuses(TimeCursor::new(0)).await?;
//!     println!("{raw}");
//!     Ok(())
//! }
//! ```

pub mod error;
mod statuses;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use statuses::PracticumClient;
pub use telegram::TelegramClient;

use error::fragment;

// =============================================================================
// Response Handlers
// =============================================================================

/// Checks the status code and decodes the body as JSON
///
/// Non-success codes become [`ClientError::UpstreamUnavailable`]; a body
/// that is not JSON becomes [`ClientError::MalformedResponse`].
async fn handle_json_response(response: reqwest::Response) -> Result<serde_json::Value> {
    let status = response.status();

    if !status.is_success() {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::upstream(status.as_u16(), error_text));
    }

    let body = response.bytes().await?;
    serde_json::from_slice(&body).map_err(|e| {
        ClientError::MalformedResponse(format!(
            "{} (body: {})",
            e,
            fragment(&String::from_utf8_lossy(&body))
        ))
    })
}

#[cfg(test)]
pub(crate) mod test_server {
    //! Single-shot HTTP server answering one request with a canned response

    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    /// Serves `response` verbatim to the first connection
    ///
    /// Returns the base URL and a receiver yielding the raw request text.
    pub async fn serve_once(response: String) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let request = read_request(&mut socket).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.ok();
            let _ = tx.send(request);
        });

        (format!("http://{addr}"), rx)
    }

    /// Accepts one connection and never answers it
    pub async fn serve_silence() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let _request = read_request(&mut socket).await;
            tokio::time::sleep(std::time::Duration::from_secs(30)).await;
        });

        format!("http://{addr}")
    }

    /// URL of a port nothing listens on
    pub async fn closed_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    pub fn http_response(status_line: &str, content_type: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
    }

    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        loop {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);

            let text = String::from_utf8_lossy(&buf);
            if let Some(head_end) = text.find("\r\n\r\n") {
                let content_length = text[..head_end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length")
                            .then(|| value.trim().parse::<usize>().ok())
                            .flatten()
                    })
                    .unwrap_or(0);
                if buf.len() >= head_end + 4 + content_length {
                    break;
                }
            }
        }

        String::from_utf8_lossy(&buf).into_owned()
    }
}
