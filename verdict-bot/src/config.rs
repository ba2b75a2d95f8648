//! Bot configuration
//!
//! Defines all configurable parameters for the bot: API credentials, the
//! destination chat, endpoints, the polling interval and request timeouts.
//! Built once at startup and handed to the clients; never re-read.

use std::time::Duration;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_PRACTICUM_ENDPOINT: &str =
    "https://practicum.yandex.ru/api/user_api/homework_statuses/";
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";

const PRACTICUM_TOKEN: &str = "PRACTICUM_TOKEN";
const TELEGRAM_TOKEN: &str = "TELEGRAM_TOKEN";
const TELEGRAM_CHAT_ID: &str = "TELEGRAM_CHAT_ID";

/// Configuration errors, all fatal at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required configuration: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Bot configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the homework status API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives the notifications
    pub telegram_chat_id: String,

    /// Homework statuses endpoint
    pub practicum_endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Pause between two poll cycles
    pub poll_interval: Duration,

    /// Upper bound on every HTTP request
    pub request_timeout: Duration,

    /// How far back the first query looks
    pub initial_lookback: Duration,
}

impl Config {
    /// Creates a new configuration with defaults
    pub fn new(
        practicum_token: String,
        telegram_token: String,
        telegram_chat_id: String,
    ) -> Self {
        Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            practicum_endpoint: DEFAULT_PRACTICUM_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_TELEGRAM_API_URL.to_string(),
            poll_interval: Duration::from_secs(600),
            request_timeout: Duration::from_secs(30),
            initial_lookback: Duration::ZERO,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - POLL_INTERVAL (optional, seconds, default: 600)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    /// - INITIAL_LOOKBACK (optional, seconds, default: 0)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary key lookup
    ///
    /// Empty values count as missing. All missing required keys are
    /// reported together.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut missing = Vec::new();
        let mut required = |key: &'static str| {
            value(key).unwrap_or_else(|| {
                missing.push(key);
                String::new()
            })
        };

        let practicum_token = required(PRACTICUM_TOKEN);
        let telegram_token = required(TELEGRAM_TOKEN);
        let telegram_chat_id = required(TELEGRAM_CHAT_ID);

        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let mut config = Self::new(practicum_token, telegram_token, telegram_chat_id);

        if let Some(endpoint) = value("PRACTICUM_ENDPOINT") {
            config.practicum_endpoint = endpoint;
        }
        if let Some(api_url) = value("TELEGRAM_API_URL") {
            config.telegram_api_url = api_url;
        }

        let seconds = |key: &str, default: Duration| {
            value(key)
                .and_then(|s| match s.trim().parse::<u64>() {
                    Ok(secs) => Some(Duration::from_secs(secs)),
                    Err(_) => {
                        warn!("Ignoring {}={:?}: not a number of seconds", key, s);
                        None
                    }
                })
                .unwrap_or(default)
        };

        config.poll_interval = seconds("POLL_INTERVAL", config.poll_interval);
        config.request_timeout = seconds("REQUEST_TIMEOUT", config.request_timeout);
        config.initial_lookback = seconds("INITIAL_LOOKBACK", config.initial_lookback);

        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, url) in [
            ("practicum_endpoint", &self.practicum_endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "{} must start with http:// or https://",
                    name
                )));
            }
        }

        if self.poll_interval.is_zero() {
            return Err(ConfigError::Invalid(
                "poll_interval must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("practicum_endpoint", &self.practicum_endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("poll_interval", &self.poll_interval)
            .field("request_timeout", &self.request_timeout)
            .field("initial_lookback", &self.initial_lookback)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    const REQUIRED: [(&str, &str); 3] = [
        ("PRACTICUM_TOKEN", "p-token"),
        ("TELEGRAM_TOKEN", "t-token"),
        ("TELEGRAM_CHAT_ID", "42"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(600));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.initial_lookback, Duration::ZERO);
        assert_eq!(config.practicum_endpoint, DEFAULT_PRACTICUM_ENDPOINT);
        assert_eq!(config.telegram_api_url, DEFAULT_TELEGRAM_API_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_required_values_are_reported_together() {
        let err = Config::from_lookup(lookup(&[("TELEGRAM_TOKEN", "t-token")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Missing(vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"])
        );
        assert_eq!(
            err.to_string(),
            "missing required configuration: PRACTICUM_TOKEN, TELEGRAM_CHAT_ID"
        );
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let err = Config::from_lookup(lookup(&[
            ("PRACTICUM_TOKEN", "p-token"),
            ("TELEGRAM_TOKEN", "  "),
            ("TELEGRAM_CHAT_ID", "42"),
        ]))
        .unwrap_err();
        assert_eq!(err, ConfigError::Missing(vec!["TELEGRAM_TOKEN"]));
    }

    #[test]
    fn test_optional_overrides() {
        let mut pairs = REQUIRED.to_vec();
        pairs.extend([
            ("POLL_INTERVAL", "60"),
            ("REQUEST_TIMEOUT", "5"),
            ("INITIAL_LOOKBACK", "86400"),
            ("TELEGRAM_API_URL", "http://localhost:8081"),
        ]);
        let config = Config::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(60));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.initial_lookback, Duration::from_secs(86400));
        assert_eq!(config.telegram_api_url, "http://localhost:8081");
    }

    #[test]
    fn test_unparsable_number_falls_back_to_default() {
        let mut pairs = REQUIRED.to_vec();
        pairs.push(("POLL_INTERVAL", "ten minutes"));
        let config = Config::from_lookup(lookup(&pairs)).unwrap();
        assert_eq!(config.poll_interval, Duration::from_secs(600));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::from_lookup(lookup(&REQUIRED)).unwrap();
        assert!(config.validate().is_ok());

        config.practicum_endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
        config.practicum_endpoint = DEFAULT_PRACTICUM_ENDPOINT.to_string();

        config.poll_interval = Duration::ZERO;
        assert!(config.validate().is_err());
        config.poll_interval = Duration::from_secs(1);

        config.request_timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_debug_redacts_tokens() {
        let config = Config::from_lookup(lookup(&REQUIRED)).unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("p-token"));
        assert!(!debug.contains("t-token"));
        assert!(debug.contains("42"));
    }
}
