//! Verdict Bot
//!
//! Watches the review status of the latest homework and reports changes to
//! a Telegram chat.
//!
//! Architecture:
//! - Configuration: required secrets and tunables from the environment
//! - Repositories: status API and Telegram access behind traits
//! - Services: item selection and duplicate suppression
//! - Scheduler: the poll-evaluate-notify loop
//!
//! The bot keeps no state across restarts. Missing credentials are the only
//! condition that stops it; everything else is logged and retried on the
//! next cycle.

mod config;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::repository::{HttpStatusRepository, TelegramMessageRepository};
use crate::scheduler::StatusPoller;
use verdict_client::{PracticumClient, TelegramClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "verdict_bot=info,verdict_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Verdict Bot");

    // Load configuration
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!(critical = true, "Cannot start: {:#}", e);
            return Err(e);
        }
    };
    info!("Loaded configuration: {:?}", config);

    // Initialize API clients
    let http = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let statuses = Arc::new(HttpStatusRepository::new(PracticumClient::with_client(
        config.practicum_endpoint.clone(),
        config.practicum_token.clone(),
        http.clone(),
    )));
    let messages = Arc::new(TelegramMessageRepository::new(
        TelegramClient::with_client(
            config.telegram_api_url.clone(),
            config.telegram_token.clone(),
            http,
        ),
        config.telegram_chat_id.clone(),
    ));

    info!("API clients initialized");

    // Start polling loop
    let mut poller = StatusPoller::new(&config, statuses, messages);
    poller.run(shutdown_signal()).await;

    info!("Verdict Bot stopped");
    Ok(())
}

/// Loads and validates configuration from environment variables
fn load_config() -> Result<Config> {
    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Configuration is invalid")?;
    Ok(config)
}

/// Resolves on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C"),
        _ = terminate => info!("Received SIGTERM"),
    }
}
