//! Status poller
//!
//! Polls the status API on a fixed interval, turns the most recent homework
//! status into a verdict and sends it to the chat unless it was already
//! sent. Each cycle runs to completion before the next one starts.
//!
//! Cycle: fetch -> validate -> select -> format -> gate -> deliver -> sleep.
//! Every failure inside a cycle is logged and ends the cycle; none of them
//! stops the loop.

use std::future::Future;
use std::sync::Arc;
use tokio::time::{self, Duration};
use tracing::{debug, error, info};
use verdict_core::domain::{StatusPayload, TimeCursor, TrackedItem};
use verdict_core::{extract_payload, format_verdict};

use crate::config::Config;
use crate::repository::{MessageRepository, StatusRepository};
use crate::service::{ItemPolicy, NotificationGate};

/// Longest payload fragment included in a schema error log line
const PAYLOAD_LOG_LEN: usize = 300;

/// How a single poll cycle ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Status API unreachable, non-success code or unreadable body
    FetchFailed,
    /// Body decoded but does not have the expected shape
    SchemaInvalid,
    /// No homework changed since the cursor
    Empty,
    /// Selected homework has a missing field or an unknown status
    FormatFailed,
    /// Verdict equals the last delivered one
    Unchanged,
    /// Verdict delivered and committed to the gate
    Delivered,
    /// Verdict could not be delivered; it stays pending for the next cycle
    DeliveryFailed,
}

impl CycleOutcome {
    /// Cursor advance policy
    ///
    /// The cursor stays put when no trustworthy payload was received, so the
    /// same window is asked for again. Once a payload validated, the window
    /// it covers is consumed whatever happened afterwards.
    ///
    /// `DeliveryFailed` advances too. The gate is not committed, so the
    /// verdict is resent when the homework appears in a later window, but
    /// the status API filters by `from_date` and usually returns nothing for
    /// the new window: a failed notification is then dropped rather than
    /// retried. Holding the cursor instead would refetch the same window
    /// every cycle after a permanent delivery failure.
    pub fn advances_cursor(&self) -> bool {
        !matches!(self, CycleOutcome::FetchFailed | CycleOutcome::SchemaInvalid)
    }
}

/// Poller that evaluates and notifies homework status changes
pub struct StatusPoller {
    statuses: Arc<dyn StatusRepository>,
    messages: Arc<dyn MessageRepository>,
    gate: NotificationGate,
    policy: ItemPolicy,
    cursor: TimeCursor,
    poll_interval: Duration,
}

impl StatusPoller {
    /// Creates a poller whose cursor starts `initial_lookback` before now
    pub fn new(
        config: &Config,
        statuses: Arc<dyn StatusRepository>,
        messages: Arc<dyn MessageRepository>,
    ) -> Self {
        Self {
            statuses,
            messages,
            gate: NotificationGate::new(),
            policy: ItemPolicy::default(),
            cursor: TimeCursor::starting_at(
                chrono::Utc::now().timestamp(),
                config.initial_lookback,
            ),
            poll_interval: config.poll_interval,
        }
    }

    /// Overrides the starting cursor
    #[cfg(test)]
    pub fn starting_from(mut self, cursor: TimeCursor) -> Self {
        self.cursor = cursor;
        self
    }

    #[cfg(test)]
    pub fn cursor(&self) -> TimeCursor {
        self.cursor
    }

    #[cfg(test)]
    pub fn gate(&self) -> &NotificationGate {
        &self.gate
    }

    /// Runs poll cycles until `shutdown` resolves
    ///
    /// Shutdown is observed while sleeping between cycles; a cycle that is
    /// already running finishes first.
    pub async fn run<F>(&mut self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        info!(
            "Starting status poller (interval: {:?}, cursor: {})",
            self.poll_interval, self.cursor
        );

        tokio::pin!(shutdown);

        loop {
            let outcome = self.poll_once(chrono::Utc::now().timestamp()).await;
            debug!("Poll cycle finished: {:?}, next cursor {}", outcome, self.cursor);

            tokio::select! {
                biased;
                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping status poller");
                    return;
                }
                _ = time::sleep(self.poll_interval) => {}
            }
        }
    }

    /// Performs a single poll cycle
    ///
    /// `now` (epoch seconds) is where the cursor moves when the payload
    /// carries no `current_date` of its own.
    pub async fn poll_once(&mut self, now: i64) -> CycleOutcome {
        let (outcome, server_cursor) = match self.fetch_payload().await {
            Ok(payload) => (self.evaluate(&payload.items).await, payload.current_date),
            Err(outcome) => (outcome, None),
        };

        if outcome.advances_cursor() {
            let next = server_cursor.unwrap_or_else(|| TimeCursor::new(now));
            debug!("Advancing cursor {} -> {}", self.cursor, next);
            self.cursor = next;
        } else {
            debug!("Keeping cursor at {} for retry", self.cursor);
        }

        outcome
    }

    /// Fetches and validates one payload
    async fn fetch_payload(&self) -> Result<StatusPayload, CycleOutcome> {
        let raw = match self.statuses.fetch(self.cursor).await {
            Ok(raw) => raw,
            Err(e) => {
                error!(
                    "Failed to fetch homework statuses (from_date {}): {}",
                    self.cursor, e
                );
                return Err(CycleOutcome::FetchFailed);
            }
        };

        extract_payload(&raw).map_err(|e| {
            error!(
                "Status API returned an unexpected payload: {} (payload: {})",
                e,
                truncate(&raw.to_string(), PAYLOAD_LOG_LEN)
            );
            CycleOutcome::SchemaInvalid
        })
    }

    /// Evaluates the validated items and notifies if warranted
    async fn evaluate(&mut self, items: &[TrackedItem]) -> CycleOutcome {
        let Some(item) = self.policy.select(items) else {
            debug!("No new homework statuses");
            return CycleOutcome::Empty;
        };

        let skipped = self.policy.skipped(items);
        if skipped > 0 {
            debug!("Evaluating \"{}\", skipping {} older homework(s)", item.name, skipped);
        }

        let verdict = match format_verdict(item) {
            Ok(verdict) => verdict,
            Err(e) => {
                error!("Cannot build verdict for {:?}: {}", item, e);
                return CycleOutcome::FormatFailed;
            }
        };

        if !self.gate.should_notify(&verdict) {
            debug!(
                "Status of \"{}\" is still {}, not notifying",
                verdict.key().name,
                verdict.key().status
            );
            return CycleOutcome::Unchanged;
        }

        match self.messages.deliver(verdict.text()).await {
            Ok(()) => {
                self.gate.commit(&verdict);
                info!("Bot sent message \"{}\"", verdict);
                CycleOutcome::Delivered
            }
            Err(e) => {
                error!("Failed to send message \"{}\": {}", verdict, e);
                CycleOutcome::DeliveryFailed
            }
        }
    }
}

fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
