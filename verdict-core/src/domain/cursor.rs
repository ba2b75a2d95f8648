//! Time cursor

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Lower time bound (epoch seconds) for the next status query
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeCursor(i64);

impl TimeCursor {
    pub fn new(epoch_seconds: i64) -> Self {
        Self(epoch_seconds)
    }

    /// Cursor at the current wall clock time
    pub fn now() -> Self {
        Self(Utc::now().timestamp())
    }

    /// Cursor at `now` moved back by `lookback`, saturating at the epoch
    pub fn starting_at(now: i64, lookback: Duration) -> Self {
        let lookback = i64::try_from(lookback.as_secs()).unwrap_or(i64::MAX);
        Self(now.saturating_sub(lookback).max(0))
    }

    pub fn as_secs(&self) -> i64 {
        self.0
    }

    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.0, 0).single()
    }
}

impl fmt::Display for TimeCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_datetime() {
            Some(at) => write!(f, "{} ({})", self.0, at.to_rfc3339()),
            None => write!(f, "{}", self.0),
        }
    }
}
