//! Tracked item domain types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A homework whose review status is being polled
///
/// Fields are kept as received. Missing or non-string values in the
/// payload become empty strings; the formatter rejects those.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedItem {
    pub name: String,
    pub status: String,
}

impl TrackedItem {
    pub fn new(name: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: status.into(),
        }
    }
}

/// Review status codes reported by the status API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Wire code of the status
    pub fn code(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }

    /// Human readable verdict sent to the chat
    pub fn verdict_text(&self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for HomeworkStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(other.to_string()),
        }
    }
}
