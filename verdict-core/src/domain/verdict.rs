//! Verdict domain types

use super::item::HomeworkStatus;
use std::fmt;

/// Identity of a notification: which homework, in which status
///
/// Duplicate suppression compares keys rather than rendered text, so a
/// change to the message template never causes a resend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerdictKey {
    pub name: String,
    pub status: HomeworkStatus,
}

/// Rendered notification for one tracked item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    key: VerdictKey,
    text: String,
}

impl Verdict {
    pub fn new(key: VerdictKey, text: String) -> Self {
        Self { key, text }
    }

    pub fn key(&self) -> &VerdictKey {
        &self.key
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
