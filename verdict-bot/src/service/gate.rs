//! Notification gate
//!
//! Remembers the last verdict that actually reached the chat and suppresses
//! a resend of the same homework in the same status.

use verdict_core::domain::{Verdict, VerdictKey};

/// Duplicate suppression for notifications
///
/// State only moves forward through [`NotificationGate::commit`], which the
/// poller calls after a confirmed delivery. A failed delivery leaves the
/// gate untouched so the verdict is still considered new next cycle.
#[derive(Debug, Clone, Default)]
pub struct NotificationGate {
    last_sent: Option<VerdictKey>,
}

impl NotificationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `candidate` differs from the last delivered verdict
    pub fn should_notify(&self, candidate: &Verdict) -> bool {
        self.last_sent.as_ref() != Some(candidate.key())
    }

    /// Records `candidate` as delivered
    pub fn commit(&mut self, candidate: &Verdict) {
        self.last_sent = Some(candidate.key().clone());
    }

    #[cfg(test)]
    pub fn last_sent(&self) -> Option<&VerdictKey> {
        self.last_sent.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use verdict_core::domain::TrackedItem;
    use verdict_core::format_verdict;

    fn verdict(name: &str, status: &str) -> Verdict {
        format_verdict(&TrackedItem::new(name, status)).unwrap()
    }

    #[test]
    fn test_fresh_gate_lets_everything_through() {
        let gate = NotificationGate::new();
        assert!(gate.should_notify(&verdict("hw1", "reviewing")));
        assert!(gate.last_sent().is_none());
    }

    #[test]
    fn test_should_notify_is_idempotent() {
        let gate = NotificationGate::new();
        let candidate = verdict("hw1", "approved");
        assert_eq!(gate.should_notify(&candidate), gate.should_notify(&candidate));
    }

    #[test]
    fn test_commit_suppresses_same_verdict_only() {
        let mut gate = NotificationGate::new();
        let sent = verdict("hw1", "reviewing");
        gate.commit(&sent);

        assert!(!gate.should_notify(&sent));
        assert!(gate.should_notify(&verdict("hw1", "approved")));
        assert!(gate.should_notify(&verdict("hw2", "reviewing")));
    }

    #[test]
    fn test_status_flip_back_is_new_again() {
        let mut gate = NotificationGate::new();
        gate.commit(&verdict("hw1", "reviewing"));
        gate.commit(&verdict("hw1", "rejected"));

        assert!(gate.should_notify(&verdict("hw1", "reviewing")));
    }
}
