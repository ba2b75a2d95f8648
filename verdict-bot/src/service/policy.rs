//! Item selection policy

use verdict_core::domain::TrackedItem;

/// Which of the returned homeworks a poll cycle evaluates
///
/// The status API lists the most recently updated homework first. Only
/// that one is ever turned into a notification; older entries in the same
/// response are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemPolicy {
    #[default]
    MostRecentOnly,
}

impl ItemPolicy {
    /// Picks the item to evaluate, `None` when there is nothing new
    pub fn select<'a>(&self, items: &'a [TrackedItem]) -> Option<&'a TrackedItem> {
        match self {
            ItemPolicy::MostRecentOnly => items.first(),
        }
    }

    /// Number of items this policy leaves unevaluated
    pub fn skipped(&self, items: &[TrackedItem]) -> usize {
        match self {
            ItemPolicy::MostRecentOnly => items.len().saturating_sub(1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_most_recent_only_takes_first() {
        let items = vec![
            TrackedItem::new("hw2", "reviewing"),
            TrackedItem::new("hw1", "approved"),
        ];
        let policy = ItemPolicy::MostRecentOnly;
        assert_eq!(policy.select(&items), Some(&items[0]));
        assert_eq!(policy.skipped(&items), 1);
    }

    #[test]
    fn test_nothing_to_select_in_empty_list() {
        let policy = ItemPolicy::default();
        assert_eq!(policy.select(&[]), None);
        assert_eq!(policy.skipped(&[]), 0);
    }
}
