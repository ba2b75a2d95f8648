//! Validated status payload

use super::cursor::TimeCursor;
use super::item::TrackedItem;

/// Status API response after validation
///
/// Items keep the order the API returned them in; the most recent
/// homework comes first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusPayload {
    pub items: Vec<TrackedItem>,
    pub current_date: Option<TimeCursor>,
}

impl StatusPayload {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
