//! Verdict formatting

use crate::domain::{HomeworkStatus, TrackedItem, Verdict, VerdictKey};
use crate::error::FormatError;

/// Renders the chat message for a tracked item's current status
///
/// Pure: the same item always yields the same verdict.
pub fn format_verdict(item: &TrackedItem) -> Result<Verdict, FormatError> {
    if item.name.is_empty() {
        return Err(FormatError::FieldMissing("homework_name"));
    }
    if item.status.is_empty() {
        return Err(FormatError::FieldMissing("status"));
    }

    let status: HomeworkStatus = item
        .status
        .parse()
        .map_err(|status| FormatError::UnknownStatus { status })?;

    let text = format!(
        "Изменился статус проверки работы \"{}\". {}",
        item.name,
        status.verdict_text()
    );

    Ok(Verdict::new(
        VerdictKey {
            name: item.name.clone(),
            status,
        },
        text,
    ))
}
