//! Status API DTOs

use serde::{Deserialize, Serialize};

use crate::domain::TimeCursor;

/// Query string for the homework statuses endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusQuery {
    pub from_date: TimeCursor,
}
