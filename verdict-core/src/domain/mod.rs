//! Core domain types
//!
//! This module contains the structures the poller reasons about. They are
//! shared between the client (which produces raw payloads) and the bot
//! (which turns them into notifications).

pub mod cursor;
pub mod item;
pub mod payload;
pub mod verdict;

pub use cursor::TimeCursor;
pub use item::{HomeworkStatus, TrackedItem};
pub use payload::StatusPayload;
pub use verdict::{Verdict, VerdictKey};
