//! Verdict Core
//!
//! Core types and pure logic for the homework status bot.
//!
//! This crate contains:
//! - Domain types: tracked items, review statuses, verdicts and the time cursor
//! - DTOs: wire shapes for the status API query and the Telegram Bot API
//! - Validation of raw status payloads and verdict formatting
//!
//! Note: network access lives in verdict-client, the polling loop in verdict-bot.

pub mod domain;
pub mod dto;
pub mod error;
pub mod format;
pub mod validate;

pub use error::{FormatError, SchemaError};
pub use format::format_verdict;
pub use validate::{extract_items, extract_payload};
