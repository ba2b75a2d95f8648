//! Data Transfer Objects for the external APIs
//!
//! This module contains the request and response shapes exchanged with the
//! status API and the Telegram Bot API. Status responses are validated from
//! raw JSON (see [`crate::validate`]), so only the query side is typed here.

pub mod status;
pub mod telegram;
