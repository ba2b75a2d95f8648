//! Scheduler layer for the bot
//!
//! This layer owns the polling loop: it drives one poll cycle at a time,
//! keeps the time cursor and the notification gate, and sleeps between
//! cycles until shutdown.

pub mod poller;

pub use poller::StatusPoller;
