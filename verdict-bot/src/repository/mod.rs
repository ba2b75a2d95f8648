//! Repository layer
//!
//! Repositories are thin adapters over the HTTP clients. They give the
//! poller narrow, trait-based access to the status API and the chat so that
//! poll cycles can be exercised against in-memory fakes.

mod messages;
mod statuses;

// Re-export traits
pub use messages::MessageRepository;
pub use statuses::StatusRepository;

// Re-export implementations
pub use messages::TelegramMessageRepository;
pub use statuses::HttpStatusRepository;
