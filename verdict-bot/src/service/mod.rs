//! Service layer
//!
//! Services hold the decision logic of a poll cycle that is independent of
//! I/O: which item to evaluate and whether its verdict is worth sending.

mod gate;
mod policy;

pub use gate::NotificationGate;
pub use policy::ItemPolicy;
