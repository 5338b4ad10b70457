//! Data models for the dashboard tracker

pub mod bank;
pub mod stats;
pub mod transaction;

// Re-export for convenience
pub use bank::Bank;
pub use stats::{AllocationSchedule, BoardroomView, LaunchPhase, ProtocolOverview, TokenStat};
pub use transaction::PendingTransaction;
