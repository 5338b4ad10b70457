//! Core traits for the dashboard tracker

pub mod chain_session;
pub mod event_handler;
pub mod protocol_actions;
pub mod stats_provider;
pub mod transaction_sink;

// Re-export for convenience
pub use chain_session::{ChainSession, PoolContract};
pub use event_handler::DashboardEventHandler;
pub use protocol_actions::ProtocolActions;
pub use stats_provider::StatsProvider;
pub use transaction_sink::TransactionSink;
