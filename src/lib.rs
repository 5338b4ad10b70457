//! Seigniorage Dashboard Tracker Library
//!
//! On-chain state aggregation for a seigniorage stablecoin dashboard:
//! resolves the staking-pool set into a published bank list, derives
//! treasury and boardroom view-models on a poll timer, and forwards
//! harvest/stake/redeem intent to the protocol SDK.

// Public modules - these are the API surface
pub mod config;
pub mod handlers;
pub mod models;
pub mod ops;
pub mod providers;
pub mod registry;
pub mod tracker;
pub mod traits;
pub mod utils;

// Re-export commonly used items for easier access
pub use config::{Config, Deployments};
pub use models::{
    bank::Bank,
    stats::{AllocationSchedule, BoardroomView, LaunchPhase, ProtocolOverview, TokenStat},
    transaction::PendingTransaction,
};
pub use traits::{
    chain_session::{ChainSession, PoolContract},
    event_handler::DashboardEventHandler,
    protocol_actions::ProtocolActions,
    stats_provider::StatsProvider,
    transaction_sink::TransactionSink,
};
pub use providers::{
    rpc::{http_provider, RpcChainSession, RpcStatsProvider},
    static_session::{StaticChainSession, StaticStatsProvider},
};
pub use handlers::{
    composite::CompositeEventHandler,
    console::ConsoleEventHandler,
    transaction_log::InMemoryTransactionLog,
};
pub use ops::{BankOps, BoardroomOps};
pub use tracker::{dashboard::DashboardTracker, gate::LaunchGate, store::BankStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, anyhow::Error>;
