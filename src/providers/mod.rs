//! Backend implementations of the chain-session and stats seams

pub mod rpc;
pub mod static_session;

// Re-export for convenience
pub use rpc::{http_provider, RpcChainSession, RpcPoolContract, RpcStatsProvider};
pub use static_session::{StaticChainSession, StaticPoolContract, StaticStatsProvider};
