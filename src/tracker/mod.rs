//! Dashboard state tracking: bank resolution, owned state, launch gating

pub mod dashboard;
pub mod gate;
pub mod overview;
pub mod resolve;
pub mod store;

// Re-export for convenience
pub use dashboard::DashboardTracker;
pub use gate::LaunchGate;
pub use store::BankStore;
