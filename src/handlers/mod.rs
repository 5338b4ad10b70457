//! Event handlers for dashboard state

pub mod composite;
pub mod console;
pub mod transaction_log;

// Re-export for convenience
pub use composite::CompositeEventHandler;
pub use console::ConsoleEventHandler;
pub use transaction_log::InMemoryTransactionLog;
