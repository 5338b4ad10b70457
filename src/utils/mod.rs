//! Display formatting helpers

pub mod format;

// Re-export for convenience
pub use format::{format_countdown, format_price_2dp, format_token_amount, short_address};
