use alloy::primitives::utils::format_units;
use alloy::primitives::{Address, U256};
use chrono::Duration;

/// Format a raw token amount with the given decimals, keeping at most
/// `fraction_digits` fractional digits (truncated, not rounded)
pub fn format_token_amount(amount: U256, decimals: u8, fraction_digits: usize) -> String {
    let full = match format_units(amount, decimals) {
        Ok(s) => s,
        Err(_) => return amount.to_string(),
    };
    truncate_fraction(&full, fraction_digits)
}

fn truncate_fraction(s: &str, fraction_digits: usize) -> String {
    match s.split_once('.') {
        None => s.to_string(),
        Some((int, _)) if fraction_digits == 0 => int.to_string(),
        Some((int, frac)) => {
            let keep = frac.len().min(fraction_digits);
            format!("{}.{}", int, &frac[..keep])
        }
    }
}

/// Format a price string to exactly two decimal places. Returns `None` when
/// the input is not numeric, i.e. the stat has not loaded yet.
pub fn format_price_2dp(price: &str) -> Option<String> {
    price.trim().parse::<f64>().ok().map(|v| format!("{:.2}", v))
}

/// Render a countdown as `DDd HHh MMm SSs`; negative durations clamp to zero
pub fn format_countdown(remaining: Duration) -> String {
    let total = remaining.num_seconds().max(0);
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    format!("{:02}d {:02}h {:02}m {:02}s", days, hours, minutes, seconds)
}

/// Format an address for display (truncated)
pub fn short_address(address: &Address) -> String {
    let s = address.to_string();
    format!("{}...{}", &s[..6], &s[s.len() - 4..])
}
