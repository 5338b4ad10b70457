use async_trait::async_trait;
use tracing::{error, info};

use crate::models::bank::Bank;
use crate::models::stats::{BoardroomView, LaunchPhase, ProtocolOverview};
use crate::traits::event_handler::DashboardEventHandler;
use crate::utils::format::{format_countdown, format_token_amount, short_address};

/// Console logging event handler
pub struct ConsoleEventHandler;

impl ConsoleEventHandler {
    /// Create a new console event handler
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEventHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn blank_if_none(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

#[async_trait]
impl DashboardEventHandler for ConsoleEventHandler {
    async fn on_banks_refreshed(&self, banks: &[Bank]) {
        info!("{}", "=".repeat(80));
        info!("BANKS");
        info!("{}", "-".repeat(80));

        if banks.is_empty() {
            info!("No banks available");
            info!("{}", "=".repeat(80));
            return;
        }

        for (i, bank) in banks.iter().enumerate() {
            info!(
                "{}. {} {} [{}]",
                i + 1,
                blank_if_none(&bank.icon),
                blank_if_none(&bank.name),
                bank.id
            );
            info!("   Pool: {}", short_address(&bank.contract.address()));
            match bank.deposit_token_address {
                Some(token) => info!("   Deposit: {} ({})", bank.deposit_token_key, short_address(&token)),
                None => info!("   Deposit: {} (address unavailable)", bank.deposit_token_key),
            }
            info!("   Earn: {}", bank.earn_token_symbol);
            info!("");
        }

        info!("Total banks: {}", banks.len());
        info!("{}", "=".repeat(80));
    }

    async fn on_overview(&self, overview: &ProtocolOverview) {
        info!("PROTOCOL OVERVIEW");
        info!("{}", "-".repeat(80));

        match &overview.cash {
            Some(stat) => info!("CASH:  price {:>10}  supply {}", stat.price, stat.total_supply),
            None => info!("CASH:  -"),
        }
        match &overview.share {
            Some(stat) => info!("SHARE: price {:>10}  supply {}", stat.price, stat.total_supply),
            None => info!("SHARE: -"),
        }
        match &overview.bond {
            Some(stat) => info!("BOND:  price {:>10}  supply {}", stat.price, stat.total_supply),
            None => info!("BOND:  -"),
        }

        match &overview.cash_scaling_factor {
            Some(factor) => info!("Scaling factor: x{}", factor),
            None => info!("Scaling factor: -"),
        }
        match overview.treasury_amount {
            Some(amount) => info!("Treasury: {} CASH", format_token_amount(amount, 18, 2)),
            None => info!("Treasury: -"),
        }
        match &overview.allocation {
            Some(schedule) => info!(
                "Next allocation: {}",
                schedule.next_allocation.format("%Y-%m-%d %H:%M:%S UTC")
            ),
            None => info!("Next allocation: -"),
        }
    }

    async fn on_phase_change(&self, phase: LaunchPhase) {
        match phase {
            LaunchPhase::Live => info!("Boardroom is live"),
            LaunchPhase::Pending => info!("Boardroom launch pending"),
        }
    }

    async fn on_boardroom(&self, view: &BoardroomView) {
        match view {
            BoardroomView::Countdown { remaining, .. } => {
                info!("Boardroom launches in {}", format_countdown(*remaining));
            }
            BoardroomView::Live {
                staked_balance,
                earned_balance,
                can_withdraw,
                cash_scaling_factor,
            } => {
                info!("BOARDROOM");
                info!("  Staked: {} SHARE", format_token_amount(*staked_balance, 18, 2));
                info!("  Earned: {} CASH", format_token_amount(*earned_balance, 18, 2));
                if let Some(factor) = cash_scaling_factor {
                    info!("  Scaling factor: x{}", factor);
                }
                info!(
                    "  Settle & Withdraw: {}",
                    if *can_withdraw { "available" } else { "nothing staked" }
                );
            }
        }
    }

    async fn on_error(&self, error: &anyhow::Error) {
        error!("Dashboard tracker error: {:#}", error);
    }
}
