//! Derived view-models, rebuilt from scratch on every poll tick.

use alloy::primitives::{Address, U256};
use chrono::{DateTime, Duration, Utc};
use tracing::warn;

use crate::models::stats::{
    AllocationSchedule, BoardroomView, LaunchPhase, ProtocolOverview, TokenStat,
};
use crate::traits::stats_provider::StatsProvider;
use crate::utils::format::format_price_2dp;

/// Scaling factor: cash price against its peg target, two decimal places.
/// `None` until the stat has loaded.
pub fn scaling_factor(stat: Option<&TokenStat>) -> Option<String> {
    stat.and_then(|s| format_price_2dp(&s.price))
}

/// Assemble the home-page overview. Each read fails independently: a
/// rejected lookup leaves its field `None` and the rest still populate.
pub async fn build_overview(
    stats: &dyn StatsProvider,
    allocation_period: Duration,
) -> ProtocolOverview {
    let mut overview = ProtocolOverview::default();

    match stats.cash_stat().await {
        Ok(stat) => {
            overview.cash_scaling_factor = format_price_2dp(&stat.price);
            overview.cash = Some(stat);
        }
        Err(e) => warn!("cash stat unavailable: {:#}", e),
    }

    match stats.share_stat().await {
        Ok(stat) => overview.share = Some(stat),
        Err(e) => warn!("share stat unavailable: {:#}", e),
    }

    match stats.bond_stat().await {
        Ok(stat) => overview.bond = Some(stat),
        Err(e) => warn!("bond stat unavailable: {:#}", e),
    }

    match stats.treasury_amount().await {
        Ok(amount) => overview.treasury_amount = Some(amount),
        Err(e) => warn!("treasury amount unavailable: {:#}", e),
    }

    match stats.last_allocation_time().await {
        Ok(prev) => overview.allocation = Some(AllocationSchedule::from_last(prev, allocation_period)),
        Err(e) => warn!("allocation time unavailable: {:#}", e),
    }

    overview
}

/// Boardroom view for the current phase.
///
/// Before launch this is a pure countdown and touches no provider. After
/// launch the operator balances are read fresh; an unavailable balance
/// degrades to zero, which also disables withdrawal.
pub async fn boardroom_view(
    phase: LaunchPhase,
    launches_at: DateTime<Utc>,
    now: DateTime<Utc>,
    stats: &dyn StatsProvider,
    operator: Address,
    cash_scaling_factor: Option<String>,
) -> BoardroomView {
    if phase == LaunchPhase::Pending {
        return BoardroomView::Countdown {
            launches_at,
            remaining: (launches_at - now).max(Duration::zero()),
        };
    }

    let staked_balance = match stats.boardroom_staked(operator).await {
        Ok(balance) => balance,
        Err(e) => {
            warn!("boardroom stake unavailable: {:#}", e);
            U256::ZERO
        }
    };
    let earned_balance = match stats.boardroom_earned(operator).await {
        Ok(balance) => balance,
        Err(e) => {
            warn!("boardroom earnings unavailable: {:#}", e);
            U256::ZERO
        }
    };

    BoardroomView::Live {
        staked_balance,
        earned_balance,
        can_withdraw: staked_balance > U256::ZERO,
        cash_scaling_factor,
    }
}
