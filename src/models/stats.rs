use alloy::primitives::U256;
use chrono::{DateTime, Duration, Utc};

/// Spot statistics for one protocol token, quoted in the reference currency
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenStat {
    pub price: String,
    pub total_supply: String,
}

/// Treasury allocation schedule. The next allocation is always exactly one
/// period after the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationSchedule {
    pub prev_allocation: DateTime<Utc>,
    pub next_allocation: DateTime<Utc>,
}

impl AllocationSchedule {
    pub fn from_last(prev: DateTime<Utc>, period: Duration) -> Self {
        Self {
            prev_allocation: prev,
            next_allocation: prev + period,
        }
    }
}

/// Launch state of the boardroom. The transition is one-way: once a gate
/// reports `Live` it never reports `Pending` again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchPhase {
    Pending,
    Live,
}

/// Home-page aggregate. Every field degrades independently to `None` when
/// its underlying read fails; the rest still populate.
#[derive(Debug, Clone, Default)]
pub struct ProtocolOverview {
    pub cash: Option<TokenStat>,
    pub share: Option<TokenStat>,
    pub bond: Option<TokenStat>,
    /// Cash price against its peg target, two decimal places
    pub cash_scaling_factor: Option<String>,
    /// Undistributed seigniorage held by the treasury, raw units
    pub treasury_amount: Option<U256>,
    pub allocation: Option<AllocationSchedule>,
}

/// Boardroom view-model: a countdown before launch, live balances and
/// actions after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardroomView {
    Countdown {
        launches_at: DateTime<Utc>,
        remaining: Duration,
    },
    Live {
        staked_balance: U256,
        earned_balance: U256,
        /// Settle & Withdraw is only offered while something is staked
        can_withdraw: bool,
        cash_scaling_factor: Option<String>,
    },
}
