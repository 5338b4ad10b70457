use alloy::primitives::{Address, U256};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::stats::TokenStat;

/// Read-only protocol statistics, one method per underlying lookup so each
/// can fail independently.
#[async_trait]
pub trait StatsProvider: Send + Sync {
    /// Price and supply of the stablecoin
    async fn cash_stat(&self) -> anyhow::Result<TokenStat>;

    /// Price and supply of the equity token
    async fn share_stat(&self) -> anyhow::Result<TokenStat>;

    /// Price and supply of the debt token
    async fn bond_stat(&self) -> anyhow::Result<TokenStat>;

    /// Undistributed seigniorage currently held by the treasury
    async fn treasury_amount(&self) -> anyhow::Result<U256>;

    /// Timestamp of the last seigniorage allocation
    async fn last_allocation_time(&self) -> anyhow::Result<DateTime<Utc>>;

    /// SHARE currently staked in the boardroom by `account`
    async fn boardroom_staked(&self, account: Address) -> anyhow::Result<U256>;

    /// CASH earnings claimable from the boardroom by `account`
    async fn boardroom_earned(&self, account: Address) -> anyhow::Result<U256>;
}
