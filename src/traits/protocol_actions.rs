use alloy::primitives::U256;
use async_trait::async_trait;

use crate::models::bank::Bank;

/// State-changing protocol SDK surface, bound to an external wallet.
///
/// Signing and submission live behind this seam; the tracker only forwards
/// user intent and reports the resulting transaction hash. Every method
/// issues exactly one submission.
#[async_trait]
pub trait ProtocolActions: Send + Sync {
    /// Claim earned rewards from a staking pool
    async fn harvest(&self, bank: &Bank) -> anyhow::Result<String>;

    /// Stake `amount` of the deposit token into a pool
    async fn stake(&self, bank: &Bank, amount: U256) -> anyhow::Result<String>;

    /// Withdraw the full deposit from a pool
    async fn redeem(&self, bank: &Bank) -> anyhow::Result<String>;

    /// Stake `amount` of SHARE into the boardroom
    async fn stake_to_boardroom(&self, amount: U256) -> anyhow::Result<String>;

    /// Claim accumulated CASH seigniorage from the boardroom
    async fn harvest_from_boardroom(&self) -> anyhow::Result<String>;

    /// Settle earnings and withdraw the full SHARE stake
    async fn redeem_from_boardroom(&self) -> anyhow::Result<String>;
}
