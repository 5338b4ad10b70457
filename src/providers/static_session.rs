use std::collections::HashMap;
use std::sync::Arc;

use alloy::primitives::{address, Address, U256};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};

use crate::models::stats::TokenStat;
use crate::registry;
use crate::traits::chain_session::{ChainSession, PoolContract};
use crate::traits::stats_provider::StatsProvider;

// Sample deposit tokens (for demo purposes); mirrors the mainnet
// deployment, minus share_dai_uni_lp whose pool predates the getter.
const SAMPLE_DEPOSIT_TOKENS: &[(&str, Address)] = &[
    ("dai", address!("6B175474E89094C44Da98b954EedeAC495271d0F")),
    ("susd", address!("57ab1ec28d129707052df4df418d58a2d46d5f51")),
    ("usdt", address!("dac17f958d2ee523a2206206994597c13d831ec7")),
    ("weth", address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2")),
    ("cash_dai_uni_lp", address!("88c9a1e3b02153ca4027d856bd4b3bcf7c1ad875")),
];

/// In-memory pool contract: answers getter probes from a fixed table
pub struct StaticPoolContract {
    address: Address,
    token_addresses: HashMap<String, Address>,
}

impl StaticPoolContract {
    pub fn new(address: Address) -> Self {
        Self {
            address,
            token_addresses: HashMap::new(),
        }
    }

    /// Add a deposit-token getter to the table
    pub fn with_token(mut self, key: &str, token: Address) -> Self {
        self.token_addresses.insert(key.to_string(), token);
        self
    }
}

#[async_trait]
impl PoolContract for StaticPoolContract {
    fn address(&self) -> Address {
        self.address
    }

    async fn deposit_token_address(&self, key: &str) -> anyhow::Result<Option<Address>> {
        Ok(self.token_addresses.get(key).copied())
    }
}

/// In-memory chain session with a configurable pool set
pub struct StaticChainSession {
    connected: bool,
    pools: Vec<(String, Arc<dyn PoolContract>)>,
}

impl StaticChainSession {
    pub fn new() -> Self {
        Self {
            connected: true,
            pools: Vec::new(),
        }
    }

    /// A session that reports itself unusable
    pub fn disconnected() -> Self {
        Self {
            connected: false,
            pools: Vec::new(),
        }
    }

    /// Add a pool to the session
    pub fn with_pool(mut self, pool_id: &str, contract: Arc<dyn PoolContract>) -> Self {
        self.pools.push((pool_id.to_string(), contract));
        self
    }

    /// The full registry pool set with sample data, for offline runs
    pub fn sample() -> Self {
        let mut session = Self::new();
        for (index, (pool_id, _)) in registry::KNOWN_POOLS.iter().enumerate() {
            let pool_address = Address::repeat_byte(0xa0 + index as u8);
            let key = registry::deposit_token_key(pool_id);
            let mut contract = StaticPoolContract::new(pool_address);
            if let Some(token) = SAMPLE_DEPOSIT_TOKENS
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, token)| *token)
            {
                contract = contract.with_token(&key, token);
            }
            session = session.with_pool(pool_id, Arc::new(contract));
        }
        session
    }
}

impl Default for StaticChainSession {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChainSession for StaticChainSession {
    fn is_connected(&self) -> bool {
        self.connected
    }

    async fn pool_contracts(&self) -> anyhow::Result<Vec<(String, Arc<dyn PoolContract>)>> {
        Ok(self.pools.clone())
    }
}

/// Fixed statistics provider (for demo purposes)
pub struct StaticStatsProvider {
    cash_price: String,
    staked: U256,
    earned: U256,
}

impl StaticStatsProvider {
    pub fn new() -> Self {
        let one = U256::from(10u64).pow(U256::from(18u64));
        Self {
            cash_price: "1.2400".to_string(),
            staked: U256::from(25u64) * one,
            earned: U256::from(103u64) * one,
        }
    }
}

impl Default for StaticStatsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StatsProvider for StaticStatsProvider {
    async fn cash_stat(&self) -> anyhow::Result<TokenStat> {
        Ok(TokenStat {
            price: self.cash_price.clone(),
            total_supply: "48201240".to_string(),
        })
    }

    async fn share_stat(&self) -> anyhow::Result<TokenStat> {
        Ok(TokenStat {
            price: "612.2043".to_string(),
            total_supply: "801291".to_string(),
        })
    }

    async fn bond_stat(&self) -> anyhow::Result<TokenStat> {
        // 1.24 squared, the bond pricing rule
        Ok(TokenStat {
            price: "1.5376".to_string(),
            total_supply: "112000".to_string(),
        })
    }

    async fn treasury_amount(&self) -> anyhow::Result<U256> {
        let one = U256::from(10u64).pow(U256::from(18u64));
        Ok(U256::from(1_450_000u64) * one)
    }

    async fn last_allocation_time(&self) -> anyhow::Result<DateTime<Utc>> {
        Ok(Utc::now() - Duration::hours(1))
    }

    async fn boardroom_staked(&self, _account: Address) -> anyhow::Result<U256> {
        Ok(self.staked)
    }

    async fn boardroom_earned(&self, _account: Address) -> anyhow::Result<U256> {
        Ok(self.earned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pool_contract_serves_its_table() {
        let dai = address!("6B175474E89094C44Da98b954EedeAC495271d0F");
        let contract = StaticPoolContract::new(Address::repeat_byte(1)).with_token("dai", dai);
        assert_eq!(contract.deposit_token_address("dai").await.unwrap(), Some(dai));
        assert_eq!(contract.deposit_token_address("weth").await.unwrap(), None);
    }

    #[tokio::test]
    async fn sample_session_covers_the_registry() {
        let session = StaticChainSession::sample();
        let pools = session.pool_contracts().await.unwrap();
        assert_eq!(pools.len(), registry::KNOWN_POOLS.len());

        // share_lp_pool deliberately has no getter entry
        let (_, share_lp) = pools
            .iter()
            .find(|(id, _)| id == "share_lp_pool")
            .expect("share_lp_pool missing");
        assert_eq!(
            share_lp
                .deposit_token_address("share_dai_uni_lp")
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn disconnected_session_reports_it() {
        assert!(!StaticChainSession::disconnected().is_connected());
        assert!(StaticChainSession::new().is_connected());
    }
}
