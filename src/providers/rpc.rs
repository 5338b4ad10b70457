use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::sol;
use anyhow::{anyhow, Context};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::config::Deployments;
use crate::models::stats::TokenStat;
use crate::registry;
use crate::traits::chain_session::{ChainSession, PoolContract};
use crate::traits::stats_provider::StatsProvider;
use crate::utils::format::format_token_amount;

sol! {
    #[sol(rpc)]
    interface IRewardPool {
        function dai() external view returns (address);
        function susd() external view returns (address);
        function usdt() external view returns (address);
        function weth() external view returns (address);
        function cash_dai_uni_lp() external view returns (address);
    }

    #[sol(rpc)]
    interface IERC20 {
        function totalSupply() external view returns (uint256);
        function decimals() external view returns (uint8);
    }

    #[sol(rpc)]
    interface IBoardroom {
        function getShareOf(address director) external view returns (uint256);
        function getCashEarningsOf(address director) external view returns (uint256);
    }

    #[sol(rpc)]
    interface ITreasury {
        function getReserve() external view returns (uint256);
        function lastAllocated() external view returns (uint256);
    }

    #[sol(rpc)]
    interface ISeigniorageOracle {
        function consult(address token, uint256 amountIn) external view returns (uint256);
    }
}

/// One whole token in raw units (all protocol tokens use 18 decimals)
fn one_unit() -> U256 {
    U256::from(10u64).pow(U256::from(18u64))
}

/// Bond price tracks the square of the cash price, raw 18-decimal units.
/// A quote large enough to overflow the square is an error, so the stat
/// degrades instead of reporting a wrapped price.
fn bond_price_from_cash(cash_price: U256) -> anyhow::Result<U256> {
    let squared = cash_price
        .checked_mul(cash_price)
        .ok_or_else(|| anyhow!("cash price {} overflows bond pricing", cash_price))?;
    Ok(squared / one_unit())
}

/// Build the erased HTTP provider the RPC backends share
pub fn http_provider(rpc_url: &str) -> anyhow::Result<DynProvider> {
    let url = rpc_url.parse().context("invalid RPC URL")?;
    Ok(ProviderBuilder::new().connect_http(url).erased())
}

/// Read handle to one deployed reward-pool contract
pub struct RpcPoolContract {
    provider: DynProvider,
    address: Address,
}

impl RpcPoolContract {
    pub fn new(provider: DynProvider, address: Address) -> Self {
        Self { provider, address }
    }
}

#[async_trait]
impl PoolContract for RpcPoolContract {
    fn address(&self) -> Address {
        self.address
    }

    async fn deposit_token_address(&self, key: &str) -> anyhow::Result<Option<Address>> {
        let pool = IRewardPool::new(self.address, self.provider.clone());
        // The deployed pools expose one getter per deposit token; a key
        // outside this set has no getter anywhere.
        let call = match key {
            "dai" => pool.dai().call().await,
            "susd" => pool.susd().call().await,
            "usdt" => pool.usdt().call().await,
            "weth" => pool.weth().call().await,
            "cash_dai_uni_lp" => pool.cash_dai_uni_lp().call().await,
            _ => return Ok(None),
        };
        call.map(Some)
            .with_context(|| format!("{} lookup on pool {}", key, self.address))
    }
}

/// Chain session backed by a JSON-RPC provider. Hands out contract handles
/// for every registry pool present in the deployment manifest.
pub struct RpcChainSession {
    provider: DynProvider,
    deployments: Deployments,
}

impl RpcChainSession {
    /// Create a new RPC chain session
    pub fn new(provider: DynProvider, deployments: Deployments) -> Self {
        Self {
            provider,
            deployments,
        }
    }
}

#[async_trait]
impl ChainSession for RpcChainSession {
    fn is_connected(&self) -> bool {
        // An HTTP provider is usable from construction; transient RPC
        // failures surface per call instead.
        true
    }

    async fn pool_contracts(&self) -> anyhow::Result<Vec<(String, Arc<dyn PoolContract>)>> {
        let mut pools: Vec<(String, Arc<dyn PoolContract>)> = Vec::new();
        for (pool_id, deployment_key) in registry::KNOWN_POOLS {
            let address = match self.deployments.address(deployment_key) {
                Ok(address) => address,
                Err(e) => {
                    warn!("no usable deployment for pool {}: {:#}", pool_id, e);
                    continue;
                }
            };
            let contract: Arc<dyn PoolContract> =
                Arc::new(RpcPoolContract::new(self.provider.clone(), address));
            pools.push(((*pool_id).to_string(), contract));
        }
        Ok(pools)
    }
}

/// Protocol statistics read straight from the deployed contracts
pub struct RpcStatsProvider {
    provider: DynProvider,
    cash: Address,
    share: Address,
    bond: Address,
    boardroom: Address,
    treasury: Address,
    oracle: Address,
    decimals_cache: Arc<DashMap<Address, u8>>,
}

impl RpcStatsProvider {
    /// Create a new RPC stats provider from the deployment manifest
    pub fn new(provider: DynProvider, deployments: &Deployments) -> anyhow::Result<Self> {
        Ok(Self {
            cash: deployments.address("Cash")?,
            share: deployments.address("Share")?,
            bond: deployments.address("Bond")?,
            boardroom: deployments.address("Boardroom")?,
            treasury: deployments.address("Treasury")?,
            oracle: deployments.address("SeigniorageOracle")?,
            decimals_cache: Arc::new(DashMap::new()),
            provider,
        })
    }

    async fn token_decimals(&self, token: Address) -> u8 {
        // Check cache first
        if let Some(decimals) = self.decimals_cache.get(&token) {
            return *decimals;
        }

        match IERC20::new(token, self.provider.clone()).decimals().call().await {
            Ok(decimals) => {
                self.decimals_cache.insert(token, decimals);
                decimals
            }
            Err(e) => {
                debug!("decimals() failed for {}, assuming 18: {}", token, e);
                18
            }
        }
    }

    /// TWAP of `token` in the reference currency, raw 18-decimal units
    async fn oracle_price(&self, token: Address) -> anyhow::Result<U256> {
        ISeigniorageOracle::new(self.oracle, self.provider.clone())
            .consult(token, one_unit())
            .call()
            .await
            .with_context(|| format!("oracle consult for {}", token))
    }

    async fn token_stat(&self, token: Address) -> anyhow::Result<TokenStat> {
        let price = self.oracle_price(token).await?;
        let supply = IERC20::new(token, self.provider.clone())
            .totalSupply()
            .call()
            .await
            .with_context(|| format!("totalSupply of {}", token))?;
        let decimals = self.token_decimals(token).await;

        Ok(TokenStat {
            price: format_token_amount(price, 18, 4),
            total_supply: format_token_amount(supply, decimals, 0),
        })
    }
}

#[async_trait]
impl StatsProvider for RpcStatsProvider {
    async fn cash_stat(&self) -> anyhow::Result<TokenStat> {
        self.token_stat(self.cash).await
    }

    async fn share_stat(&self) -> anyhow::Result<TokenStat> {
        self.token_stat(self.share).await
    }

    async fn bond_stat(&self) -> anyhow::Result<TokenStat> {
        // The oracle has no direct BOND feed; derive from the cash quote.
        let cash_price = self.oracle_price(self.cash).await?;
        let bond_price = bond_price_from_cash(cash_price)?;

        let supply = IERC20::new(self.bond, self.provider.clone())
            .totalSupply()
            .call()
            .await
            .context("bond totalSupply")?;
        let decimals = self.token_decimals(self.bond).await;

        Ok(TokenStat {
            price: format_token_amount(bond_price, 18, 4),
            total_supply: format_token_amount(supply, decimals, 0),
        })
    }

    async fn treasury_amount(&self) -> anyhow::Result<U256> {
        ITreasury::new(self.treasury, self.provider.clone())
            .getReserve()
            .call()
            .await
            .context("treasury reserve")
    }

    async fn last_allocation_time(&self) -> anyhow::Result<DateTime<Utc>> {
        let raw = ITreasury::new(self.treasury, self.provider.clone())
            .lastAllocated()
            .call()
            .await
            .context("treasury lastAllocated")?;
        let secs = i64::try_from(raw).context("allocation timestamp out of range")?;
        DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| anyhow!("invalid allocation timestamp {}", secs))
    }

    async fn boardroom_staked(&self, account: Address) -> anyhow::Result<U256> {
        IBoardroom::new(self.boardroom, self.provider.clone())
            .getShareOf(account)
            .call()
            .await
            .context("boardroom getShareOf")
    }

    async fn boardroom_earned(&self, account: Address) -> anyhow::Result<U256> {
        IBoardroom::new(self.boardroom, self.provider.clone())
            .getCashEarningsOf(account)
            .call()
            .await
            .context("boardroom getCashEarningsOf")
    }
}
