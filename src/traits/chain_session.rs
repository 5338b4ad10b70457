use std::sync::Arc;

use alloy::primitives::Address;
use async_trait::async_trait;

/// Read handle to one staking-pool contract.
///
/// The resolver probes deposit-token getters by name; implementations map
/// the rewritten token key onto whatever the deployed contract exposes.
#[async_trait]
pub trait PoolContract: Send + Sync {
    /// On-chain address of the pool contract
    fn address(&self) -> Address;

    /// Resolve the deposit-token address through the getter named `key`.
    ///
    /// `Ok(None)` means the contract has no such getter, in which case the
    /// caller may fall back to a hardcoded address. `Err` means the call
    /// itself failed.
    async fn deposit_token_address(&self, key: &str) -> anyhow::Result<Option<Address>>;
}

/// A connected provider session able to hand out pool contracts.
#[async_trait]
pub trait ChainSession: Send + Sync {
    /// Whether the underlying provider is usable. Bank resolution is
    /// skipped entirely while this is false.
    fn is_connected(&self) -> bool;

    /// Contract handles for every pool the session knows, in a stable
    /// enumeration order.
    async fn pool_contracts(&self) -> anyhow::Result<Vec<(String, Arc<dyn PoolContract>)>>;
}
