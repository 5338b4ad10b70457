use std::fmt;
use std::sync::Arc;

use alloy::primitives::Address;

use crate::traits::chain_session::PoolContract;

/// A resolved staking pool: deposit one token, earn a protocol token.
///
/// Display fields come from the static registry and stay `None` for pools
/// without an entry; the renderer shows a blank instead of failing.
#[derive(Clone)]
pub struct Bank {
    /// Pool identifier, e.g. `dai_pool`
    pub id: String,
    pub name: Option<String>,
    pub icon: Option<String>,
    /// Display rank; the published list is sorted by this, descending
    pub sort: i32,
    /// Live contract handle from the session that resolved this bank
    pub contract: Arc<dyn PoolContract>,
    /// Getter name used to resolve the deposit token, after rewrites
    pub deposit_token_key: String,
    /// `None` when the contract had no getter and no fallback was known
    pub deposit_token_address: Option<Address>,
    /// `CASH` for single-asset pools, `SHARE` for LP pools
    pub earn_token_symbol: &'static str,
    pub earn_token_address: Address,
}

impl fmt::Debug for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bank")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("icon", &self.icon)
            .field("sort", &self.sort)
            .field("contract", &self.contract.address())
            .field("deposit_token_key", &self.deposit_token_key)
            .field("deposit_token_address", &self.deposit_token_address)
            .field("earn_token_symbol", &self.earn_token_symbol)
            .field("earn_token_address", &self.earn_token_address)
            .finish()
    }
}
