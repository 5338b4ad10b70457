//! Static pool registry: the closed set of staking pools plus their display
//! metadata and deposit-token lookup tables.
//!
//! Display tables are allowed to lag the pool set; a pool without an entry
//! resolves with `None` display fields and renders blank. The rewrite and
//! fallback tables below are the only places where a pool id and its
//! deposit-token getter are allowed to disagree.

use alloy::primitives::{address, Address};

/// Stablecoin token address (mainnet deployment)
pub const CASH_ADDRESS: Address = address!("25d8f38a286be0c0c80dae4d1e28b4c577ac1b25");

/// Equity token address (mainnet deployment)
pub const SHARE_ADDRESS: Address = address!("8a6de7c5dc2a5f51e26220e60e7d41175c8f8f31");

/// The closed pool set: (pool id, deployment key). No dynamic discovery.
pub const KNOWN_POOLS: &[(&str, &str)] = &[
    ("dai_pool", "CashPoolDAI"),
    ("susd_pool", "CashPoolSUSD"),
    ("usdt_pool", "CashPoolUSDT"),
    ("eth_pool", "CashPoolWETH"),
    ("cash_lp_pool", "SharePoolCashDai"),
    ("share_lp_pool", "SharePoolShareDai"),
];

// Only the actively promoted pools carry display entries; the legacy
// single-asset pools render blank.
const NAME_FOR_POOL: &[(&str, &str)] = &[
    ("dai_pool", "DAI to CASH"),
    ("cash_lp_pool", "CASH_DAI_LP to SHARE"),
    ("share_lp_pool", "SHARE_DAI_LP to SHARE"),
];

const ICON_FOR_POOL: &[(&str, &str)] = &[
    ("dai_pool", "🏦"),
    ("cash_lp_pool", "🌎"),
    ("share_lp_pool", "🌷"),
];

const SORT_FOR_POOL: &[(&str, i32)] = &[
    ("dai_pool", 0),
    ("cash_lp_pool", 1),
    ("share_lp_pool", 2),
];

/// Pool ids whose deposit-token getter is not simply the id minus the
/// `_pool` suffix. Keep in sync with the deployed pool contracts.
const DEPOSIT_KEY_REWRITES: &[(&str, &str)] = &[
    ("eth", "weth"),
    ("cash_lp", "cash_dai_uni_lp"),
    ("share_lp", "share_dai_uni_lp"),
];

/// Deposit-token addresses for pools whose contract exposes no getter for
/// the rewritten key. The first SHARE/DAI pool deployment predates the
/// getter.
const FALLBACK_DEPOSIT_ADDRESSES: &[(&str, Address)] = &[(
    "share_dai_uni_lp",
    address!("df5e0e81dff6faf3a7e52ba697820c5e32d806a8"),
)];

/// Everything the registry knows about one pool id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolDescriptor {
    pub id: String,
    pub name: Option<&'static str>,
    pub icon: Option<&'static str>,
    pub sort: Option<i32>,
    pub deposit_token_key: String,
}

fn lookup<T: Copy>(table: &[(&str, T)], key: &str) -> Option<T> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Display name for a pool, `None` when the pool has no entry
pub fn display_name(pool_id: &str) -> Option<&'static str> {
    lookup(NAME_FOR_POOL, pool_id)
}

/// Display icon for a pool, `None` when the pool has no entry
pub fn icon(pool_id: &str) -> Option<&'static str> {
    lookup(ICON_FOR_POOL, pool_id)
}

/// Display rank for a pool, `None` when the pool has no entry
pub fn sort_order(pool_id: &str) -> Option<i32> {
    lookup(SORT_FOR_POOL, pool_id)
}

/// Deployment-manifest key for a known pool
pub fn deployment_key(pool_id: &str) -> Option<&'static str> {
    lookup(KNOWN_POOLS, pool_id)
}

/// Derive the deposit-token getter name for a pool: strip the `_pool`
/// suffix, then apply the rewrite table.
pub fn deposit_token_key(pool_id: &str) -> String {
    let base = pool_id.strip_suffix("_pool").unwrap_or(pool_id);
    lookup(DEPOSIT_KEY_REWRITES, base)
        .map(str::to_string)
        .unwrap_or_else(|| base.to_string())
}

/// Assemble the descriptor for a pool id; entries missing from a table come
/// back `None`, never an error.
pub fn describe(pool_id: &str) -> PoolDescriptor {
    PoolDescriptor {
        id: pool_id.to_string(),
        name: display_name(pool_id),
        icon: icon(pool_id),
        sort: sort_order(pool_id),
        deposit_token_key: deposit_token_key(pool_id),
    }
}

/// Hardcoded deposit-token address for keys the contracts cannot answer
pub fn fallback_deposit_address(token_key: &str) -> Option<Address> {
    lookup(FALLBACK_DEPOSIT_ADDRESSES, token_key)
}

/// The token a pool pays out: LP pools earn SHARE, single-asset pools earn
/// CASH.
pub fn earn_token(pool_id: &str) -> (&'static str, Address) {
    if pool_id.ends_with("_lp_pool") {
        ("SHARE", SHARE_ADDRESS)
    } else {
        ("CASH", CASH_ADDRESS)
    }
}
