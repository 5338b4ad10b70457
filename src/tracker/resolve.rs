//! Bank resolution: turn the session's pool contracts into the published
//! bank list.

use tracing::{debug, warn};

use crate::models::bank::Bank;
use crate::registry;
use crate::traits::chain_session::ChainSession;

/// Resolve every pool the session knows into a `Bank`.
///
/// Pools are resolved one at a time so log ordering stays deterministic. A
/// pool whose deposit-token read fails is dropped from the result and the
/// remaining pools are unaffected; a pool whose contract merely lacks the
/// getter keeps its bank, with the fallback table supplying the address
/// when it can.
///
/// The returned list is sorted by descending sort rank, ready for display.
pub async fn resolve_banks(session: &dyn ChainSession) -> anyhow::Result<Vec<Bank>> {
    if !session.is_connected() {
        debug!("session not connected, skipping bank resolution");
        return Ok(Vec::new());
    }

    let pools = session.pool_contracts().await?;

    let mut banks = Vec::with_capacity(pools.len());
    for (pool_id, contract) in pools {
        let descriptor = registry::describe(&pool_id);

        let deposit_token_address =
            match contract.deposit_token_address(&descriptor.deposit_token_key).await {
                Ok(Some(address)) => Some(address),
                Ok(None) => registry::fallback_deposit_address(&descriptor.deposit_token_key),
                Err(e) => {
                    warn!("dropping pool {}: deposit token lookup failed: {:#}", pool_id, e);
                    continue;
                }
            };

        debug!(
            "resolved pool {} (deposit token {} -> {:?})",
            pool_id, descriptor.deposit_token_key, deposit_token_address
        );

        let (earn_token_symbol, earn_token_address) = registry::earn_token(&pool_id);
        banks.push(Bank {
            id: descriptor.id,
            name: descriptor.name.map(str::to_string),
            icon: descriptor.icon.map(str::to_string),
            sort: descriptor.sort.unwrap_or(0),
            contract,
            deposit_token_key: descriptor.deposit_token_key,
            deposit_token_address,
            earn_token_symbol,
            earn_token_address,
        });
    }

    banks.sort_by(|a, b| b.sort.cmp(&a.sort));
    Ok(banks)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use alloy::primitives::{address, Address};
    use async_trait::async_trait;

    use super::*;
    use crate::providers::static_session::{StaticChainSession, StaticPoolContract};
    use crate::traits::chain_session::PoolContract;

    struct FailingPoolContract;

    #[async_trait]
    impl PoolContract for FailingPoolContract {
        fn address(&self) -> Address {
            Address::ZERO
        }

        async fn deposit_token_address(&self, _key: &str) -> anyhow::Result<Option<Address>> {
            anyhow::bail!("call reverted")
        }
    }

    /// Connected session that cannot enumerate its pools at all
    struct FailingSession;

    #[async_trait]
    impl ChainSession for FailingSession {
        fn is_connected(&self) -> bool {
            true
        }

        async fn pool_contracts(&self) -> anyhow::Result<Vec<(String, Arc<dyn PoolContract>)>> {
            anyhow::bail!("node refused pool enumeration")
        }
    }

    const DAI: Address = address!("6B175474E89094C44Da98b954EedeAC495271d0F");
    const WETH: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");

    fn dai_contract() -> Arc<StaticPoolContract> {
        Arc::new(StaticPoolContract::new(Address::repeat_byte(1)).with_token("dai", DAI))
    }

    #[tokio::test]
    async fn disconnected_session_skips_resolution() {
        let session = StaticChainSession::disconnected().with_pool("dai_pool", dai_contract());
        let banks = resolve_banks(&session).await.unwrap();
        assert!(banks.is_empty());
    }

    #[tokio::test]
    async fn resolves_display_metadata_and_deposit_token() {
        let session = StaticChainSession::new().with_pool("dai_pool", dai_contract());
        let banks = resolve_banks(&session).await.unwrap();
        assert_eq!(banks.len(), 1);
        let bank = &banks[0];
        assert_eq!(bank.id, "dai_pool");
        assert_eq!(bank.name.as_deref(), Some("DAI to CASH"));
        assert_eq!(bank.sort, 0);
        assert_eq!(bank.deposit_token_key, "dai");
        assert_eq!(bank.deposit_token_address, Some(DAI));
        assert_eq!(bank.earn_token_symbol, "CASH");
    }

    #[tokio::test]
    async fn unknown_pool_resolves_with_blank_display_fields() {
        let contract =
            Arc::new(StaticPoolContract::new(Address::repeat_byte(2)).with_token("mystery", DAI));
        let session = StaticChainSession::new().with_pool("mystery_pool", contract);
        let banks = resolve_banks(&session).await.unwrap();
        assert_eq!(banks.len(), 1);
        assert_eq!(banks[0].name, None);
        assert_eq!(banks[0].icon, None);
        assert_eq!(banks[0].sort, 0);
    }

    #[tokio::test]
    async fn rewritten_key_is_used_for_the_getter() {
        let contract =
            Arc::new(StaticPoolContract::new(Address::repeat_byte(3)).with_token("weth", WETH));
        let session = StaticChainSession::new().with_pool("eth_pool", contract);
        let banks = resolve_banks(&session).await.unwrap();
        assert_eq!(banks[0].deposit_token_key, "weth");
        assert_eq!(banks[0].deposit_token_address, Some(WETH));
        // eth_pool is a legacy pool without display entries.
        assert_eq!(banks[0].name, None);
        assert_eq!(banks[0].sort, 0);
    }

    #[tokio::test]
    async fn missing_getter_falls_back_to_the_hardcoded_address() {
        // No share_dai_uni_lp entry on the contract: the fallback table
        // must supply the address.
        let contract = Arc::new(StaticPoolContract::new(Address::repeat_byte(4)));
        let session = StaticChainSession::new().with_pool("share_lp_pool", contract);
        let banks = resolve_banks(&session).await.unwrap();
        assert_eq!(
            banks[0].deposit_token_address,
            Some(address!("df5e0e81dff6faf3a7e52ba697820c5e32d806a8"))
        );
    }

    #[tokio::test]
    async fn missing_getter_without_fallback_keeps_the_bank() {
        let contract = Arc::new(StaticPoolContract::new(Address::repeat_byte(5)));
        let session = StaticChainSession::new().with_pool("dai_pool", contract);
        let banks = resolve_banks(&session).await.unwrap();
        assert_eq!(banks.len(), 1);
        assert_eq!(banks[0].deposit_token_address, None);
    }

    #[tokio::test]
    async fn failing_pool_is_dropped_and_the_rest_survive() {
        let session = StaticChainSession::new()
            .with_pool("dai_pool", dai_contract())
            .with_pool("susd_pool", Arc::new(FailingPoolContract))
            .with_pool(
                "eth_pool",
                Arc::new(StaticPoolContract::new(Address::repeat_byte(6)).with_token("weth", WETH)),
            );
        let banks = resolve_banks(&session).await.unwrap();
        let ids: Vec<&str> = banks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["dai_pool", "eth_pool"]);
    }

    #[tokio::test]
    async fn failed_enumeration_propagates_to_the_caller() {
        // Unlike a single failing pool, a session that cannot enumerate at
        // all is an error, not an empty list.
        let err = resolve_banks(&FailingSession).await.unwrap_err();
        assert!(err.to_string().contains("enumeration"));
    }

    #[tokio::test]
    async fn banks_are_sorted_by_descending_rank() {
        const LP: Address = address!("88c9a1e3b02153ca4027d856bd4b3bcf7c1ad875");
        let session = StaticChainSession::new()
            .with_pool("dai_pool", dai_contract())
            .with_pool(
                "cash_lp_pool",
                Arc::new(
                    StaticPoolContract::new(Address::repeat_byte(7))
                        .with_token("cash_dai_uni_lp", LP),
                ),
            )
            .with_pool(
                "share_lp_pool",
                Arc::new(StaticPoolContract::new(Address::repeat_byte(8))),
            );
        let banks = resolve_banks(&session).await.unwrap();
        let ids: Vec<&str> = banks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["share_lp_pool", "cash_lp_pool", "dai_pool"]);
    }

    #[tokio::test]
    async fn unranked_pools_keep_insertion_order_among_themselves() {
        // Both ids are outside the sort table, so both rank 0; the stable
        // sort keeps enumeration order.
        let first =
            Arc::new(StaticPoolContract::new(Address::repeat_byte(9)).with_token("alpha", DAI));
        let second =
            Arc::new(StaticPoolContract::new(Address::repeat_byte(10)).with_token("beta", WETH));
        let session = StaticChainSession::new()
            .with_pool("alpha_pool", first)
            .with_pool("beta_pool", second);
        let banks = resolve_banks(&session).await.unwrap();
        let ids: Vec<&str> = banks.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha_pool", "beta_pool"]);
    }
}
