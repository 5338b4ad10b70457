//! Transaction operations: forward user intent to the protocol SDK and
//! record the submitted transaction for UI display.
//!
//! Submission failures return to the caller; nothing is recorded for them.

use std::sync::Arc;

use alloy::primitives::U256;

use crate::models::bank::Bank;
use crate::models::transaction::PendingTransaction;
use crate::traits::protocol_actions::ProtocolActions;
use crate::traits::transaction_sink::TransactionSink;
use crate::utils::format::format_token_amount;

/// Decimal places shared by the protocol tokens and every deposit token
const TOKEN_DECIMALS: u8 = 18;

/// Staking-pool actions. Each call issues exactly one SDK submission.
pub struct BankOps {
    actions: Arc<dyn ProtocolActions>,
    sink: Arc<dyn TransactionSink>,
}

impl BankOps {
    pub fn new(actions: Arc<dyn ProtocolActions>, sink: Arc<dyn TransactionSink>) -> Self {
        Self { actions, sink }
    }

    /// Claim earned rewards from `bank`
    pub async fn harvest(&self, bank: &Bank) -> anyhow::Result<String> {
        let hash = self.actions.harvest(bank).await?;
        self.sink.record(PendingTransaction {
            hash: hash.clone(),
            summary: format!("Claim {} from {}", bank.earn_token_symbol, bank.id),
        });
        Ok(hash)
    }

    /// Stake `amount` of the deposit token into `bank`
    pub async fn stake(&self, bank: &Bank, amount: U256) -> anyhow::Result<String> {
        let hash = self.actions.stake(bank, amount).await?;
        self.sink.record(PendingTransaction {
            hash: hash.clone(),
            summary: format!(
                "Stake {} {} to {}",
                format_token_amount(amount, TOKEN_DECIMALS, 2),
                bank.deposit_token_key,
                bank.id
            ),
        });
        Ok(hash)
    }

    /// Withdraw the full deposit from `bank`
    pub async fn redeem(&self, bank: &Bank) -> anyhow::Result<String> {
        let hash = self.actions.redeem(bank).await?;
        self.sink.record(PendingTransaction {
            hash: hash.clone(),
            summary: format!("Redeem {}", bank.id),
        });
        Ok(hash)
    }
}

/// Boardroom actions: stake SHARE, claim CASH seigniorage, settle out
pub struct BoardroomOps {
    actions: Arc<dyn ProtocolActions>,
    sink: Arc<dyn TransactionSink>,
}

impl BoardroomOps {
    pub fn new(actions: Arc<dyn ProtocolActions>, sink: Arc<dyn TransactionSink>) -> Self {
        Self { actions, sink }
    }

    /// Stake `amount` of SHARE into the boardroom
    pub async fn stake(&self, amount: U256) -> anyhow::Result<String> {
        let hash = self.actions.stake_to_boardroom(amount).await?;
        self.sink.record(PendingTransaction {
            hash: hash.clone(),
            summary: format!(
                "Stake {} SHARE to the boardroom",
                format_token_amount(amount, TOKEN_DECIMALS, 2)
            ),
        });
        Ok(hash)
    }

    /// Claim accumulated CASH seigniorage
    pub async fn harvest(&self) -> anyhow::Result<String> {
        let hash = self.actions.harvest_from_boardroom().await?;
        self.sink.record(PendingTransaction {
            hash: hash.clone(),
            summary: "Claim CASH from the boardroom".to_string(),
        });
        Ok(hash)
    }

    /// Settle earnings and withdraw the full SHARE stake
    pub async fn redeem(&self) -> anyhow::Result<String> {
        let hash = self.actions.redeem_from_boardroom().await?;
        self.sink.record(PendingTransaction {
            hash: hash.clone(),
            summary: "Settle & withdraw from the boardroom".to_string(),
        });
        Ok(hash)
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::Address;
    use async_trait::async_trait;

    use super::*;
    use crate::handlers::transaction_log::InMemoryTransactionLog;
    use crate::providers::static_session::StaticPoolContract;
    use crate::registry;

    /// SDK stub: counts submissions, optionally refuses them
    struct MockActions {
        fail: bool,
        submissions: std::sync::Mutex<u32>,
    }

    impl MockActions {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                submissions: std::sync::Mutex::new(0),
            }
        }

        fn submit(&self, hash: &str) -> anyhow::Result<String> {
            if self.fail {
                anyhow::bail!("wallet refused to sign");
            }
            *self.submissions.lock().unwrap() += 1;
            Ok(hash.to_string())
        }

        fn submissions(&self) -> u32 {
            *self.submissions.lock().unwrap()
        }
    }

    #[async_trait]
    impl ProtocolActions for MockActions {
        async fn harvest(&self, _bank: &Bank) -> anyhow::Result<String> {
            self.submit("0xhash-harvest")
        }

        async fn stake(&self, _bank: &Bank, _amount: U256) -> anyhow::Result<String> {
            self.submit("0xhash-stake")
        }

        async fn redeem(&self, _bank: &Bank) -> anyhow::Result<String> {
            self.submit("0xhash-redeem")
        }

        async fn stake_to_boardroom(&self, _amount: U256) -> anyhow::Result<String> {
            self.submit("0xhash-br-stake")
        }

        async fn harvest_from_boardroom(&self) -> anyhow::Result<String> {
            self.submit("0xhash-br-harvest")
        }

        async fn redeem_from_boardroom(&self) -> anyhow::Result<String> {
            self.submit("0xhash-br-redeem")
        }
    }

    fn dai_bank() -> Bank {
        let (symbol, address) = registry::earn_token("dai_pool");
        Bank {
            id: "dai_pool".to_string(),
            name: Some("DAI to CASH".to_string()),
            icon: None,
            sort: 0,
            contract: Arc::new(StaticPoolContract::new(Address::repeat_byte(1))),
            deposit_token_key: "dai".to_string(),
            deposit_token_address: Some(Address::repeat_byte(2)),
            earn_token_symbol: symbol,
            earn_token_address: address,
        }
    }

    fn one_token(whole: u64) -> U256 {
        U256::from(whole) * U256::from(10u64).pow(U256::from(18u64))
    }

    #[tokio::test]
    async fn harvest_records_an_interpolated_summary() {
        let actions = Arc::new(MockActions::new(false));
        let log = Arc::new(InMemoryTransactionLog::new());
        let ops = BankOps::new(actions.clone(), log.clone());

        let hash = ops.harvest(&dai_bank()).await.unwrap();
        assert_eq!(hash, "0xhash-harvest");
        assert_eq!(actions.submissions(), 1);

        let entries = log.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].summary, "Claim CASH from dai_pool");
        assert_eq!(entries[0].hash, "0xhash-harvest");
    }

    #[tokio::test]
    async fn stake_formats_the_amount_in_the_summary() {
        let actions = Arc::new(MockActions::new(false));
        let log = Arc::new(InMemoryTransactionLog::new());
        let ops = BankOps::new(actions, log.clone());

        ops.stake(&dai_bank(), one_token(150)).await.unwrap();
        assert_eq!(log.entries()[0].summary, "Stake 150.00 dai to dai_pool");
    }

    #[tokio::test]
    async fn failed_submission_returns_the_error_and_records_nothing() {
        let actions = Arc::new(MockActions::new(true));
        let log = Arc::new(InMemoryTransactionLog::new());
        let ops = BankOps::new(actions.clone(), log.clone());

        let err = ops.harvest(&dai_bank()).await.unwrap_err();
        assert!(err.to_string().contains("refused"));
        assert_eq!(actions.submissions(), 0);
        assert!(log.entries().is_empty());
    }

    #[tokio::test]
    async fn boardroom_ops_cover_the_three_actions() {
        let actions = Arc::new(MockActions::new(false));
        let log = Arc::new(InMemoryTransactionLog::new());
        let ops = BoardroomOps::new(actions.clone(), log.clone());

        ops.stake(one_token(25)).await.unwrap();
        ops.harvest().await.unwrap();
        ops.redeem().await.unwrap();

        assert_eq!(actions.submissions(), 3);
        let summaries: Vec<String> = log.entries().into_iter().map(|t| t.summary).collect();
        assert_eq!(
            summaries,
            vec![
                "Stake 25.00 SHARE to the boardroom".to_string(),
                "Claim CASH from the boardroom".to_string(),
                "Settle & withdraw from the boardroom".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn boardroom_failure_leaves_the_sink_untouched() {
        let actions = Arc::new(MockActions::new(true));
        let log = Arc::new(InMemoryTransactionLog::new());
        let ops = BoardroomOps::new(actions, log.clone());

        assert!(ops.harvest().await.is_err());
        assert!(log.entries().is_empty());
    }
}
