use tokio::sync::RwLock;

use crate::models::bank::Bank;

/// Owned bank-list state.
///
/// The tracker is the only writer, and every refresh replaces the whole
/// list in one write so readers never observe a partially updated set.
#[derive(Default)]
pub struct BankStore {
    banks: RwLock<Vec<Bank>>,
}

impl BankStore {
    pub fn new() -> Self {
        Self {
            banks: RwLock::new(Vec::new()),
        }
    }

    /// Atomically replace the published list
    pub async fn replace(&self, banks: Vec<Bank>) {
        *self.banks.write().await = banks;
    }

    /// Clone of the current list, in display order
    pub async fn snapshot(&self) -> Vec<Bank> {
        self.banks.read().await.clone()
    }

    /// Look up a single bank by pool id
    pub async fn get(&self, pool_id: &str) -> Option<Bank> {
        self.banks
            .read()
            .await
            .iter()
            .find(|bank| bank.id == pool_id)
            .cloned()
    }

    pub async fn len(&self) -> usize {
        self.banks.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.banks.read().await.is_empty()
    }
}
