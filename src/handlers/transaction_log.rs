use std::sync::Mutex;

use tracing::debug;

use crate::models::transaction::PendingTransaction;
use crate::traits::transaction_sink::TransactionSink;

/// In-memory pending-transaction list, the store a UI shell would own.
///
/// Append-only from the tracker's side; readers get clones.
#[derive(Default)]
pub struct InMemoryTransactionLog {
    entries: Mutex<Vec<PendingTransaction>>,
}

impl InMemoryTransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone of the recorded transactions, oldest first
    pub fn entries(&self) -> Vec<PendingTransaction> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TransactionSink for InMemoryTransactionLog {
    fn record(&self, tx: PendingTransaction) {
        debug!("recorded pending tx {}: {}", tx.hash, tx.summary);
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(tx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(hash: &str) -> PendingTransaction {
        PendingTransaction {
            hash: hash.to_string(),
            summary: format!("summary for {}", hash),
        }
    }

    #[test]
    fn record_appends_in_order() {
        let log = InMemoryTransactionLog::new();
        log.record(tx("0x01"));
        log.record(tx("0x02"));

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].hash, "0x01");
        assert_eq!(entries[1].hash, "0x02");
    }

    #[test]
    fn entries_returns_a_clone() {
        let log = InMemoryTransactionLog::new();
        log.record(tx("0x01"));

        let mut entries = log.entries();
        entries.clear();
        assert_eq!(log.len(), 1);
    }
}
