use crate::models::transaction::PendingTransaction;

/// Store for submitted transactions, owned by the UI shell.
///
/// Recording happens only after a submission succeeded; a failed submission
/// must leave the sink untouched.
pub trait TransactionSink: Send + Sync {
    fn record(&self, tx: PendingTransaction);
}
