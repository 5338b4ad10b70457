/// A submitted transaction registered for UI display.
///
/// The aggregation layer only ever writes these entries; reading them back
/// is the shell's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransaction {
    pub hash: String,
    /// Human-readable action summary, e.g. `Claim CASH from dai_pool`
    pub summary: String,
}
