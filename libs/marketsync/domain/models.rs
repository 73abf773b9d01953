//! Shared domain models

/// Outcome of one marketplace sync run.
#[derive(Debug, Clone, Default)]
pub struct SyncReport {
    /// Offers listed on the marketplace at the start of the run.
    pub offers_listed: usize,
    /// Stock entries uploaded (matched records plus zero-fill).
    pub stock_entries: usize,
    /// Stock entries with a non-zero count.
    pub stock_in_stock: usize,
    /// Price entries uploaded.
    pub price_entries: usize,
    /// Batches sent to the stock endpoint.
    pub stock_batches: usize,
    /// Batches sent to the price endpoint.
    pub price_batches: usize,
}
