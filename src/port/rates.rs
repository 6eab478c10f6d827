use crate::domain::LedgerError;
use async_trait::async_trait;

/// RateLookup provides access to the external currency-conversion service
///
/// This is the one slow dependency of the system: the dispatch facade calls
/// it between `ConversionStarted` and the converted `Deposit`. The caller
/// owns the timeout; implementations just perform a single lookup.
#[async_trait]
pub trait RateLookup: Send + Sync {
    /// Convert `amount` in currency `from` to currency `to`
    ///
    /// Returns the converted total, not the unit rate.
    async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, LedgerError>;
}
