use crate::{
    domain::{ConversionError, LedgerError},
    port::RateLookup,
};
use async_trait::async_trait;
use std::collections::HashMap;

/// Rate lookup backed by a static table of unit rates into the base
/// currency. Used by tests and offline runs.
pub struct FixedRateLookup {
    /// currency code -> units of base currency per one unit of it
    rates: HashMap<String, f64>,
}

impl FixedRateLookup {
    pub fn new(rates: HashMap<String, f64>) -> Self {
        Self { rates }
    }

    pub fn with_rate(mut self, currency: &str, rate: f64) -> Self {
        self.rates.insert(currency.to_string(), rate);
        self
    }
}

impl Default for FixedRateLookup {
    fn default() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }
}

#[async_trait]
impl RateLookup for FixedRateLookup {
    async fn convert(&self, amount: f64, from: &str, _to: &str) -> Result<f64, LedgerError> {
        let rate = self.rates.get(from).ok_or_else(|| {
            LedgerError::Conversion(ConversionError::UnsupportedCurrency(from.to_string()))
        })?;

        Ok(amount * rate)
    }
}
