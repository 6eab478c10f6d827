use crate::{
    domain::{ConversionError, LedgerError},
    port::RateLookup,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

/// Response shape of a Frankfurter-style rate API.
///
/// When `amount` is passed as a query parameter the service returns the
/// converted total under `rates[to]`, not the unit rate. Anything else is
/// rejected as malformed rather than read blindly.
#[derive(Debug, Deserialize)]
struct RateResponse {
    rates: HashMap<String, f64>,
}

/// Rate lookup against an HTTP currency API
pub struct HttpRateLookup {
    http: Client,
    base_url: String,
}

impl HttpRateLookup {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl RateLookup for HttpRateLookup {
    async fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64, LedgerError> {
        let url = format!(
            "{}/latest?amount={}&from={}&to={}",
            self.base_url, amount, from, to
        );

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| LedgerError::Conversion(ConversionError::Unavailable(e.to_string())))?;

        if !response.status().is_success() {
            return Err(LedgerError::Conversion(ConversionError::Unavailable(
                format!("rate service returned {}", response.status()),
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| LedgerError::Conversion(ConversionError::Unavailable(e.to_string())))?;

        let parsed: RateResponse = serde_json::from_str(&body).map_err(|e| {
            LedgerError::Conversion(ConversionError::MalformedResponse(e.to_string()))
        })?;

        parsed.rates.get(to).copied().ok_or_else(|| {
            LedgerError::Conversion(ConversionError::MalformedResponse(format!(
                "no rate for {} in response",
                to
            )))
        })
    }
}
