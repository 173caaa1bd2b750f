//! NBP (National Bank of Poland) exchange-rate resolver.
//!
//! The NBP API publishes mid rates against the Polish zloty only, so this
//! resolver handles `XXX -> PLN` and nothing else.

use std::sync::Arc;

use ratechain_resolution::{Decline, Resolver};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::ExchangeError;
use crate::fetch::JsonFetcher;
use crate::models::CurrencyPair;

use super::decimal_rate;

/// Resolver ID constant
pub const NBP_ID: &str = "nbp";

/// The only target currency NBP publishes rates for.
const BASE_CURRENCY: &str = "PLN";

/// Response from `/api/exchangerates/rates/a/{code}`
#[derive(Debug, Deserialize)]
struct NbpResponse {
    rates: Vec<NbpRate>,
}

#[derive(Debug, Deserialize)]
struct NbpRate {
    mid: f64,
}

/// Parse the mid rate out of an NBP table-A response.
pub(crate) fn parse_nbp_rate(body: &str, pair: &CurrencyPair) -> Result<Decimal, ExchangeError> {
    let response: NbpResponse = serde_json::from_str(body)?;

    let rate = response
        .rates
        .first()
        .ok_or_else(|| ExchangeError::RateNotFound {
            pair: pair.to_string(),
        })?;

    decimal_rate(rate.mid)
}

/// Resolves `XXX -> PLN` ratios from the NBP API.
pub struct NbpResolver {
    fetcher: Arc<dyn JsonFetcher>,
    base_url: String,
}

impl NbpResolver {
    pub fn new(fetcher: Arc<dyn JsonFetcher>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }

    /// NBP only quotes foreign currencies in PLN.
    fn supports(pair: &CurrencyPair) -> bool {
        pair.to == BASE_CURRENCY && pair.from != BASE_CURRENCY
    }

    fn url(&self, pair: &CurrencyPair) -> String {
        format!(
            "{}/api/exchangerates/rates/a/{}?format=json",
            self.base_url.trim_end_matches('/'),
            pair.from
        )
    }

    fn fetch_rate(&self, pair: &CurrencyPair) -> Result<Decimal, ExchangeError> {
        let body = self.fetcher.fetch(&self.url(pair))?;
        parse_nbp_rate(&body, pair)
    }
}

impl Resolver<CurrencyPair, Decimal> for NbpResolver {
    fn id(&self) -> &str {
        NBP_ID
    }

    fn try_handle(&self, pair: &CurrencyPair) -> Result<Decimal, Decline> {
        if !Self::supports(pair) {
            return Err(Decline::Unsupported);
        }

        Ok(self.fetch_rate(pair)?)
    }
}
