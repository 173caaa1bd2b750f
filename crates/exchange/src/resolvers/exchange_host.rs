//! exchangerate.host resolver.
//!
//! General-purpose source: it is asked for every pair and declines when the
//! API does not confirm a rate for exactly the requested base and target.

use std::collections::HashMap;
use std::sync::Arc;

use ratechain_resolution::{Decline, Resolver};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::ExchangeError;
use crate::fetch::JsonFetcher;
use crate::models::CurrencyPair;

use super::decimal_rate;

/// Resolver ID constant
pub const EXCHANGE_HOST_ID: &str = "exchange-rate-host";

/// Response from `/latest`
#[derive(Debug, Deserialize)]
struct LatestResponse {
    success: bool,
    #[serde(default)]
    base: Option<String>,
    #[serde(default)]
    rates: HashMap<String, f64>,
}

/// Extract the rate for `pair` from a `/latest` response.
///
/// Rejects responses that report failure, miss the target currency, or were
/// computed for a different base than requested.
pub(crate) fn parse_latest_rate(
    body: &str,
    pair: &CurrencyPair,
) -> Result<Decimal, ExchangeError> {
    let response: LatestResponse = serde_json::from_str(body)?;

    if !response.success {
        return Err(ExchangeError::Rejected {
            message: "API request failed".to_string(),
        });
    }

    if response.base.as_deref() != Some(pair.from.as_ref()) {
        return Err(ExchangeError::Rejected {
            message: format!(
                "expected base {}, got {}",
                pair.from,
                response.base.as_deref().unwrap_or("none")
            ),
        });
    }

    let rate = response
        .rates
        .get(pair.to.as_ref())
        .ok_or_else(|| ExchangeError::RateNotFound {
            pair: pair.to_string(),
        })?;

    decimal_rate(*rate)
}

/// Resolves any pair through the exchangerate.host `latest` endpoint.
pub struct ExchangeRateHostResolver {
    fetcher: Arc<dyn JsonFetcher>,
    base_url: String,
}

impl ExchangeRateHostResolver {
    pub fn new(fetcher: Arc<dyn JsonFetcher>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }

    fn url(&self, pair: &CurrencyPair) -> String {
        format!(
            "{}/latest?base={}&symbols={}&source=ecb",
            self.base_url.trim_end_matches('/'),
            pair.from,
            pair.to
        )
    }

    fn fetch_rate(&self, pair: &CurrencyPair) -> Result<Decimal, ExchangeError> {
        let body = self.fetcher.fetch(&self.url(pair))?;
        parse_latest_rate(&body, pair)
    }
}

impl Resolver<CurrencyPair, Decimal> for ExchangeRateHostResolver {
    fn id(&self) -> &str {
        EXCHANGE_HOST_ID
    }

    fn try_handle(&self, pair: &CurrencyPair) -> Result<Decimal, Decline> {
        Ok(self.fetch_rate(pair)?)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::fetch::testing::StubFetcher;

    fn pair() -> CurrencyPair {
        CurrencyPair::new("USD", "GBP")
    }

    #[test]
    fn test_resolves_rate() {
        let fetcher = Arc::new(StubFetcher::new().respond(
            "https://host.test/latest",
            r#"{"success": true, "base": "USD", "date": "2024-01-02", "rates": {"GBP": 0.75}}"#,
        ));
        let resolver = ExchangeRateHostResolver::new(fetcher.clone(), "https://host.test");

        assert_eq!(resolver.try_handle(&pair()), Ok(dec!(0.75)));
        assert_eq!(
            fetcher.requests(),
            vec!["https://host.test/latest?base=USD&symbols=GBP&source=ecb"]
        );
    }

    #[test]
    fn test_unsuccessful_response() {
        let result = parse_latest_rate(r#"{"success": false}"#, &pair());
        assert!(matches!(result, Err(ExchangeError::Rejected { .. })));
    }

    #[test]
    fn test_missing_target_rate() {
        let result = parse_latest_rate(
            r#"{"success": true, "base": "USD", "rates": {"EUR": 0.9}}"#,
            &pair(),
        );
        assert!(matches!(result, Err(ExchangeError::RateNotFound { .. })));
    }

    #[test]
    fn test_base_mismatch() {
        let result = parse_latest_rate(
            r#"{"success": true, "base": "EUR", "rates": {"GBP": 0.85}}"#,
            &pair(),
        );
        assert!(matches!(result, Err(ExchangeError::Rejected { .. })));
    }

    #[test]
    fn test_non_positive_rate() {
        let result = parse_latest_rate(
            r#"{"success": true, "base": "USD", "rates": {"GBP": 0.0}}"#,
            &pair(),
        );
        assert!(matches!(result, Err(ExchangeError::InvalidRate(_))));
    }

    #[test]
    fn test_failures_decline_as_unavailable() {
        let resolver = ExchangeRateHostResolver::new(
            Arc::new(StubFetcher::new().fail("https://host.test")),
            "https://host.test",
        );

        let decline = resolver.try_handle(&pair()).unwrap_err();
        assert!(decline.is_transient());
    }
}
