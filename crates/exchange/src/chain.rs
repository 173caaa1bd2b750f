//! Assembly of the currency conversion chain.
//!
//! This is the only place that knows the order of the rate sources. Adding,
//! removing or reordering a source means editing these functions, never the
//! resolvers themselves or the code that calls `resolve`.

use std::sync::Arc;

use ratechain_resolution::{CachedResolver, ResolutionChain, Resolver, ResolverRef};
use rust_decimal::Decimal;

use crate::config::{CachePolicy, ExchangeConfig};
use crate::fetch::{HttpFetcher, JsonFetcher};
use crate::models::CurrencyPair;
use crate::resolvers::{ExchangeRateHostResolver, NbpResolver, StaticRateTable};

/// Chain resolving a currency pair to its conversion ratio.
pub type RateChain = ResolutionChain<CurrencyPair, Decimal>;

/// Wrap a network resolver according to the cache policy.
fn with_cache<R>(resolver: R, policy: CachePolicy) -> ResolverRef<CurrencyPair, Decimal>
where
    R: Resolver<CurrencyPair, Decimal> + 'static,
{
    match policy {
        CachePolicy::Disabled => Arc::new(resolver),
        CachePolicy::Forever => {
            Arc::new(CachedResolver::<R, CurrencyPair, Decimal>::new(resolver))
        }
        CachePolicy::Ttl(ttl) => Arc::new(CachedResolver::<R, CurrencyPair, Decimal>::with_ttl(
            resolver, ttl,
        )),
    }
}

/// Default chain: NBP, then exchangerate.host, then the static table.
pub fn default_chain(config: &ExchangeConfig, fetcher: Arc<dyn JsonFetcher>) -> RateChain {
    let mut chain = RateChain::new();
    chain
        .append_shared(with_cache(
            NbpResolver::new(fetcher.clone(), config.nbp_url.as_str()),
            config.cache,
        ))
        .append_shared(with_cache(
            ExchangeRateHostResolver::new(fetcher, config.exchange_host_url.as_str()),
            config.cache,
        ))
        .append(StaticRateTable::default());
    chain
}

/// Default chain over a real HTTP client built from `config`.
pub fn http_chain(config: &ExchangeConfig) -> RateChain {
    let fetcher: Arc<dyn JsonFetcher> = Arc::new(HttpFetcher::new(config.request_timeout));
    default_chain(config, fetcher)
}

/// Chain that never touches the network.
pub fn offline_chain() -> RateChain {
    RateChain::new().with(StaticRateTable::default())
}

#[cfg(test)]
mod tests {
    use ratechain_resolution::{AttemptOutcome, Decline, Unhandled};
    use rust_decimal_macros::dec;

    use super::*;
    use crate::fetch::testing::StubFetcher;
    use crate::resolvers::{FixedRate, EXCHANGE_HOST_ID, NBP_ID, STATIC_TABLE_ID};

    const NBP: &str = "https://nbp.test";
    const HOST: &str = "https://host.test";

    fn config() -> ExchangeConfig {
        ExchangeConfig {
            nbp_url: NBP.to_string(),
            exchange_host_url: HOST.to_string(),
            ..ExchangeConfig::default()
        }
    }

    fn chain_with(fetcher: StubFetcher, config: &ExchangeConfig) -> (RateChain, Arc<StubFetcher>) {
        let fetcher = Arc::new(fetcher);
        (default_chain(config, fetcher.clone()), fetcher)
    }

    #[test]
    fn test_default_order() {
        let (chain, _) = chain_with(StubFetcher::new(), &config());
        assert_eq!(
            chain.resolver_ids(),
            vec![NBP_ID, EXCHANGE_HOST_ID, STATIC_TABLE_ID]
        );
    }

    #[test]
    fn test_nbp_handles_pln_target() {
        let (chain, fetcher) = chain_with(
            StubFetcher::new().respond(NBP, r#"{"rates": [{"mid": 4.25}]}"#),
            &config(),
        );

        let (result, trace) = chain.resolve_traced(&CurrencyPair::new("EUR", "PLN"));

        assert_eq!(result, Ok(dec!(4.25)));
        assert_eq!(trace.resolved_by(), Some(NBP_ID));
        assert_eq!(fetcher.requests().len(), 1);
    }

    #[test]
    fn test_nbp_down_falls_back_to_exchange_host() {
        let (chain, _) = chain_with(
            StubFetcher::new().fail(NBP).respond(
                HOST,
                r#"{"success": true, "base": "EUR", "rates": {"PLN": 4.5}}"#,
            ),
            &config(),
        );

        let (result, trace) = chain.resolve_traced(&CurrencyPair::new("EUR", "PLN"));

        assert_eq!(result, Ok(dec!(4.5)));
        assert!(matches!(
            &trace.attempts[0].outcome,
            AttemptOutcome::Declined(Decline::Unavailable { .. })
        ));
        assert_eq!(trace.resolved_by(), Some(EXCHANGE_HOST_ID));
    }

    #[test]
    fn test_network_down_falls_back_to_static_table() {
        let (chain, _) = chain_with(StubFetcher::new(), &config());

        let (result, trace) = chain.resolve_traced(&CurrencyPair::new("EUR", "GBP"));

        assert_eq!(result, Ok(dec!(0.85)));
        assert_eq!(
            trace.summary(),
            "nbp: DECLINED (unsupported) -> exchange-rate-host: DECLINED (unavailable: HTTP 503 from https://host.test/latest?base=EUR&symbols=GBP&source=ecb) -> static-table: RESOLVED"
        );
    }

    #[test]
    fn test_unknown_currency_is_unhandled() {
        let (chain, _) = chain_with(
            StubFetcher::new().respond(HOST, r#"{"success": true, "base": "USD", "rates": {}}"#),
            &config(),
        );

        let pair = CurrencyPair::new("USD", "AAA");
        assert_eq!(chain.resolve(&pair), Err(Unhandled::new(pair.clone())));
    }

    #[test]
    fn test_cache_avoids_repeat_fetch() {
        let config = ExchangeConfig {
            cache: CachePolicy::Forever,
            ..config()
        };
        let (chain, fetcher) = chain_with(
            StubFetcher::new().respond(NBP, r#"{"rates": [{"mid": 4.25}]}"#),
            &config,
        );
        let pair = CurrencyPair::new("EUR", "PLN");

        assert_eq!(chain.resolve(&pair), Ok(dec!(4.25)));
        assert_eq!(chain.resolve(&pair), Ok(dec!(4.25)));
        assert_eq!(fetcher.requests().len(), 1);
    }

    #[test]
    fn test_offline_chain() {
        let chain = offline_chain();
        assert_eq!(chain.resolver_ids(), vec![STATIC_TABLE_ID]);
        assert_eq!(
            chain.resolve(&CurrencyPair::new("USD", "USD")),
            Ok(dec!(1))
        );
    }

    #[test]
    fn test_static_table_then_fixed_fallback() {
        let chain = RateChain::new()
            .with(StaticRateTable::empty().with_rate("EUR", "USD", dec!(1.1)))
            .with(FixedRate::new(dec!(1.0)));

        assert_eq!(chain.resolve(&CurrencyPair::new("EUR", "USD")), Ok(dec!(1.1)));
        assert_eq!(chain.resolve(&CurrencyPair::new("EUR", "GBP")), Ok(dec!(1.0)));
    }
}
