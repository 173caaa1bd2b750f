use std::time::Duration;

use ratechain_exchange::config::{
    DEFAULT_EXCHANGE_HOST_URL, DEFAULT_NBP_URL, DEFAULT_REQUEST_TIMEOUT,
};
use ratechain_exchange::{CachePolicy, ExchangeConfig};

pub struct Config {
    pub exchange: ExchangeConfig,
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let nbp_url = lookup("RATECHAIN_NBP_URL").unwrap_or_else(|| DEFAULT_NBP_URL.into());
        let exchange_host_url = lookup("RATECHAIN_EXCHANGE_HOST_URL")
            .unwrap_or_else(|| DEFAULT_EXCHANGE_HOST_URL.into());
        let request_timeout = lookup("RATECHAIN_REQUEST_TIMEOUT_MS")
            .and_then(|ms| ms.trim().parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        let cache_ttl_secs =
            lookup("RATECHAIN_CACHE_TTL_SECS").and_then(|secs| secs.trim().parse::<u64>().ok());
        let log_format = lookup("RATECHAIN_LOG_FORMAT").unwrap_or_else(|| "text".into());

        Self {
            exchange: ExchangeConfig {
                nbp_url,
                exchange_host_url,
                request_timeout,
                cache: CachePolicy::from_ttl_secs(cache_ttl_secs),
            },
            log_format,
        }
    }
}
