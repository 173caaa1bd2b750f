//! Configuration for the exchange-rate resolvers.

use std::time::Duration;

/// Default base URL of the NBP (National Bank of Poland) API.
pub const DEFAULT_NBP_URL: &str = "https://api.nbp.pl";

/// Default base URL of the exchangerate.host API.
pub const DEFAULT_EXCHANGE_HOST_URL: &str = "https://api.exchangerate.host";

/// Default HTTP request timeout
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// How network-backed resolvers cache the rates they fetched.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CachePolicy {
    /// Every resolution goes to the network.
    #[default]
    Disabled,
    /// Keep fetched rates for the lifetime of the chain.
    Forever,
    /// Keep fetched rates for at most this long.
    Ttl(Duration),
}

impl CachePolicy {
    /// Policy from a TTL in seconds: `None` disables caching, `Some(0)`
    /// never expires.
    pub fn from_ttl_secs(secs: Option<u64>) -> Self {
        match secs {
            None => Self::Disabled,
            Some(0) => Self::Forever,
            Some(secs) => Self::Ttl(Duration::from_secs(secs)),
        }
    }
}

/// Settings for assembling the default conversion chain.
#[derive(Clone, Debug)]
pub struct ExchangeConfig {
    pub nbp_url: String,
    pub exchange_host_url: String,
    /// Per-request timeout. A timed-out lookup declines like any other failure.
    pub request_timeout: Duration,
    pub cache: CachePolicy,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            nbp_url: DEFAULT_NBP_URL.to_string(),
            exchange_host_url: DEFAULT_EXCHANGE_HOST_URL.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            cache: CachePolicy::Disabled,
        }
    }
}
