//! Ratechain Exchange Crate
//!
//! Currency conversion built on the resolution chain: a conversion ratio is
//! looked up from several sources in order, falling back to the next source
//! whenever one cannot answer.
//!
//! # Default chain
//!
//! ```text
//! CurrencyPair
//!      |
//!      v
//! +---------------------+  XXX/PLN only, live NBP mid rate
//! | NbpResolver         |
//! +---------------------+
//!      | decline
//!      v
//! +---------------------+  any pair, live exchangerate.host rate
//! | ExchangeRateHost    |
//! +---------------------+
//!      | decline
//!      v
//! +---------------------+  EUR/GBP/USD/PLN/USH fixed ratios
//! | StaticRateTable     |
//! +---------------------+
//!      | decline
//!      v
//!  Unhandled(pair)
//! ```
//!
//! Network failures, timeouts and bad payloads never reach the caller; the
//! failing resolver declines and the next one is tried.

mod chain;
pub mod config;
pub mod errors;
mod fetch;
mod models;
pub mod resolvers;

pub use chain::{default_chain, http_chain, offline_chain, RateChain};
pub use config::{CachePolicy, ExchangeConfig};
pub use errors::ExchangeError;
pub use fetch::{HttpFetcher, JsonFetcher};
pub use models::{Currency, CurrencyPair};
pub use resolvers::{ExchangeRateHostResolver, FixedRate, NbpResolver, StaticRateTable};
