//! Currency conversion resolvers.
//!
//! - [`NbpResolver`] - NBP API, `XXX -> PLN` only
//! - [`ExchangeRateHostResolver`] - exchangerate.host, any pair
//! - [`StaticRateTable`] - fixed ratios, no network
//! - [`FixedRate`] - one ratio for every pair

mod exchange_host;
mod fixed;
mod nbp;
mod static_table;

use rust_decimal::Decimal;

use crate::errors::ExchangeError;

pub use exchange_host::{ExchangeRateHostResolver, EXCHANGE_HOST_ID};
pub use fixed::{FixedRate, FIXED_RATE_ID};
pub use nbp::{NbpResolver, NBP_ID};
pub use static_table::{StaticRateTable, STATIC_TABLE_ID};

/// Convert a rate reported as JSON float into a decimal ratio.
///
/// Zero, negative and non-finite values are rejected.
pub(crate) fn decimal_rate(rate: f64) -> Result<Decimal, ExchangeError> {
    if !rate.is_finite() || rate <= 0.0 {
        return Err(ExchangeError::InvalidRate(rate.to_string()));
    }

    Decimal::try_from(rate).map_err(|e| ExchangeError::InvalidRate(e.to_string()))
}
