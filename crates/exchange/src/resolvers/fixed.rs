//! Fixed-rate fallback resolver.

use ratechain_resolution::{Decline, Resolver};
use rust_decimal::Decimal;

use crate::models::CurrencyPair;

/// Resolver ID constant
pub const FIXED_RATE_ID: &str = "fixed-rate";

/// Answers every pair with the same configured ratio.
///
/// Placed last, it guarantees the chain never ends `Unhandled`.
#[derive(Clone, Copy, Debug)]
pub struct FixedRate {
    rate: Decimal,
}

impl FixedRate {
    pub fn new(rate: Decimal) -> Self {
        Self { rate }
    }

    pub fn rate(&self) -> Decimal {
        self.rate
    }
}

impl Resolver<CurrencyPair, Decimal> for FixedRate {
    fn id(&self) -> &str {
        FIXED_RATE_ID
    }

    fn try_handle(&self, _pair: &CurrencyPair) -> Result<Decimal, Decline> {
        Ok(self.rate)
    }
}
