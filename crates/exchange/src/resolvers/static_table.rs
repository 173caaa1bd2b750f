//! Static rate table resolver.
//!
//! Serves fixed ratios without touching the network. Used as the last
//! resolver of the default chain so common pairs still resolve when every
//! live source is down.

use std::collections::HashMap;

use log::debug;
use ratechain_resolution::{Decline, Resolver};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::{Currency, CurrencyPair};

/// Resolver ID constant
pub const STATIC_TABLE_ID: &str = "static-table";

/// Built-in ratios: (from, to, rate).
const DEFAULT_RATES: &[(&str, &str, Decimal)] = &[
    ("EUR", "EUR", dec!(1)),
    ("EUR", "GBP", dec!(0.85)),
    ("EUR", "USD", dec!(1.17)),
    ("EUR", "PLN", dec!(4.59)),
    ("EUR", "USH", dec!(4135.0725)),
    ("GBP", "EUR", dec!(1.18)),
    ("GBP", "GBP", dec!(1)),
    ("GBP", "USD", dec!(1.38)),
    ("GBP", "PLN", dec!(5.41)),
    ("GBP", "USH", dec!(4879.68)),
    ("USD", "EUR", dec!(0.85)),
    ("USD", "GBP", dec!(0.72)),
    ("USD", "USD", dec!(1)),
    ("USD", "PLN", dec!(3.91)),
    ("USD", "USH", dec!(3534.25)),
    ("PLN", "EUR", dec!(0.22)),
    ("PLN", "GBP", dec!(0.18)),
    ("PLN", "USD", dec!(0.26)),
    ("PLN", "PLN", dec!(1)),
    ("PLN", "USH", dec!(906.32)),
    ("USH", "EUR", dec!(0.00024)),
    ("USH", "GBP", dec!(0.0002)),
    ("USH", "USD", dec!(0.00028)),
    ("USH", "PLN", dec!(0.0010948)),
    ("USH", "USH", dec!(1)),
];

/// Resolves pairs from a fixed table of ratios.
///
/// `StaticRateTable::default()` covers every combination of EUR, GBP, USD,
/// PLN and USH. Pairs outside the table are declined as unsupported.
#[derive(Clone, Debug)]
pub struct StaticRateTable {
    rates: HashMap<CurrencyPair, Decimal>,
}

impl StaticRateTable {
    /// Table without any rates.
    pub fn empty() -> Self {
        Self {
            rates: HashMap::new(),
        }
    }

    /// Add or replace the ratio for `from -> to`.
    pub fn with_rate(
        mut self,
        from: impl Into<Currency>,
        to: impl Into<Currency>,
        rate: Decimal,
    ) -> Self {
        self.rates.insert(CurrencyPair::new(from, to), rate);
        self
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn get(&self, pair: &CurrencyPair) -> Option<Decimal> {
        self.rates.get(pair).copied()
    }
}

impl Default for StaticRateTable {
    fn default() -> Self {
        DEFAULT_RATES
            .iter()
            .fold(Self::empty(), |table, (from, to, rate)| {
                table.with_rate(*from, *to, *rate)
            })
    }
}

impl Resolver<CurrencyPair, Decimal> for StaticRateTable {
    fn id(&self) -> &str {
        STATIC_TABLE_ID
    }

    fn try_handle(&self, pair: &CurrencyPair) -> Result<Decimal, Decline> {
        let rate = self.get(pair).ok_or(Decline::Unsupported)?;
        debug!("Static rate for {}: {}", pair, rate);
        Ok(rate)
    }
}
