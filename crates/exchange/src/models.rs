//! Currency pair model.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::errors::ExchangeError;

/// Currency code (ISO 4217 style) - mostly static
pub type Currency = Cow<'static, str>;

/// Request to convert from one currency into another.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CurrencyPair {
    pub from: Currency,
    pub to: Currency,
}

impl CurrencyPair {
    pub fn new(from: impl Into<Currency>, to: impl Into<Currency>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// True when both sides are the same currency.
    pub fn is_identity(&self) -> bool {
        self.from == self.to
    }

    pub fn inverse(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}

fn parse_code(code: &str, input: &str) -> Result<Currency, ExchangeError> {
    let code = code.trim();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ExchangeError::InvalidPair(input.to_string()));
    }
    Ok(Cow::Owned(code.to_ascii_uppercase()))
}

/// Accepts `EUR/USD`, `eur-usd` and `EURUSD`.
impl FromStr for CurrencyPair {
    type Err = ExchangeError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let (from, to) = match trimmed.split_once(|c: char| c == '/' || c == '-') {
            Some(parts) => parts,
            None if trimmed.len() == 6 && trimmed.is_char_boundary(3) => trimmed.split_at(3),
            None => return Err(ExchangeError::InvalidPair(input.to_string())),
        };

        Ok(Self {
            from: parse_code(from, input)?,
            to: parse_code(to, input)?,
        })
    }
}
