//! Error types for currency conversion lookups.

use ratechain_resolution::Decline;
use thiserror::Error;

/// Errors that can occur while looking up a conversion ratio.
///
/// None of these reach the caller of a chain: each resolver converts its
/// failure into a [`Decline::Unavailable`] and the chain tries the next one.
#[derive(Error, Debug)]
pub enum ExchangeError {
    /// A network error occurred while calling a rate source.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The rate source answered with a non-success HTTP status.
    #[error("HTTP {status} from {url}")]
    Status {
        /// HTTP status code
        status: u16,
        /// The requested URL
        url: String,
    },

    /// The response body was not the expected JSON.
    #[error("Invalid response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    /// The rate source reported that the request failed.
    #[error("Source rejected request: {message}")]
    Rejected {
        /// Description of the rejection
        message: String,
    },

    /// The response did not contain a rate for the pair.
    #[error("Rate not found for {pair}")]
    RateNotFound {
        /// The pair that was looked up
        pair: String,
    },

    /// The rate could not be represented or is not positive.
    #[error("Invalid rate: {0}")]
    InvalidRate(String),

    /// A currency pair string could not be parsed.
    #[error("Invalid currency pair: {0}")]
    InvalidPair(String),
}

impl From<ExchangeError> for Decline {
    fn from(error: ExchangeError) -> Self {
        Decline::unavailable(error)
    }
}
