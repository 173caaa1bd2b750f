//! Error types for the resolution chain.
//!
//! - [`Decline`]: a single resolver's refusal, recovered by the chain
//! - [`Unhandled`]: the chain's terminal failure after every resolver declined

use thiserror::Error;

/// Why a resolver declined a request.
///
/// The chain treats every variant the same way (try the next resolver).
/// The variant only shows up in a [`ResolutionTrace`](crate::ResolutionTrace),
/// so a caller can tell "not my kind of request" apart from "I tried and the
/// source was down".
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum Decline {
    /// The request is outside what this resolver handles.
    #[error("unsupported")]
    Unsupported,

    /// The resolver could handle the request but its attempt failed
    /// (lookup unreachable, timeout, malformed data).
    #[error("unavailable: {message}")]
    Unavailable {
        /// Description of the underlying failure
        message: String,
    },
}

impl Decline {
    /// Build an [`Unavailable`](Self::Unavailable) decline from any displayable failure.
    pub fn unavailable(cause: impl std::fmt::Display) -> Self {
        Self::Unavailable {
            message: cause.to_string(),
        }
    }

    /// Returns true if the decline came from a failed attempt rather than
    /// a capability mismatch.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }
}

/// No resolver in the chain could satisfy the request.
///
/// Carries the original request so the caller can report what was not
/// resolved. This is an expected outcome, not a fatal error.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
#[error("No resolver could handle request: {request}")]
pub struct Unhandled<R> {
    /// The request that exhausted the chain
    pub request: R,
}

impl<R> Unhandled<R> {
    pub fn new(request: R) -> Self {
        Self { request }
    }

    /// Consume the error and return the original request.
    pub fn into_request(self) -> R {
        self.request
    }
}
