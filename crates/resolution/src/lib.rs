//! Ratechain Resolution Crate
//!
//! Generic request-forwarding chain with fallback resolution.
//!
//! # Overview
//!
//! A [`ResolutionChain`] owns an ordered list of [`Resolver`]s. Resolving a
//! request tries each resolver in turn:
//!
//! ```text
//! request
//!    |
//!    v
//! +-----------+  decline   +-----------+  decline         +-----------+
//! | resolver 0| ---------> | resolver 1| ---------> ... -> | resolver n|
//! +-----------+            +-----------+                  +-----------+
//!    | value                  | value                        | decline
//!    v                        v                              v
//!  Ok(value)               Ok(value)               Err(Unhandled { request })
//! ```
//!
//! - The first resolver that returns a value wins; later ones are not called.
//! - A resolver whose attempt fails reports [`Decline::Unavailable`] and the
//!   chain moves on, exactly as for [`Decline::Unsupported`].
//! - Adding or reordering resolvers only touches the code that assembles the
//!   chain.
//!
//! # Core Types
//!
//! - [`Resolver`] - One strategy for satisfying a request
//! - [`ResolutionChain`] - Ordered resolver container with `append` / `resolve`
//! - [`SharedResolutionChain`] - Thread-safe chain with snapshot reads
//! - [`CachedResolver`] - Resolver-local cache decorator
//! - [`ResolutionTrace`] - Per-attempt diagnostics
//! - [`Decline`], [`Unhandled`] - Error types

mod cache;
mod chain;
pub mod errors;
mod shared;
mod trace;
mod traits;

pub use cache::CachedResolver;
pub use chain::{ResolutionChain, ResolverRef};
pub use errors::{Decline, Unhandled};
pub use shared::SharedResolutionChain;
pub use trace::{AttemptOutcome, ResolutionAttempt, ResolutionTrace};
pub use traits::Resolver;
