//! Resolution chain - composite that tries resolvers in order.
//!
//! The chain is the main entry point for resolution. It owns an explicit,
//! ordered sequence of resolvers and tries them one after another until one
//! succeeds.

use std::fmt;
use std::sync::Arc;

use log::{debug, info, warn};

use crate::errors::{Decline, Unhandled};
use crate::trace::ResolutionTrace;
use crate::traits::Resolver;

/// Shared handle to a resolver stored in a chain.
pub type ResolverRef<Req, V> = Arc<dyn Resolver<Req, V>>;

/// Ordered sequence of resolvers tried until one succeeds.
///
/// The chain stops at the first resolver that returns a value; resolvers
/// after it are never invoked. A resolver that declines (for any
/// [`Decline`] reason) passes the request on to the next one. When every
/// resolver has declined, [`resolve`](Self::resolve) fails with
/// [`Unhandled`] carrying the original request.
///
/// # Example
///
/// ```ignore
/// let mut chain = ResolutionChain::new();
/// chain
///     .append(StaticRateTable::default())
///     .append(FixedRate::new(dec!(1)));
///
/// let ratio = chain.resolve(&CurrencyPair::new("EUR", "USD"))?;
/// ```
pub struct ResolutionChain<Req, V> {
    resolvers: Vec<ResolverRef<Req, V>>,
}

impl<Req, V> ResolutionChain<Req, V> {
    /// Create an empty chain. Resolving against it always fails with `Unhandled`.
    pub fn new() -> Self {
        Self {
            resolvers: Vec::new(),
        }
    }

    pub(crate) fn from_resolvers(resolvers: Vec<ResolverRef<Req, V>>) -> Self {
        Self { resolvers }
    }

    /// Add a resolver to the end of the chain.
    ///
    /// Resolvers already in the chain keep their position, so requests they
    /// handle resolve exactly as before.
    pub fn append<R>(&mut self, resolver: R) -> &mut Self
    where
        R: Resolver<Req, V> + 'static,
    {
        self.resolvers.push(Arc::new(resolver));
        self
    }

    /// Add an already shared resolver to the end of the chain.
    pub fn append_shared(&mut self, resolver: ResolverRef<Req, V>) -> &mut Self {
        self.resolvers.push(resolver);
        self
    }

    /// Builder form of [`append`](Self::append).
    pub fn with<R>(mut self, resolver: R) -> Self
    where
        R: Resolver<Req, V> + 'static,
    {
        self.append(resolver);
        self
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Resolver ids in traversal order.
    pub fn resolver_ids(&self) -> Vec<&str> {
        self.resolvers.iter().map(|r| r.id()).collect()
    }

    pub(crate) fn resolvers(&self) -> &[ResolverRef<Req, V>] {
        &self.resolvers
    }
}

impl<Req, V> ResolutionChain<Req, V>
where
    Req: Clone + fmt::Debug,
{
    /// Resolve a request against the chain.
    ///
    /// # Returns
    /// * `Ok(value)` - Value from the first resolver that handled the request
    /// * `Err(Unhandled)` - Every resolver declined, or the chain is empty
    pub fn resolve(&self, request: &Req) -> Result<V, Unhandled<Req>> {
        traverse(&self.resolvers, request, None)
    }

    /// Resolve a request and record every attempt.
    ///
    /// Traversal is identical to [`resolve`](Self::resolve); the trace shows
    /// which resolvers declined (and why) and which one resolved.
    pub fn resolve_traced(&self, request: &Req) -> (Result<V, Unhandled<Req>>, ResolutionTrace) {
        let mut trace = ResolutionTrace::new();
        let outcome = traverse(&self.resolvers, request, Some(&mut trace));
        (outcome, trace)
    }
}

/// Walk `resolvers` in order: `Trying(0)` .. `Trying(n-1)`, ending in the
/// first success or in exhaustion.
pub(crate) fn traverse<Req, V>(
    resolvers: &[ResolverRef<Req, V>],
    request: &Req,
    mut trace: Option<&mut ResolutionTrace>,
) -> Result<V, Unhandled<Req>>
where
    Req: Clone + fmt::Debug,
{
    for (index, resolver) in resolvers.iter().enumerate() {
        let id = resolver.id();
        debug!("Trying resolver '{}' (#{}) for {:?}", id, index, request);

        match resolver.try_handle(request) {
            Ok(value) => {
                info!("Resolved {:?} with resolver '{}'", request, id);
                if let Some(trace) = trace.as_deref_mut() {
                    trace.record_resolved(index, id);
                }
                return Ok(value);
            }
            Err(decline) => {
                match &decline {
                    Decline::Unsupported => {
                        debug!("Resolver '{}' does not support {:?}, trying next", id, request);
                    }
                    Decline::Unavailable { message } => {
                        warn!(
                            "Resolver '{}' failed for {:?}: {}, trying next",
                            id, request, message
                        );
                    }
                }
                if let Some(trace) = trace.as_deref_mut() {
                    trace.record_decline(index, id, decline);
                }
            }
        }
    }

    debug!(
        "All {} resolvers declined {:?}",
        resolvers.len(),
        request
    );
    Err(Unhandled::new(request.clone()))
}

impl<Req, V> Default for ResolutionChain<Req, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Req, V> Clone for ResolutionChain<Req, V> {
    fn clone(&self) -> Self {
        Self {
            resolvers: self.resolvers.clone(),
        }
    }
}

impl<Req, V> fmt::Debug for ResolutionChain<Req, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResolutionChain")
            .field("resolvers", &self.resolver_ids())
            .finish()
    }
}
