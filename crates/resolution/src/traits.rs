//! Resolver trait for the resolution chain.

use std::sync::Arc;

use crate::errors::Decline;

/// Individual resolver in a [`ResolutionChain`](crate::ResolutionChain).
///
/// A resolver decides from the request alone whether it can handle it. It
/// never knows its position in the chain or which resolvers surround it.
///
/// Failures inside an attempt must be absorbed here and reported as
/// [`Decline::Unavailable`], so the chain can move on to the next resolver.
pub trait Resolver<Req, V>: Send + Sync {
    /// Name used in logs and traces (e.g., "nbp", "static-table").
    fn id(&self) -> &str;

    /// Attempt to resolve the request.
    ///
    /// # Returns
    /// * `Ok(value)` - Resolved, the chain stops here
    /// * `Err(decline)` - This resolver cannot satisfy the request (try next)
    fn try_handle(&self, request: &Req) -> Result<V, Decline>;
}

impl<Req, V, T> Resolver<Req, V> for Arc<T>
where
    T: Resolver<Req, V> + ?Sized,
{
    fn id(&self) -> &str {
        (**self).id()
    }

    fn try_handle(&self, request: &Req) -> Result<V, Decline> {
        (**self).try_handle(request)
    }
}

impl<Req, V, T> Resolver<Req, V> for Box<T>
where
    T: Resolver<Req, V> + ?Sized,
{
    fn id(&self) -> &str {
        (**self).id()
    }

    fn try_handle(&self, request: &Req) -> Result<V, Decline> {
        (**self).try_handle(request)
    }
}
