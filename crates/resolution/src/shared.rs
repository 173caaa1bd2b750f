//! Thread-safe resolution chain that can grow while it is being used.
//!
//! Resolutions read an immutable snapshot of the resolver sequence, so an
//! `append` running at the same time never changes the order seen by a
//! resolution that has already started.

use std::fmt;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::warn;

use crate::chain::{traverse, ResolutionChain, ResolverRef};
use crate::errors::Unhandled;
use crate::trace::ResolutionTrace;
use crate::traits::Resolver;

type Snapshot<Req, V> = Arc<Vec<ResolverRef<Req, V>>>;

/// Resolution chain shareable across threads, with copy-on-write appends.
///
/// ```ignore
/// let chain = Arc::new(SharedResolutionChain::new());
/// chain.append(StaticRateTable::default());
///
/// let worker = {
///     let chain = chain.clone();
///     std::thread::spawn(move || chain.resolve(&pair))
/// };
/// chain.append(FixedRate::new(dec!(1)));
/// ```
pub struct SharedResolutionChain<Req, V> {
    resolvers: RwLock<Snapshot<Req, V>>,
}

impl<Req, V> SharedResolutionChain<Req, V> {
    pub fn new() -> Self {
        Self {
            resolvers: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Lock for reading, recovering from poison if necessary.
    ///
    /// The guarded value is only ever replaced wholesale, so a poisoned lock
    /// still holds a complete snapshot.
    fn read_lock(&self) -> RwLockReadGuard<'_, Snapshot<Req, V>> {
        self.resolvers.read().unwrap_or_else(|poisoned| {
            warn!("Resolution chain lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, Snapshot<Req, V>> {
        self.resolvers.write().unwrap_or_else(|poisoned| {
            warn!("Resolution chain lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// Current resolver sequence. Holding it keeps that exact order alive
    /// regardless of later appends.
    fn current(&self) -> Snapshot<Req, V> {
        Arc::clone(&self.read_lock())
    }

    /// Add a resolver to the end of the chain.
    ///
    /// Resolutions already in flight keep using the sequence they started with.
    pub fn append<R>(&self, resolver: R)
    where
        R: Resolver<Req, V> + 'static,
    {
        self.append_shared(Arc::new(resolver));
    }

    /// Add an already shared resolver to the end of the chain.
    pub fn append_shared(&self, resolver: ResolverRef<Req, V>) {
        let mut guard = self.write_lock();
        let mut next: Vec<_> = guard.iter().cloned().collect();
        next.push(resolver);
        *guard = Arc::new(next);
    }

    pub fn len(&self) -> usize {
        self.read_lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_lock().is_empty()
    }

    /// Resolver ids in traversal order at the time of the call.
    pub fn resolver_ids(&self) -> Vec<String> {
        self.current().iter().map(|r| r.id().to_string()).collect()
    }

    /// Plain chain holding the current resolver sequence.
    pub fn snapshot(&self) -> ResolutionChain<Req, V> {
        ResolutionChain::from_resolvers(self.current().to_vec())
    }
}

impl<Req, V> SharedResolutionChain<Req, V>
where
    Req: Clone + fmt::Debug,
{
    /// Resolve against the snapshot taken when the call starts.
    ///
    /// The lock is only held while cloning the snapshot pointer; resolvers
    /// run without it.
    pub fn resolve(&self, request: &Req) -> Result<V, Unhandled<Req>> {
        let resolvers = self.current();
        traverse(&resolvers, request, None)
    }

    pub fn resolve_traced(&self, request: &Req) -> (Result<V, Unhandled<Req>>, ResolutionTrace) {
        let resolvers = self.current();
        let mut trace = ResolutionTrace::new();
        let outcome = traverse(&resolvers, request, Some(&mut trace));
        (outcome, trace)
    }
}

impl<Req, V> Default for SharedResolutionChain<Req, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Req, V> From<ResolutionChain<Req, V>> for SharedResolutionChain<Req, V> {
    fn from(chain: ResolutionChain<Req, V>) -> Self {
        Self {
            resolvers: RwLock::new(Arc::new(chain.resolvers().to_vec())),
        }
    }
}

impl<Req, V> fmt::Debug for SharedResolutionChain<Req, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedResolutionChain")
            .field("resolvers", &self.resolver_ids())
            .finish()
    }
}
