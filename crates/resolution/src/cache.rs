//! Resolver-local result cache.
//!
//! [`CachedResolver`] wraps another resolver and remembers the values it
//! produced, keyed by request. The cache belongs to the wrapped resolver
//! only; the chain itself stays stateless.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::{Duration, Instant};

use log::{debug, warn};

use crate::errors::Decline;
use crate::traits::Resolver;

#[derive(Debug)]
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

/// Caches successful values of an inner resolver.
///
/// - Hits are served without calling the inner resolver.
/// - Declines are never cached, so a source that was down is retried on the
///   next request.
/// - With a time-to-live, entries older than the TTL are refreshed through
///   the inner resolver, and every insert drops the expired entries of other
///   requests.
///
/// Reads take a shared lock and inserts an exclusive one, so concurrent
/// resolutions through the same chain are safe.
pub struct CachedResolver<R, Req, V> {
    inner: R,
    ttl: Option<Duration>,
    entries: RwLock<HashMap<Req, CacheEntry<V>>>,
}

impl<R, Req, V> CachedResolver<R, Req, V>
where
    Req: Eq + Hash,
{
    /// Cache entries forever.
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            ttl: None,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Cache entries for at most `ttl`.
    pub fn with_ttl(inner: R, ttl: Duration) -> Self {
        Self {
            inner,
            ttl: Some(ttl),
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Lock the cache for reading, recovering from poison if necessary.
    ///
    /// A poisoned cache can at worst hold a stale entry, which is better
    /// than panicking inside a resolution.
    fn read_entries(&self) -> RwLockReadGuard<'_, HashMap<Req, CacheEntry<V>>> {
        self.entries.read().unwrap_or_else(|poisoned| {
            warn!("Resolver cache lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, HashMap<Req, CacheEntry<V>>> {
        self.entries.write().unwrap_or_else(|poisoned| {
            warn!("Resolver cache lock was poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn is_fresh(&self, entry: &CacheEntry<V>) -> bool {
        match self.ttl {
            Some(ttl) => entry.stored_at.elapsed() < ttl,
            None => true,
        }
    }

    /// Number of cached entries, including expired ones not yet refreshed.
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        self.write_entries().clear();
    }
}

impl<R, Req, V> Resolver<Req, V> for CachedResolver<R, Req, V>
where
    R: Resolver<Req, V>,
    Req: Eq + Hash + Clone + Send + Sync,
    V: Clone + Send + Sync,
{
    fn id(&self) -> &str {
        self.inner.id()
    }

    fn try_handle(&self, request: &Req) -> Result<V, Decline> {
        if let Some(entry) = self.read_entries().get(request) {
            if self.is_fresh(entry) {
                debug!("Cache hit in resolver '{}'", self.inner.id());
                return Ok(entry.value.clone());
            }
        }

        let value = self.inner.try_handle(request)?;

        let mut entries = self.write_entries();
        if self.ttl.is_some() {
            entries.retain(|_, entry| self.is_fresh(entry));
        }
        entries.insert(
            request.clone(),
            CacheEntry {
                value: value.clone(),
                stored_at: Instant::now(),
            },
        );

        Ok(value)
    }
}
