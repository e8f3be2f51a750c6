//! Bounded Map Cache Module
//!
//! Map cache with a fixed capacity and first-in-first-out eviction.

use std::hash::Hash;
use std::num::NonZeroUsize;

use hashlink::linked_hash_map::{self, LinkedHashMap};
use tracing::{debug, trace};

use crate::cache::{Cache, MapCache};
use crate::error::{CacheError, Result};

// == Bounded Map Cache ==
/// Map cache holding at most `capacity` entries.
///
/// When a new key arrives and the cache is full, the entry that was
/// inserted earliest is evicted first. Overwriting a key already present
/// never evicts anything and does not move the key in the eviction order.
#[derive(Debug)]
pub struct BoundedMapCache<K, V> {
    inner: MapCache<K, V>,
    capacity: NonZeroUsize,
}

impl<K: Hash + Eq, V> BoundedMapCache<K, V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Fails with `InvalidConfiguration` when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_store(capacity, LinkedHashMap::new())
    }

    /// Creates a cache that takes ownership of an existing store.
    ///
    /// The store's order becomes the eviction order, front first. The caller
    /// must ensure the store holds no more than `capacity` entries; this is
    /// not checked.
    pub fn with_store(capacity: usize, store: LinkedHashMap<K, V>) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity).ok_or_else(|| {
            CacheError::InvalidConfiguration("capacity must be greater than 0".to_string())
        })?;

        trace!(
            capacity = capacity.get(),
            seeded = store.len(),
            "bounded cache created"
        );

        Ok(Self {
            inner: MapCache::with_store(store),
            capacity,
        })
    }

    /// Consumes the cache, returning its backing store.
    pub fn into_store(self) -> LinkedHashMap<K, V> {
        self.inner.into_store()
    }

    // == Capacity ==
    /// Maximum number of entries the cache holds.
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Returns true when the next insert of a new key will evict.
    pub fn is_full(&self) -> bool {
        self.inner.len() >= self.capacity.get()
    }

    // == Peek ==
    /// Reads a value without touching the eviction order.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.inner.peek(key)
    }

    // == Evict Oldest ==
    /// Removes and returns the entry that is next in line for eviction.
    pub fn evict_oldest(&mut self) -> Option<(K, V)> {
        self.inner.pop_oldest()
    }

    // == Promote ==
    /// Moves `key` to the newest end of the eviction order.
    pub(crate) fn promote(&mut self, key: &K) -> Option<&V> {
        let (key, value) = self.inner.store.remove_entry(key)?;
        self.inner.store.insert(key, value);
        self.inner.store.back().map(|(_, value)| value)
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Clone for BoundedMapCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            capacity: self.capacity,
        }
    }
}

impl<K: Hash + Eq, V> Cache<K> for BoundedMapCache<K, V> {
    type Value = V;
    type Output = V;
    type Iter<'a> = linked_hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn check(&self, key: &K) -> bool {
        self.inner.check(key)
    }

    // == Insert ==
    /// Inserts or overwrites `key`.
    ///
    /// At most one entry is evicted, and only when `key` is new and the
    /// cache is full.
    fn insert(&mut self, key: K, value: V) {
        if !self.inner.check(&key) && self.is_full() && self.evict_oldest().is_some() {
            debug!(capacity = self.capacity.get(), "evicted oldest entry");
        }
        self.inner.replace(key, value);
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        self.inner.get(key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.inner.remove(key)
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.inner.iter()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<'a, K: Hash + Eq, V> IntoIterator for &'a BoundedMapCache<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = linked_hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
