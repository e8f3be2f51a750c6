//! LRU Cache Module
//!
//! Bounded map cache whose reads refresh an entry's recency.

use std::hash::Hash;

use hashlink::linked_hash_map::{self, LinkedHashMap};
use tracing::trace;

use crate::cache::{BoundedMapCache, Cache};
use crate::error::Result;

// == LRU Bounded Map Cache ==
/// Bounded map cache evicting the least recently used entry.
///
/// Every successful `get` moves the key to the newest end of the eviction
/// order. Inserting behaves exactly like [`BoundedMapCache`]: overwriting an
/// existing key does NOT refresh its recency, only reads do.
#[derive(Debug)]
pub struct LruBoundedMapCache<K, V> {
    inner: BoundedMapCache<K, V>,
}

impl<K: Hash + Eq, V> LruBoundedMapCache<K, V> {
    // == Constructor ==
    /// Creates an empty LRU cache. Fails when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        BoundedMapCache::new(capacity).map(|inner| Self { inner })
    }

    /// Creates an LRU cache over an existing store, front = least recent.
    ///
    /// As with [`BoundedMapCache::with_store`], the store must not exceed
    /// `capacity`.
    pub fn with_store(capacity: usize, store: LinkedHashMap<K, V>) -> Result<Self> {
        BoundedMapCache::with_store(capacity, store).map(|inner| Self { inner })
    }

    pub fn into_store(self) -> LinkedHashMap<K, V> {
        self.inner.into_store()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    // == Peek ==
    /// Reads a value without refreshing its recency.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.inner.peek(key)
    }

    /// Removes and returns the least recently used entry.
    pub fn evict_oldest(&mut self) -> Option<(K, V)> {
        self.inner.evict_oldest()
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Clone for LruBoundedMapCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<K: Hash + Eq, V> Cache<K> for LruBoundedMapCache<K, V> {
    type Value = V;
    type Output = V;
    type Iter<'a> = linked_hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn check(&self, key: &K) -> bool {
        self.inner.check(key)
    }

    fn insert(&mut self, key: K, value: V) {
        self.inner.insert(key, value);
    }

    // == Get ==
    /// Retrieves a value and marks `key` as most recently used.
    fn get(&mut self, key: &K) -> Option<&V> {
        let value = self.inner.promote(key);
        if value.is_some() {
            trace!("promoted entry to most recently used");
        }
        value
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

impl<'a, K: Hash + Eq, V> IntoIterator for &'a LruBoundedMapCache<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = linked_hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
