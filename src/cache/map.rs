//! Map Cache Module
//!
//! Unbounded key/value cache over an insertion-ordered hash map.

use std::hash::Hash;

use hashlink::linked_hash_map::{self, LinkedHashMap};

use crate::cache::Cache;

// == Map Cache ==
/// Key/value cache with no size limit.
///
/// Entries keep their insertion order: the front of the store is the
/// oldest entry, the back the newest. Overwriting a key replaces its value
/// without moving it.
#[derive(Debug)]
pub struct MapCache<K, V> {
    /// Ordered key-value storage
    pub(crate) store: LinkedHashMap<K, V>,
}

impl<K: Hash + Eq, V> MapCache<K, V> {
    // == Constructor ==
    /// Creates an empty map cache.
    pub fn new() -> Self {
        Self::with_store(LinkedHashMap::new())
    }

    /// Creates a map cache that takes ownership of an existing store.
    ///
    /// The store's current order is kept as the entry order.
    pub fn with_store(store: LinkedHashMap<K, V>) -> Self {
        Self { store }
    }

    /// Consumes the cache, returning its backing store.
    pub fn into_store(self) -> LinkedHashMap<K, V> {
        self.store
    }

    // == Peek ==
    /// Reads a value without any side effect.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    // == Replace ==
    /// Stores `value` under `key` and returns the previous value.
    ///
    /// New keys go to the back of the order; existing keys stay where they are.
    pub(crate) fn replace(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.store.get_mut(&key) {
            return Some(std::mem::replace(slot, value));
        }
        self.store.insert(key, value);
        None
    }

    // == Pop Oldest ==
    /// Removes the entry at the front of the order.
    pub(crate) fn pop_oldest(&mut self) -> Option<(K, V)> {
        self.store.pop_front()
    }
}

impl<K: Hash + Eq, V> Default for MapCache<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq + Clone, V: Clone> Clone for MapCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<K: Hash + Eq, V> From<LinkedHashMap<K, V>> for MapCache<K, V> {
    fn from(store: LinkedHashMap<K, V>) -> Self {
        Self::with_store(store)
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for MapCache<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut cache = Self::new();
        cache.extend(iter);
        cache
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for MapCache<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.replace(key, value);
        }
    }
}

impl<K: Hash + Eq, V> Cache<K> for MapCache<K, V> {
    type Value = V;
    type Output = V;
    type Iter<'a> = linked_hash_map::Iter<'a, K, V>
    where
        Self: 'a;

    fn check(&self, key: &K) -> bool {
        self.store.contains_key(key)
    }

    fn insert(&mut self, key: K, value: V) {
        self.replace(key, value);
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        self.store.get(key)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        self.store.remove(key)
    }

    fn clear(&mut self) {
        self.store.clear();
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.store.iter()
    }

    fn len(&self) -> usize {
        self.store.len()
    }
}

impl<'a, K: Hash + Eq, V> IntoIterator for &'a MapCache<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = linked_hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.iter()
    }
}
