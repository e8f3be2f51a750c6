//! Set Cache Module
//!
//! Key-only cache backed by a hash set.

use std::collections::{hash_set, HashSet};
use std::hash::Hash;

use crate::cache::Cache;

// == Set Cache ==
/// Cache that only records the presence of keys.
///
/// Inserting ignores the value; `get` and `remove` hand back the key
/// itself when it is present.
#[derive(Debug, Clone)]
pub struct SetCache<K> {
    store: HashSet<K>,
}

impl<K: Hash + Eq> SetCache<K> {
    // == Constructor ==
    /// Creates an empty set cache.
    pub fn new() -> Self {
        Self::with_store(HashSet::new())
    }

    /// Creates a set cache that takes ownership of an existing set.
    pub fn with_store(store: HashSet<K>) -> Self {
        Self { store }
    }

    /// Consumes the cache, returning its backing set.
    pub fn into_store(self) -> HashSet<K> {
        self.store
    }
}

impl<K: Hash + Eq> Default for SetCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq> From<HashSet<K>> for SetCache<K> {
    fn from(store: HashSet<K>) -> Self {
        Self::with_store(store)
    }
}

impl<K: Hash + Eq> FromIterator<K> for SetCache<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::with_store(iter.into_iter().collect())
    }
}

impl<K: Hash + Eq> Cache<K> for SetCache<K> {
    type Value = ();
    type Output = K;
    type Iter<'a> = hash_set::Iter<'a, K>
    where
        Self: 'a;

    fn check(&self, key: &K) -> bool {
        self.store.contains(key)
    }

    fn insert(&mut self, key: K, _value: ()) {
        self.store.insert(key);
    }

    fn get(&mut self, key: &K) -> Option<&K> {
        self.store.get(key)
    }

    fn remove(&mut self, key: &K) -> Option<K> {
        self.store.take(key)
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

impl<'a, K: Hash + Eq> IntoIterator for &'a SetCache<K> {
    type Item = &'a K;
    type IntoIter = hash_set::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.iter()
    }
}
