//! Cache Contract
//!
//! The capability interface shared by every cache variant.

// == Cache Trait ==
/// Common operations over a cache keyed by `K`.
///
/// Each variant picks its own backing store and fills in the associated
/// types:
/// - `Value` is what `insert` accepts (`()` for key-only caches)
/// - `Output` is what `get` and `remove` hand back (the key itself for
///   key-only caches)
/// - `Iter` walks the entries in whatever order the store provides
///
/// `get` takes `&mut self` because some variants reorder entries on read.
pub trait Cache<K> {
    /// Value supplied on insert.
    type Value;
    /// Value yielded by `get` and `remove`.
    type Output;
    /// Borrowing iterator over the cached entries.
    type Iter<'a>: Iterator
    where
        Self: 'a;

    /// Returns true if `key` is present. Never changes entry order.
    fn check(&self, key: &K) -> bool;

    /// Inserts `key`, overwriting any previous value.
    fn insert(&mut self, key: K, value: Self::Value);

    /// Retrieves the entry for `key`, or `None` on a miss.
    fn get(&mut self, key: &K) -> Option<&Self::Output>;

    /// Removes `key`, returning what was stored for it.
    fn remove(&mut self, key: &K) -> Option<Self::Output>;

    /// Drops every entry.
    fn clear(&mut self);

    /// Iterates over the entries. The cache stays borrowed until the
    /// iterator is dropped, so it cannot be mutated mid-iteration.
    fn iter(&self) -> Self::Iter<'_>;

    /// Number of entries currently held.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
