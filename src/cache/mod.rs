//! Cache Module
//!
//! Key-only and key/value caches sharing the [`Cache`] contract, with
//! bounded FIFO and LRU eviction for the map variants.

mod bounded;
mod lru;
mod map;
mod set;
mod traits;


// Re-export public types
pub use bounded::BoundedMapCache;
pub use lru::LruBoundedMapCache;
pub use map::MapCache;
pub use set::SetCache;
pub use traits::Cache;
