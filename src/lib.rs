//! Mini Cache - In-memory set and map caches
//!
//! Provides key-only and key/value caches behind a common contract, with
//! capacity-bounded FIFO and LRU eviction, plus a JSON-lines shell.

pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod shell;

pub use cache::{BoundedMapCache, Cache, LruBoundedMapCache, MapCache, SetCache};
pub use config::{CacheKind, Config};
pub use error::{CacheError, Result};
pub use shell::Session;
