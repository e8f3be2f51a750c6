//! Shell Module
//!
//! Line-oriented JSON front end over a single cache.
//!
//! # Operations
//! - `check` - Test whether a key is present
//! - `insert` - Store a key, with a value for map caches
//! - `get` - Read a key
//! - `remove` - Delete a key
//! - `clear` - Drop every entry
//! - `iter` - List entries in store order
//! - `len` - Entry count and capacity

mod runner;
mod session;

pub use runner::run;
pub use session::Session;
