//! Configuration Module
//!
//! Handles loading the shell's cache configuration from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::CacheError;

// == Cache Kind ==
/// Which cache variant the shell drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheKind {
    /// Key-only cache
    Set,
    /// Unbounded key/value cache
    Map,
    /// Capacity-bounded cache with FIFO eviction
    Bounded,
    /// Capacity-bounded cache with LRU eviction
    #[default]
    Lru,
}

impl CacheKind {
    /// Returns true for the variants that take a capacity.
    pub fn is_bounded(self) -> bool {
        matches!(self, CacheKind::Bounded | CacheKind::Lru)
    }
}

impl FromStr for CacheKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "set" => Ok(CacheKind::Set),
            "map" => Ok(CacheKind::Map),
            "bounded" | "fifo" => Ok(CacheKind::Bounded),
            "lru" => Ok(CacheKind::Lru),
            other => Err(CacheError::InvalidConfiguration(format!(
                "unknown cache kind '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for CacheKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CacheKind::Set => "set",
            CacheKind::Map => "map",
            CacheKind::Bounded => "bounded",
            CacheKind::Lru => "lru",
        };
        f.write_str(name)
    }
}

/// Shell configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache variant to build
    pub kind: CacheKind,
    /// Maximum number of entries for bounded variants
    pub capacity: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_KIND` - One of `set`, `map`, `bounded`, `lru` (default: lru)
    /// - `CACHE_CAPACITY` - Capacity of bounded caches (default: 1000)
    pub fn from_env() -> Self {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Builds a Config from an arbitrary variable lookup.
    ///
    /// Missing or unparseable values fall back to the defaults. A capacity of
    /// 0 is kept as-is and rejected when the cache is built.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            kind: lookup("CACHE_KIND")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.kind),
            capacity: lookup("CACHE_CAPACITY")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.capacity),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            kind: CacheKind::default(),
            capacity: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.kind, CacheKind::Lru);
        assert_eq!(config.capacity, 1000);
    }

    #[test]
    fn test_config_from_vars_defaults() {
        let config = Config::from_vars(lookup(&[]));
        assert_eq!(config.kind, CacheKind::Lru);
        assert_eq!(config.capacity, 1000);
    }

    #[test]
    fn test_config_from_vars_overrides() {
        let config = Config::from_vars(lookup(&[
            ("CACHE_KIND", "Bounded"),
            ("CACHE_CAPACITY", "16"),
        ]));
        assert_eq!(config.kind, CacheKind::Bounded);
        assert_eq!(config.capacity, 16);
    }

    #[test]
    fn test_config_invalid_values_fall_back() {
        let config = Config::from_vars(lookup(&[
            ("CACHE_KIND", "ring"),
            ("CACHE_CAPACITY", "-3"),
        ]));
        assert_eq!(config.kind, CacheKind::Lru);
        assert_eq!(config.capacity, 1000);
    }

    #[test]
    fn test_config_zero_capacity_is_kept() {
        let config = Config::from_vars(lookup(&[("CACHE_CAPACITY", "0")]));
        assert_eq!(config.capacity, 0);
    }

    #[test]
    fn test_cache_kind_parse_and_display() {
        for kind in [
            CacheKind::Set,
            CacheKind::Map,
            CacheKind::Bounded,
            CacheKind::Lru,
        ] {
            assert_eq!(kind.to_string().parse::<CacheKind>().unwrap(), kind);
        }
        assert_eq!("fifo".parse::<CacheKind>().unwrap(), CacheKind::Bounded);
        assert!(matches!(
            "ring".parse::<CacheKind>(),
            Err(CacheError::InvalidConfiguration(_))
        ));
        assert!(CacheKind::Lru.is_bounded());
        assert!(!CacheKind::Set.is_bounded());
    }
}
