//! Shell Session
//!
//! Owns the configured cache and turns requests into responses.

use tracing::debug;

use crate::cache::{BoundedMapCache, Cache, LruBoundedMapCache, MapCache, SetCache};
use crate::config::{CacheKind, Config};
use crate::error::{CacheError, Result};
use crate::models::{
    CheckResponse, ClearResponse, InsertResponse, IterResponse, LenResponse, LookupResponse,
    Request, Response,
};

/// Values stored by the shell's map caches. `None` is a valid stored value,
/// distinct from a missing key.
type Value = Option<String>;

// == Session ==
/// One cache instance driven by shell requests.
#[derive(Debug)]
pub enum Session {
    Set(SetCache<String>),
    Map(MapCache<String, Value>),
    Bounded(BoundedMapCache<String, Value>),
    Lru(LruBoundedMapCache<String, Value>),
}

impl Session {
    // == Constructor ==
    /// Creates a session around a fresh cache of the given kind.
    ///
    /// `capacity` is ignored for unbounded kinds and must be positive for
    /// bounded ones.
    pub fn new(kind: CacheKind, capacity: usize) -> Result<Self> {
        let session = match kind {
            CacheKind::Set => Session::Set(SetCache::new()),
            CacheKind::Map => Session::Map(MapCache::new()),
            CacheKind::Bounded => Session::Bounded(BoundedMapCache::new(capacity)?),
            CacheKind::Lru => Session::Lru(LruBoundedMapCache::new(capacity)?),
        };
        Ok(session)
    }

    /// Creates a session from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.kind, config.capacity)
    }

    pub fn kind(&self) -> CacheKind {
        match self {
            Session::Set(_) => CacheKind::Set,
            Session::Map(_) => CacheKind::Map,
            Session::Bounded(_) => CacheKind::Bounded,
            Session::Lru(_) => CacheKind::Lru,
        }
    }

    /// Capacity of the underlying cache, `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        match self {
            Session::Set(_) | Session::Map(_) => None,
            Session::Bounded(cache) => Some(cache.capacity()),
            Session::Lru(cache) => Some(cache.capacity()),
        }
    }

    // == Execute ==
    /// Runs one request against the cache.
    ///
    /// Misses are successful lookups with `found: false`; only requests the
    /// cache cannot carry out produce an error.
    pub fn execute(&mut self, request: Request) -> Result<Response> {
        debug!(kind = %self.kind(), ?request, "executing request");

        let capacity = self.capacity();
        match self {
            Session::Set(cache) => execute_set(cache, request),
            Session::Map(cache) => Ok(execute_map(cache, capacity, request)),
            Session::Bounded(cache) => Ok(execute_map(cache, capacity, request)),
            Session::Lru(cache) => Ok(execute_map(cache, capacity, request)),
        }
    }
}

fn lookup(key: String, found: Option<Value>) -> Response {
    Response::Lookup(match found {
        Some(value) => LookupResponse::hit(key, value),
        None => LookupResponse::miss(key),
    })
}

fn execute_set(cache: &mut SetCache<String>, request: Request) -> Result<Response> {
    let response = match request {
        Request::Check { key } => Response::Check(CheckResponse {
            present: cache.check(&key),
            key,
        }),
        Request::Insert {
            key,
            value: Some(_),
        } => {
            return Err(CacheError::UnsupportedOperation(format!(
                "set cache stores keys only, cannot attach a value to '{}'",
                key
            )));
        }
        Request::Insert { key, value: None } => {
            cache.insert(key.clone(), ());
            Response::Insert(InsertResponse::new(key))
        }
        Request::Get { key } => {
            let found = cache.get(&key).cloned().map(Some);
            lookup(key, found)
        }
        Request::Remove { key } => {
            let found = cache.remove(&key).map(Some);
            lookup(key, found)
        }
        Request::Clear => {
            cache.clear();
            Response::Clear(ClearResponse::default())
        }
        Request::Iter => Response::Iter(IterResponse::from_keys(&*cache)),
        Request::Len => Response::Len(LenResponse {
            len: cache.len(),
            capacity: None,
        }),
    };
    Ok(response)
}

fn execute_map<C>(cache: &mut C, capacity: Option<usize>, request: Request) -> Response
where
    C: Cache<String, Value = Value, Output = Value>,
    for<'a> &'a C: IntoIterator<Item = (&'a String, &'a Value)>,
{
    match request {
        Request::Check { key } => Response::Check(CheckResponse {
            present: cache.check(&key),
            key,
        }),
        Request::Insert { key, value } => {
            cache.insert(key.clone(), value);
            Response::Insert(InsertResponse::new(key))
        }
        Request::Get { key } => {
            let found = cache.get(&key).cloned();
            lookup(key, found)
        }
        Request::Remove { key } => {
            let found = cache.remove(&key);
            lookup(key, found)
        }
        Request::Clear => {
            cache.clear();
            Response::Clear(ClearResponse::default())
        }
        Request::Iter => Response::Iter(IterResponse::from_entries(&*cache)),
        Request::Len => Response::Len(LenResponse {
            len: cache.len(),
            capacity,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get(key: &str) -> Request {
        Request::Get {
            key: key.to_string(),
        }
    }

    fn insert(key: &str, value: Option<&str>) -> Request {
        Request::Insert {
            key: key.to_string(),
            value: value.map(str::to_string),
        }
    }

    #[test]
    fn test_session_zero_capacity_rejected() {
        let result = Session::new(CacheKind::Bounded, 0);
        assert!(matches!(result, Err(CacheError::InvalidConfiguration(_))));

        let result = Session::new(CacheKind::Lru, 0);
        assert!(matches!(result, Err(CacheError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_session_unbounded_ignores_capacity() {
        let session = Session::new(CacheKind::Map, 0).unwrap();
        assert_eq!(session.kind(), CacheKind::Map);
        assert_eq!(session.capacity(), None);
    }

    #[test]
    fn test_session_from_config() {
        let config = Config {
            kind: CacheKind::Bounded,
            capacity: 4,
        };
        let session = Session::from_config(&config).unwrap();
        assert_eq!(session.kind(), CacheKind::Bounded);
        assert_eq!(session.capacity(), Some(4));
    }

    #[test]
    fn test_set_session_rejects_values() {
        let mut session = Session::new(CacheKind::Set, 0).unwrap();
        let result = session.execute(insert("a", Some("1")));
        assert!(matches!(result, Err(CacheError::UnsupportedOperation(_))));
    }

    #[test]
    fn test_set_session_get_returns_key() {
        let mut session = Session::new(CacheKind::Set, 0).unwrap();
        session.execute(insert("a", None)).unwrap();

        let response = session.execute(get("a")).unwrap();
        assert_eq!(
            response,
            Response::Lookup(LookupResponse::hit("a", Some("a".to_string())))
        );
    }

    #[test]
    fn test_map_session_stores_empty_value() {
        let mut session = Session::new(CacheKind::Map, 0).unwrap();
        session.execute(insert("a", None)).unwrap();

        assert_eq!(
            session.execute(get("a")).unwrap(),
            Response::Lookup(LookupResponse::hit("a", None))
        );
        assert_eq!(
            session.execute(get("b")).unwrap(),
            Response::Lookup(LookupResponse::miss("b"))
        );
    }

    #[test]
    fn test_lru_session_promotes_on_get() {
        let mut session = Session::new(CacheKind::Lru, 2).unwrap();
        session.execute(insert("a", Some("1"))).unwrap();
        session.execute(insert("b", Some("2"))).unwrap();
        session.execute(get("a")).unwrap();
        session.execute(insert("c", Some("3"))).unwrap();

        let response = session.execute(Request::Iter).unwrap();
        let keys: Vec<String> = match response {
            Response::Iter(iter) => iter.entries.into_iter().map(|e| e.key).collect(),
            other => panic!("unexpected response {:?}", other),
        };
        assert_eq!(keys, vec!["a".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_bounded_session_len_reports_capacity() {
        let mut session = Session::new(CacheKind::Bounded, 3).unwrap();
        session.execute(insert("a", Some("1"))).unwrap();

        assert_eq!(
            session.execute(Request::Len).unwrap(),
            Response::Len(LenResponse {
                len: 1,
                capacity: Some(3),
            })
        );
    }
}
