//! Response DTOs for the cache shell
//!
//! Each request produces exactly one JSON line on stdout.

use serde::Serialize;

/// Response to `check`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResponse {
    /// The key that was checked
    pub key: String,
    /// Whether the key is present
    pub present: bool,
}

/// Response to `insert`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertResponse {
    /// Success message
    pub message: String,
    /// The key that was inserted
    pub key: String,
}

impl InsertResponse {
    /// Creates a new InsertResponse
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            message: format!("Key '{}' inserted successfully", key),
            key,
        }
    }
}

/// Response to `get` and `remove`
///
/// `found` separates a miss from a hit whose stored value is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupResponse {
    /// The requested key
    pub key: String,
    /// Whether the key was present
    pub found: bool,
    /// The stored value (the key itself for key-only caches)
    pub value: Option<String>,
}

impl LookupResponse {
    /// A hit carrying `value`
    pub fn hit(key: impl Into<String>, value: Option<String>) -> Self {
        Self {
            key: key.into(),
            found: true,
            value,
        }
    }

    pub fn miss(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            found: false,
            value: None,
        }
    }
}

/// Response to `clear`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClearResponse {
    pub message: String,
}

impl Default for ClearResponse {
    fn default() -> Self {
        Self {
            message: "Cache cleared".to_string(),
        }
    }
}

/// One entry listed by `iter`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryView {
    pub key: String,
    /// Absent for key-only caches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Response to `iter`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IterResponse {
    /// Entries in store order
    pub entries: Vec<EntryView>,
}

impl IterResponse {
    /// Lists the keys of a key-only cache
    pub fn from_keys<'a>(keys: impl IntoIterator<Item = &'a String>) -> Self {
        let entries = keys
            .into_iter()
            .map(|key| EntryView {
                key: key.clone(),
                value: None,
            })
            .collect();
        Self { entries }
    }

    /// Lists the entries of a key/value cache
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a String, &'a Option<String>)>,
    ) -> Self {
        let entries = entries
            .into_iter()
            .map(|(key, value)| EntryView {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();
        Self { entries }
    }
}

/// Response to `len`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LenResponse {
    /// Current number of entries
    pub len: usize,
    /// Capacity for bounded caches, null otherwise
    pub capacity: Option<usize>,
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Any response the shell can emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Response {
    Check(CheckResponse),
    Insert(InsertResponse),
    Lookup(LookupResponse),
    Clear(ClearResponse),
    Iter(IterResponse),
    Len(LenResponse),
    Error(ErrorResponse),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_response_serialize() {
        let response = Response::Insert(InsertResponse::new("k"));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({"message": "Key 'k' inserted successfully", "key": "k"})
        );
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let hit = serde_json::to_value(LookupResponse::hit("a", Some("1".into()))).unwrap();
        assert_eq!(hit, json!({"key": "a", "found": true, "value": "1"}));

        let miss = serde_json::to_value(LookupResponse::miss("a")).unwrap();
        assert_eq!(miss, json!({"key": "a", "found": false, "value": null}));
    }

    #[test]
    fn test_iter_response_skips_missing_values() {
        let keys = ["x".to_string()];
        let response = IterResponse::from_keys(&keys);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value, json!({"entries": [{"key": "x"}]}));
    }

    #[test]
    fn test_error_response_serialize() {
        let response = Response::Error(ErrorResponse::new("boom"));
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"error":"boom"}"#
        );
    }
}
