//! Request DTOs for the cache shell
//!
//! Each stdin line is one JSON object tagged by its `op` field.

use serde::Deserialize;

use crate::error::{CacheError, Result};

/// A single shell request.
///
/// ```text
/// {"op":"insert","key":"a","value":"1"}
/// {"op":"get","key":"a"}
/// {"op":"clear"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum Request {
    /// Test for the presence of a key
    Check { key: String },
    /// Insert or overwrite a key; `value` is omitted for key-only caches
    Insert {
        key: String,
        #[serde(default)]
        value: Option<String>,
    },
    /// Read a key
    Get { key: String },
    /// Delete a key
    Remove { key: String },
    /// Drop every entry
    Clear,
    /// List every entry
    Iter,
    /// Report the entry count
    Len,
}

impl Request {
    /// Parses and validates one request line.
    pub fn parse(line: &str) -> Result<Self> {
        let request: Request = serde_json::from_str(line)
            .map_err(|e| CacheError::InvalidRequest(e.to_string()))?;
        request.validate()?;
        Ok(request)
    }

    /// The key the request targets, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Request::Check { key }
            | Request::Insert { key, .. }
            | Request::Get { key }
            | Request::Remove { key } => Some(key.as_str()),
            Request::Clear | Request::Iter | Request::Len => None,
        }
    }

    /// Rejects requests with an empty key.
    pub fn validate(&self) -> Result<()> {
        match self.key() {
            Some("") => Err(CacheError::InvalidRequest("Key cannot be empty".to_string())),
            _ => Ok(()),
        }
    }
}
