//! HTTP DTOs for shortlink endpoints.

use serde::{Deserialize, Serialize};

/// Query string shared by both conversions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShortLinkParams {
    #[serde(default)]
    pub key: Option<String>,
}

impl ShortLinkParams {
    /// The key, unless missing or empty.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref().filter(|k| !k.is_empty())
    }

    /// The key as a row id.
    pub fn id(&self) -> Option<u64> {
        self.key().and_then(|k| k.trim().parse().ok())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortLinkResult<T> {
    pub result: T,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(key: Option<&str>) -> ShortLinkParams {
        ShortLinkParams {
            key: key.map(str::to_string),
        }
    }

    #[test]
    fn empty_key_counts_as_missing() {
        assert_eq!(params(Some("")).key(), None);
        assert_eq!(params(None).key(), None);
    }

    #[test]
    fn id_requires_non_negative_integer() {
        assert_eq!(params(Some("123456")).id(), Some(123_456));
        assert_eq!(params(Some("-4")).id(), None);
        assert_eq!(params(Some("fC6")).id(), None);
    }

    #[test]
    fn results_serialize_under_result_key() {
        let encoded = serde_json::to_string(&ShortLinkResult { result: "fC6" }).unwrap();
        assert_eq!(encoded, r#"{"result":"fC6"}"#);
        let decoded = serde_json::to_string(&ShortLinkResult { result: 123_456u64 }).unwrap();
        assert_eq!(decoded, r#"{"result":123456}"#);
    }
}
