//! Response specification type
//!
//! Holds the status, headers and raw body of a completed API call, plus
//! helpers for decoding the JSON payload and the server's error detail.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;

/// HTTP 401, reported by the server when the bearer token is missing,
/// invalid or expired.
pub const UNAUTHORIZED: u16 = 401;

/// HTTP 404.
pub const NOT_FOUND: u16 = 404;

/// A completed API call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers, names lowercased.
    pub headers: BTreeMap<String, String>,
    /// Raw response body.
    pub body: Vec<u8>,
    /// Time from send to last body byte.
    pub duration: Duration,
}

impl ApiResponse {
    /// Creates a response.
    #[must_use]
    pub fn new(
        status: u16,
        headers: BTreeMap<String, String>,
        body: Vec<u8>,
        duration: Duration,
    ) -> Self {
        Self {
            status,
            headers,
            body,
            duration,
        }
    }

    /// Creates a response carrying `body` serialized as JSON.
    #[must_use]
    pub fn with_json(status: u16, body: &Value) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());
        Self::new(status, headers, body.to_string().into_bytes(), Duration::ZERO)
    }

    /// Returns true for a 2xx status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Returns true for a 401 status.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        self.status == UNAUTHORIZED
    }

    /// Decodes the body as JSON into `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// Decodes the body as an untyped JSON value; an empty body yields
    /// `Value::Null`.
    ///
    /// # Errors
    ///
    /// Returns an error if a non-empty body is not valid JSON.
    pub fn json_value(&self) -> Result<Value, serde_json::Error> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        serde_json::from_slice(&self.body)
    }

    /// Extracts the human-readable `detail` field of an error body.
    ///
    /// A string detail is returned as-is. A list of validation errors is
    /// flattened into their `msg` fields joined with `"; "`. Bodies without
    /// a usable detail yield `None`.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        let value: Value = serde_json::from_slice(&self.body).ok()?;
        match value.get("detail")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            Value::Null | Value::String(_) => None,
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_success_range() {
        assert!(ApiResponse::with_json(200, &json!({})).is_success());
        assert!(ApiResponse::with_json(204, &Value::Null).is_success());
        assert!(!ApiResponse::with_json(401, &json!({})).is_success());
        assert!(ApiResponse::with_json(401, &json!({})).is_unauthorized());
    }

    #[test]
    fn test_string_detail() {
        let response = ApiResponse::with_json(400, &json!({"detail": "Cart is empty"}));
        assert_eq!(response.detail().as_deref(), Some("Cart is empty"));
    }

    #[test]
    fn test_validation_detail_is_flattened() {
        let response = ApiResponse::with_json(
            422,
            &json!({"detail": [
                {"loc": ["body", "email"], "msg": "field required"},
                {"loc": ["body", "password"], "msg": "too short"}
            ]}),
        );
        assert_eq!(
            response.detail().as_deref(),
            Some("field required; too short")
        );
    }

    #[test]
    fn test_missing_detail() {
        let response = ApiResponse::new(500, BTreeMap::new(), b"oops".to_vec(), Duration::ZERO);
        assert_eq!(response.detail(), None);
        assert!(!response.is_success());
    }

    #[test]
    fn test_empty_body_is_null() {
        let response = ApiResponse::new(204, BTreeMap::new(), Vec::new(), Duration::ZERO);
        assert_eq!(response.json_value().ok(), Some(Value::Null));
    }
}
