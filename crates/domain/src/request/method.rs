//! Verbs used by the marketplace API

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four verbs the marketplace endpoints are exposed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    /// Reads.
    #[default]
    Get,
    /// Creates, and actions such as checkout or reorder.
    Post,
    /// Updates and state changes.
    Put,
    /// Removals.
    Delete,
}

impl HttpMethod {
    /// Wire name of the verb.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_matches_wire_name() {
        assert_eq!(HttpMethod::Put.to_string(), "PUT");
        assert_eq!(
            serde_json::to_string(&HttpMethod::Delete).expect("serializes"),
            "\"DELETE\""
        );
    }

    #[test]
    fn test_default_is_get() {
        assert_eq!(HttpMethod::default(), HttpMethod::Get);
    }
}
