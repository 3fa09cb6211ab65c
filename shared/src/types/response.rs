//! API response types

use serde::{Deserialize, Serialize};

/// Error body returned to API callers.
///
/// Deliberately a single generic message: internal error distinctions are
/// logged server-side and never echoed to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Generic, caller-facing error message
    pub error: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_wire_format() {
        let body = ErrorResponse::new("invalid credentials");
        let json = serde_json::to_string(&body).unwrap();
        assert_eq!(json, r#"{"error":"invalid credentials"}"#);
    }
}
