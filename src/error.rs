//! Error types for JSON-RPC client operations

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Result type for JSON-RPC client operations
pub type RpcClientResult<T> = Result<T, RpcClientError>;

/// Outcome taxonomy of a single JSON-RPC call attempt.
///
/// Every failure is surfaced immediately to the caller; nothing is retried
/// or suppressed internally. The variants are mutually exclusive: callers
/// branch on the variant to decide whether a failure is transport-layer
/// (potentially retryable on their side) or semantically final.
#[derive(Error, Debug)]
pub enum RpcClientError {
    /// The server answered with an HTTP status other than 200.
    ///
    /// The body is never inspected for these responses.
    #[error("transport failure: HTTP status {status_code} {}", .reason_phrase.as_deref().unwrap_or(""))]
    Transport {
        status_code: u16,
        reason_phrase: Option<String>,
    },

    /// The response body is not valid JSON text.
    #[error("decode failure: {0}")]
    Decode(#[from] serde_json::Error),

    /// The decoded body lacks the required JSON-RPC 2.0 shape.
    #[error("protocol validation failure: {0}")]
    Protocol(String),

    /// The server explicitly reported an application-level error.
    #[error("RPC error (code {}): {}", .0.code, .0.message)]
    Rpc(RpcErrorObject),

    /// The HTTP collaborator itself failed (connection refused, TLS,
    /// timeout). Propagated unmodified.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl RpcClientError {
    /// Whether the failure happened below the JSON-RPC protocol layer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Http(_))
    }

    /// Whether the server explicitly reported an `error` member.
    pub fn is_rpc(&self) -> bool {
        matches!(self, Self::Rpc(_))
    }

    /// HTTP status code for transport failures.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Server-reported error code, if this is an RPC error.
    pub fn error_code(&self) -> Option<i64> {
        match self {
            Self::Rpc(error) => Some(error.code),
            _ => None,
        }
    }
}

/// Server-reported JSON-RPC 2.0 error object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcErrorObject {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl RpcErrorObject {
    pub fn new(code: i64, message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            code,
            message: message.into(),
            data,
        }
    }

    /// Builds the error object from the decoded `error` member.
    ///
    /// Reads are lenient: shape validation only guarantees that `code` and
    /// `message` are present, so unexpected value types are coerced rather
    /// than rejected.
    pub fn from_value(error: &Value) -> Self {
        let message = match error.get("message") {
            Some(Value::String(message)) => message.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        };

        Self {
            code: error.get("code").and_then(Value::as_i64).unwrap_or(0),
            message,
            data: error.get("data").cloned(),
        }
    }
}

impl fmt::Display for RpcErrorObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_object_from_value() {
        let error = RpcErrorObject::from_value(&json!({
            "code": -32000,
            "message": "Server error"
        }));

        assert_eq!(error.code, -32000);
        assert_eq!(error.message, "Server error");
        assert!(error.data.is_none());
    }

    #[test]
    fn test_error_object_with_data() {
        let error = RpcErrorObject::from_value(&json!({
            "code": -32602,
            "message": "Invalid params",
            "data": {"expected": "array"}
        }));

        assert_eq!(error.code, -32602);
        assert_eq!(error.data, Some(json!({"expected": "array"})));
    }

    #[test]
    fn test_transport_failure_predicates() {
        let error = RpcClientError::Transport {
            status_code: 500,
            reason_phrase: Some("Internal Server Error".to_string()),
        };

        assert!(error.is_transport());
        assert!(!error.is_rpc());
        assert_eq!(error.status_code(), Some(500));
        assert_eq!(error.error_code(), None);
    }

    #[test]
    fn test_rpc_error_predicates() {
        let error = RpcClientError::Rpc(RpcErrorObject::new(-32601, "Method not found", None));

        assert!(error.is_rpc());
        assert!(!error.is_transport());
        assert_eq!(error.error_code(), Some(-32601));
    }

    #[test]
    fn test_error_display() {
        let error = RpcClientError::Transport {
            status_code: 503,
            reason_phrase: Some("Service Unavailable".to_string()),
        };
        assert_eq!(
            error.to_string(),
            "transport failure: HTTP status 503 Service Unavailable"
        );

        let error = RpcClientError::Rpc(RpcErrorObject::new(-32000, "Server error", None));
        assert_eq!(error.to_string(), "RPC error (code -32000): Server error");
    }
}
