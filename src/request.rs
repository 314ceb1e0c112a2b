use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fixed identifier carried by every request envelope.
///
/// The client is single-outstanding-call: it never correlates concurrent
/// in-flight requests by id, so a constant is sufficient.
pub const REQUEST_ID: u64 = 1;

/// JSON-RPC protocol version marker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JsonRpcVersion {
    #[default]
    #[serde(rename = "2.0")]
    V2_0,
}

/// A JSON-RPC request expecting a correlated response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub id: u64,
    pub method: String,
    pub params: Map<String, Value>,
}

impl JsonRpcRequest {
    /// Builds a request envelope. `params` defaults to an empty mapping;
    /// the method name is forwarded verbatim without validation.
    pub fn new(method: impl Into<String>, params: Option<Map<String, Value>>) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            id: REQUEST_ID,
            method: method.into(),
            params: params.unwrap_or_default(),
        }
    }
}

/// A JSON-RPC notification (request without an id, fire-and-forget)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcNotification {
    #[serde(rename = "jsonrpc")]
    pub version: JsonRpcVersion,
    pub method: String,
    pub params: Map<String, Value>,
}

impl JsonRpcNotification {
    pub fn new(method: impl Into<String>, params: Option<Map<String, Value>>) -> Self {
        Self {
            version: JsonRpcVersion::V2_0,
            method: method.into(),
            params: params.unwrap_or_default(),
        }
    }
}
