//! Response validation and decoding
//!
//! Pure functions of the raw HTTP response: the same status code and body
//! always yield the same outcome. The checks run in a fixed order — status
//! first, then JSON decode, then JSON-RPC 2.0 shape, then outcome dispatch —
//! and the first failing step is terminal for the call.

use serde_json::{Map, Value};

use crate::error::{RpcClientError, RpcClientResult, RpcErrorObject};
use crate::transport::HttpResponse;

/// The single HTTP status code recognized as success.
pub const SUCCESS_STATUS: u16 = 200;

const INVALID_RESPONSE: &str = "invalid JSON-RPC 2.0 response";

/// Step 1 — transport check.
///
/// Any status other than 200 fails with a transport failure carrying the
/// status code and reason phrase; the body is never parsed. This is the
/// whole of response handling for notifications.
pub fn validate_status(response: &HttpResponse) -> RpcClientResult<()> {
    if response.status_code != SUCCESS_STATUS {
        return Err(RpcClientError::Transport {
            status_code: response.status_code,
            reason_phrase: response.reason_phrase.clone(),
        });
    }
    Ok(())
}

/// Steps 1–4 for requests: status check, JSON decode, shape validation,
/// then either the server-reported error or the `result` value.
pub fn decode_result(response: &HttpResponse) -> RpcClientResult<Value> {
    validate_status(response)?;

    let decoded: Value = serde_json::from_str(&response.body)?;

    let object = decoded
        .as_object()
        .filter(|object| has_valid_shape(object))
        .ok_or_else(|| RpcClientError::Protocol(INVALID_RESPONSE.to_string()))?;

    if let Some(error) = object.get("error") {
        return Err(RpcClientError::Rpc(RpcErrorObject::from_value(error)));
    }

    // Shape validation guarantees `result` is present when `error` is not
    Ok(object.get("result").cloned().unwrap_or(Value::Null))
}

/// A well-formed response carries `jsonrpc`, `id`, and either `result` or an
/// `error` object with both `code` and `message`. There is no partial
/// acceptance.
fn has_valid_shape(object: &Map<String, Value>) -> bool {
    if !object.contains_key("jsonrpc") || !object.contains_key("id") {
        return false;
    }

    if object.contains_key("result") {
        return true;
    }

    match object.get("error").and_then(Value::as_object) {
        Some(error) => error.contains_key("code") && error.contains_key("message"),
        None => false,
    }
}
