//! Main JSON-RPC client implementation

use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use crate::error::RpcClientResult;
use crate::headers::HeaderStore;
use crate::request::{JsonRpcNotification, JsonRpcRequest};
use crate::response;
use crate::transport::{BoxedTransport, ReqwestTransport};

/// JSON-RPC 2.0 client over HTTP.
///
/// One logical operation per call: build the envelope, perform a single
/// POST through the transport, validate and decode the response. The client
/// spawns no concurrent work of its own; the only suspension point is the
/// transport exchange.
pub struct RpcClient {
    endpoint: Url,
    transport: BoxedTransport,
    headers: HeaderStore,
}

impl RpcClient {
    /// Create a client talking to `endpoint` through the given transport.
    pub fn new(endpoint: Url, transport: BoxedTransport) -> Self {
        Self {
            endpoint,
            transport,
            headers: HeaderStore::new(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Set or remove (`None`) a header used by subsequent calls. Never
    /// fails.
    ///
    /// Each call snapshots the header set when it starts; callers sharing
    /// the client behind their own lock and requiring strict header
    /// consistency across concurrent calls must serialize their
    /// `set_header`/call sequences themselves.
    pub fn set_header(&mut self, name: impl Into<String>, value: Option<String>) {
        self.headers.set(name, value);
    }

    /// Invoke `method` and return the server's `result` value.
    ///
    /// Fails with [`RpcClientError::Transport`] on a non-200 status,
    /// [`RpcClientError::Decode`] on a malformed body,
    /// [`RpcClientError::Protocol`] when the body is not a well-formed
    /// JSON-RPC 2.0 response, or [`RpcClientError::Rpc`] when the server
    /// reports an error.
    ///
    /// [`RpcClientError::Transport`]: crate::error::RpcClientError::Transport
    /// [`RpcClientError::Decode`]: crate::error::RpcClientError::Decode
    /// [`RpcClientError::Protocol`]: crate::error::RpcClientError::Protocol
    /// [`RpcClientError::Rpc`]: crate::error::RpcClientError::Rpc
    pub async fn send_request(
        &self,
        method: &str,
        params: Option<Map<String, Value>>,
    ) -> RpcClientResult<Value> {
        let request = JsonRpcRequest::new(method, params);
        let body = serde_json::to_string(&request)?;

        debug!(method, "sending JSON-RPC request");

        let headers = self.headers.snapshot();
        let response = self.transport.post(&self.endpoint, &headers, body).await?;

        response::decode_result(&response)
    }

    /// Fire-and-forget invocation of `method`; no response body is read.
    ///
    /// Success is defined solely by the HTTP status: anything other than
    /// 200 fails with a transport failure.
    pub async fn send_notification(
        &self,
        method: &str,
        params: Option<Map<String, Value>>,
    ) -> RpcClientResult<()> {
        let notification = JsonRpcNotification::new(method, params);
        let body = serde_json::to_string(&notification)?;

        debug!(method, "sending JSON-RPC notification");

        let headers = self.headers.snapshot();
        let response = self.transport.post(&self.endpoint, &headers, body).await?;

        response::validate_status(&response)
    }
}

/// Builder for [`RpcClient`]
pub struct RpcClientBuilder {
    endpoint: Option<Url>,
    transport: Option<BoxedTransport>,
    headers: HeaderStore,
}

impl RpcClientBuilder {
    pub fn new() -> Self {
        Self {
            endpoint: None,
            transport: None,
            headers: HeaderStore::new(),
        }
    }

    /// Set the server endpoint
    pub fn endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Set a custom transport (defaults to [`ReqwestTransport`])
    pub fn with_transport(mut self, transport: BoxedTransport) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Seed a header before the first call
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.set(name, Some(value.into()));
        self
    }

    /// Build the client
    pub fn build(self) -> RpcClient {
        let endpoint = self
            .endpoint
            .expect("Endpoint must be set before building client");
        let transport = self
            .transport
            .unwrap_or_else(|| Box::new(ReqwestTransport::new()));

        RpcClient {
            endpoint,
            transport,
            headers: self.headers,
        }
    }
}

impl Default for RpcClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
