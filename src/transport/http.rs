//! Default reqwest-backed HTTP transport

use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use tracing::debug;
use url::Url;

use crate::error::RpcClientResult;
use crate::transport::{HttpResponse, HttpTransport};

/// HTTP transport built on [`reqwest::Client`].
///
/// Connection pooling, timeouts, and TLS configuration belong to the
/// underlying client; pass a preconfigured one via
/// [`ReqwestTransport::with_client`] when the defaults don't fit.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport from an existing, preconfigured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(
        &self,
        url: &Url,
        headers: &HashMap<String, String>,
        body: String,
    ) -> RpcClientResult<HttpResponse> {
        let mut request = self.client.post(url.clone()).body(body);
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request.send().await?;

        let status = response.status();
        let reason_phrase = status.canonical_reason().map(str::to_owned);
        debug!(status = status.as_u16(), url = %url, "received HTTP response");

        let body = response.text().await?;

        Ok(HttpResponse::new(status.as_u16(), reason_phrase, body))
    }
}
