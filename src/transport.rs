//! Transport seam between the client and the HTTP collaborator
//!
//! The client performs exactly one POST exchange per call and treats the
//! mechanism behind it as opaque. Timeouts, cancellation, and retries are
//! the transport's responsibility, not the client's.

use async_trait::async_trait;
use std::collections::HashMap;
use url::Url;

use crate::error::RpcClientResult;

pub mod http;

pub use http::ReqwestTransport;

/// Raw HTTP response surface consumed by the response validator.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status_code: u16,
    pub reason_phrase: Option<String>,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status_code: u16, reason_phrase: Option<String>, body: String) -> Self {
        Self {
            status_code,
            reason_phrase,
            body,
        }
    }
}

/// The external HTTP collaborator.
///
/// Implementations perform a single POST and hand back the raw status,
/// reason phrase, and body. A failure of the exchange itself (connection
/// refused, TLS, timeout) propagates to the caller unmodified.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn post(
        &self,
        url: &Url,
        headers: &HashMap<String, String>,
        body: String,
    ) -> RpcClientResult<HttpResponse>;
}

/// Type alias for a boxed transport
pub type BoxedTransport = Box<dyn HttpTransport>;
