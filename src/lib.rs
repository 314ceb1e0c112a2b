//! # JSON-RPC 2.0 HTTP Client
//!
//! A client-side implementation of the JSON-RPC 2.0 specification over an
//! HTTP transport. Applications use it to invoke remote procedures
//! (requests expecting a result) or fire-and-forget notifications against a
//! JSON-RPC 2.0 compliant server; protocol-level and transport-level
//! failures are translated into a typed error taxonomy the caller can
//! branch on.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use jsonrpc_http_client::RpcClientBuilder;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut client = RpcClientBuilder::new()
//!         .endpoint("http://localhost:8080/rpc".parse()?)
//!         .build();
//!
//!     client.set_header("Authorization", Some("Bearer token".into()));
//!
//!     let items = client.send_request("list_items", None).await?;
//!     println!("items: {items}");
//!
//!     client.send_notification("log_event", None).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error taxonomy
//!
//! Every call ends in exactly one of five outcomes: success, a transport
//! failure (HTTP status other than 200), a decode failure (body is not
//! JSON), a protocol validation failure (body is not a well-formed JSON-RPC
//! 2.0 response), or a server-reported RPC error. See
//! [`error::RpcClientError`]. Nothing is retried or suppressed internally;
//! retry and timeout policy belong to the transport and the caller.

pub mod client;
pub mod error;
pub mod headers;
pub mod request;
pub mod response;
pub mod transport;

// Re-export main types
pub use client::{RpcClient, RpcClientBuilder};
pub use error::{RpcClientError, RpcClientResult, RpcErrorObject};
pub use headers::HeaderStore;
pub use request::{JsonRpcNotification, JsonRpcRequest, JsonRpcVersion, REQUEST_ID};
pub use transport::{BoxedTransport, HttpResponse, HttpTransport, ReqwestTransport};

/// JSON-RPC 2.0 version constant
pub const JSONRPC_VERSION: &str = "2.0";
