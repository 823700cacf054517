//! Request/response handling layer.
//!
//! - [`RequestHandler`]: builds and dispatches requests, normalises responses
//! - [`HeaderSet`]: header derivation with explicit precedence
//! - [`Transport`]: the injectable network seam
//! - [`ReqwestTransport`]: default transport (requires the `http` feature)

pub mod handler;
pub mod headers;
pub mod options;
#[cfg(feature = "http")]
pub mod reqwest_transport;
pub mod transport;

pub use handler::{ApiKey, RequestHandler};
pub use headers::{HeaderSet, HeaderSource};
pub use options::{Duplex, RequestOptions, TransportOptions};
#[cfg(feature = "http")]
pub use reqwest_transport::ReqwestTransport;
pub use transport::{
    Method, RequestBody, Transport, TransportError, TransportRequest, TransportResponse,
};
