//! Per-call request options.

use std::time::Duration;

use serde_json::{Map, Value};

/// Streaming mode requested from the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duplex {
    /// Upload and download may proceed concurrently. Required by some
    /// fetch-style transports before they accept a raw body.
    Half,
}

/// Settings forwarded to the transport without interpretation by the handler.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportOptions {
    /// Streaming mode. Forced to [`Duplex::Half`] for raw bodies.
    pub duplex: Option<Duplex>,
    /// Per-call timeout. The only cancellation mechanism the SDK exposes.
    pub timeout: Option<Duration>,
    /// Opaque transport-specific settings (caching hints and the like).
    pub extra: Map<String, Value>,
}

impl TransportOptions {
    pub fn with_duplex(mut self, duplex: Duplex) -> Self {
        self.duplex = Some(duplex);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Options accepted by every API operation.
///
/// ```rust,ignore
/// let opts = RequestOptions::new()
///     .with_generated_idempotency_key()
///     .with_subaccount("sub_123");
/// client.place_order(&PlaceOrderOptions::by_amount(10.0), Some(&opts)).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Sent as `Idempotency-Key`. Replays with the same key and payload return
    /// the original result; a different payload is rejected.
    pub idempotency_key: Option<String>,
    /// Sent as `X-Subaccount-Id`; scopes the operation to that subaccount.
    pub subaccount_id: Option<String>,
    /// Explicit header overrides, applied after derived headers.
    pub headers: Vec<(String, String)>,
    pub transport: TransportOptions,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_idempotency_key(mut self, key: impl Into<String>) -> Self {
        self.idempotency_key = Some(key.into());
        self
    }

    /// Use a fresh random (UUID v4) idempotency key.
    ///
    /// Keep the returned options around and reuse them to retry safely.
    pub fn with_generated_idempotency_key(self) -> Self {
        self.with_idempotency_key(uuid::Uuid::new_v4().to_string())
    }

    pub fn with_subaccount(mut self, subaccount_id: impl Into<String>) -> Self {
        self.subaccount_id = Some(subaccount_id.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_transport_options(mut self, transport: TransportOptions) -> Self {
        self.transport = transport;
        self
    }
}
