//! Header derivation with explicit precedence.
//!
//! Headers come from three places: values derived from the request options and
//! body, explicit overrides supplied by the caller, and client defaults
//! (authorization, user agent). Each entry is recorded with its
//! [`HeaderSource`]; [`HeaderSet::resolve`] keeps, per case-insensitive name,
//! the entry with the highest source (latest wins on a tie).

use crate::http::options::RequestOptions;
use crate::http::transport::RequestBody;

pub const IDEMPOTENCY_KEY: &str = "Idempotency-Key";
pub const SUBACCOUNT_ID: &str = "X-Subaccount-Id";
pub const CONTENT_TYPE: &str = "Content-Type";
pub const AUTHORIZATION: &str = "Authorization";
pub const USER_AGENT: &str = "User-Agent";

pub const APPLICATION_JSON: &str = "application/json";

/// Origin of a header entry, in increasing precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeaderSource {
    /// Derived from options and body.
    Derived,
    /// Caller-supplied override.
    Override,
    /// Client-wide default; cannot be replaced per call.
    ClientDefault,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct HeaderEntry {
    name: String,
    value: String,
    source: HeaderSource,
}

/// Ordered collection of header entries, resolved once before sending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    entries: Vec<HeaderEntry>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Headers derived from per-call options and the body.
    ///
    /// Order: idempotency key, JSON content type (structured bodies only),
    /// subaccount id, then caller overrides.
    pub fn derive(options: &RequestOptions, body: Option<&RequestBody>) -> Self {
        let mut set = Self::new();

        if let Some(key) = &options.idempotency_key {
            set.push(IDEMPOTENCY_KEY, key, HeaderSource::Derived);
        }
        if let Some(RequestBody::Json(_)) = body {
            set.push(CONTENT_TYPE, APPLICATION_JSON, HeaderSource::Derived);
        }
        if let Some(subaccount_id) = &options.subaccount_id {
            set.push(SUBACCOUNT_ID, subaccount_id, HeaderSource::Derived);
        }
        for (name, value) in &options.headers {
            set.push(name, value, HeaderSource::Override);
        }

        set
    }

    pub fn push(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        source: HeaderSource,
    ) {
        self.entries.push(HeaderEntry {
            name: name.into(),
            value: value.into(),
            source,
        });
    }

    /// Append client defaults, which outrank everything else.
    pub fn with_client_defaults(mut self, defaults: &[(String, String)]) -> Self {
        for (name, value) in defaults {
            self.push(name, value, HeaderSource::ClientDefault);
        }
        self
    }

    /// Collapse to one value per header name.
    ///
    /// The output keeps the position where a name first appeared and the
    /// spelling of the winning entry.
    pub fn resolve(&self) -> Vec<(String, String)> {
        let mut resolved: Vec<&HeaderEntry> = Vec::new();

        for entry in &self.entries {
            let existing = resolved
                .iter_mut()
                .find(|kept| kept.name.eq_ignore_ascii_case(&entry.name));
            match existing {
                Some(kept) if entry.source >= kept.source => *kept = entry,
                Some(_) => {}
                None => resolved.push(entry),
            }
        }

        resolved
            .into_iter()
            .map(|entry| (entry.name.clone(), entry.value.clone()))
            .collect()
    }
}
