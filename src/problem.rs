//! RFC 7807 problem details returned by the CNaught API on error responses.
//!
//! Every non-2xx response carries a JSON object whose `type` URI identifies the
//! kind of failure. [`ProblemDetails`] keeps the common members and classifies
//! the `type` into a [`ProblemKind`]; members specific to a kind (such as the
//! field-level `errors` map of a validation failure) live on the variant, and
//! anything else the server sends is kept in [`ProblemDetails::extensions`].
//!
//! ```rust,ignore
//! match err.problem().map(|p| &p.kind) {
//!     Some(ProblemKind::InvalidParameters { errors }) => { /* show field errors */ }
//!     Some(kind) if kind.is_retry_safe() => { /* retry with the same key */ }
//!     _ => return Err(err),
//! }
//! ```

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Requested resource does not exist.
pub const NOT_FOUND_PROBLEM_TYPE: &str = "https://api.cnaught.com/v1/errors/not-found";
/// Caller is not allowed to perform the operation.
pub const FORBIDDEN_PROBLEM_TYPE: &str = "https://api.cnaught.com/v1/errors/forbidden";
/// One or more request parameters failed validation.
pub const INVALID_PARAMETERS_PROBLEM_TYPE: &str =
    "https://api.cnaught.com/v1/errors/invalid-parameters";
/// `limit` or `starting_after` was not acceptable.
pub const INVALID_PAGINATION_PROBLEM_TYPE: &str =
    "https://api.cnaught.com/v1/errors/invalid-pagination";
/// The `X-Subaccount-Id` header named an unknown or foreign subaccount.
pub const INVALID_SUBACCOUNT_PROBLEM_TYPE: &str =
    "https://api.cnaught.com/v1/errors/invalid-subaccount";
/// The `Idempotency-Key` header exceeded the allowed length.
pub const IDEMPOTENCY_KEY_TOO_LONG_PROBLEM_TYPE: &str =
    "https://api.cnaught.com/v1/errors/idempotency-key-too-long";
/// A replay under an existing idempotency key carried a different payload.
pub const IDEMPOTENCY_CHANGED_PAYLOAD_PROBLEM_TYPE: &str =
    "https://api.cnaught.com/v1/errors/idempotency-changed-payload";
/// A replay arrived while the original request was still in flight.
pub const IDEMPOTENCY_CONCURRENT_REQUESTS_PROBLEM_TYPE: &str =
    "https://api.cnaught.com/v1/errors/idempotency-concurrent-requests";

/// RFC 7807 default for a missing `type` member.
pub const ABOUT_BLANK: &str = "about:blank";

/// Kind of problem, discriminated by the `type` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProblemKind {
    NotFound,
    Forbidden,
    /// Validation failure with violation messages keyed by field name.
    InvalidParameters {
        errors: BTreeMap<String, Vec<String>>,
    },
    InvalidPagination,
    InvalidSubaccount,
    IdempotencyKeyTooLong,
    IdempotencyChangedPayload,
    IdempotencyConcurrentRequests,
    /// A `type` this SDK version does not recognise (or `about:blank`).
    Unknown,
}

impl ProblemKind {
    /// Classify a `type` URI.
    ///
    /// Matching is on the slug after `/errors/`, so problem types served from
    /// other API hosts (e.g. staging) classify the same way.
    pub fn from_type_uri(type_uri: &str) -> Self {
        let slug = type_uri
            .rsplit_once("/errors/")
            .map(|(_, slug)| slug.trim_end_matches('/'))
            .unwrap_or_default();

        match slug {
            "not-found" => Self::NotFound,
            "forbidden" => Self::Forbidden,
            "invalid-parameters" => Self::InvalidParameters {
                errors: BTreeMap::new(),
            },
            "invalid-pagination" => Self::InvalidPagination,
            "invalid-subaccount" => Self::InvalidSubaccount,
            "idempotency-key-too-long" => Self::IdempotencyKeyTooLong,
            "idempotency-changed-payload" => Self::IdempotencyChangedPayload,
            "idempotency-concurrent-requests" => Self::IdempotencyConcurrentRequests,
            _ => Self::Unknown,
        }
    }

    /// Whether resending the identical request (same idempotency key, same
    /// payload) can succeed.
    ///
    /// Only a concurrent replay qualifies; a changed payload is a caller bug.
    pub fn is_retry_safe(&self) -> bool {
        matches!(self, Self::IdempotencyConcurrentRequests)
    }
}

/// Parsed problem details payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawProblem", into = "RawProblem")]
pub struct ProblemDetails {
    /// The `type` URI as sent by the server.
    pub type_uri: String,
    /// Short human-readable summary.
    pub title: Option<String>,
    /// HTTP status code echoed in the body.
    pub status: Option<u16>,
    /// Human-readable explanation specific to this occurrence.
    pub detail: Option<String>,
    pub instance: Option<String>,
    /// Classified kind, with kind-specific members.
    pub kind: ProblemKind,
    /// Members not covered above.
    pub extensions: Map<String, Value>,
}

impl ProblemDetails {
    /// Field-level validation errors, if this is an invalid-parameters problem.
    pub fn errors(&self) -> Option<&BTreeMap<String, Vec<String>>> {
        match &self.kind {
            ProblemKind::InvalidParameters { errors } => Some(errors),
            _ => None,
        }
    }

    /// Title if present, otherwise the `type` URI.
    pub fn summary(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.type_uri)
    }
}

/// Wire shape of a problem details object.
///
/// Members are read as plain JSON; one with the wrong shape is moved to
/// `extensions` and the typed field is left empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawProblem {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    type_uri: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    detail: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    instance: Option<Value>,
    #[serde(flatten)]
    extensions: Map<String, Value>,
}

/// Decode a member, moving it to `extensions` when it has the wrong shape.
fn take_member<T: DeserializeOwned>(
    name: &str,
    value: Option<Value>,
    extensions: &mut Map<String, Value>,
) -> Option<T> {
    match value {
        None | Some(Value::Null) => None,
        Some(value) => match serde_json::from_value(value.clone()) {
            Ok(decoded) => Some(decoded),
            Err(_) => {
                extensions.insert(name.to_string(), value);
                None
            }
        },
    }
}

impl From<RawProblem> for ProblemDetails {
    fn from(raw: RawProblem) -> Self {
        let RawProblem {
            type_uri,
            title,
            status,
            detail,
            instance,
            mut extensions,
        } = raw;

        let type_uri: String = take_member("type", type_uri, &mut extensions)
            .unwrap_or_else(|| ABOUT_BLANK.to_string());
        let title = take_member("title", title, &mut extensions);
        let status = take_member("status", status, &mut extensions);
        let detail = take_member("detail", detail, &mut extensions);
        let instance = take_member("instance", instance, &mut extensions);

        let kind = match ProblemKind::from_type_uri(&type_uri) {
            ProblemKind::InvalidParameters { .. } => {
                let errors = take_member("errors", extensions.remove("errors"), &mut extensions)
                    .unwrap_or_default();
                ProblemKind::InvalidParameters { errors }
            }
            other => other,
        };

        Self {
            type_uri,
            title,
            status,
            detail,
            instance,
            kind,
            extensions,
        }
    }
}

impl From<ProblemDetails> for RawProblem {
    fn from(problem: ProblemDetails) -> Self {
        let mut extensions = problem.extensions;
        extensions.remove("type");
        if let ProblemKind::InvalidParameters { errors } = problem.kind {
            // An empty map may stand in for a malformed member kept verbatim.
            if !errors.is_empty() || !extensions.contains_key("errors") {
                let errors = errors
                    .into_iter()
                    .map(|(field, messages)| {
                        let messages = messages.into_iter().map(Value::String).collect();
                        (field, Value::Array(messages))
                    })
                    .collect();
                extensions.insert("errors".to_string(), Value::Object(errors));
            }
        }

        Self {
            type_uri: Some(Value::String(problem.type_uri)),
            title: problem.title.map(Value::String),
            status: problem.status.map(Value::from),
            detail: problem.detail.map(Value::String),
            instance: problem.instance.map(Value::String),
            extensions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_has_no_extensions() {
        let json = r#"{
            "type": "https://api.cnaught.com/v1/errors/not-found",
            "title": "Order not found",
            "status": 404
        }"#;
        let problem: ProblemDetails = serde_json::from_str(json).unwrap();
        assert_eq!(problem.kind, ProblemKind::NotFound);
        assert_eq!(problem.status, Some(404));
        assert_eq!(problem.summary(), "Order not found");
        assert!(problem.extensions.is_empty());
        assert!(problem.errors().is_none());
    }

    #[test]
    fn test_invalid_parameters_errors_map() {
        let json = r#"{
            "type": "https://api.cnaught.com/v1/errors/invalid-parameters",
            "title": "Parameters failed to validate",
            "status": 400,
            "errors": {"amount_kg": ["must be positive"]}
        }"#;
        let problem: ProblemDetails = serde_json::from_str(json).unwrap();
        let errors = problem.errors().unwrap();
        assert_eq!(errors["amount_kg"], vec!["must be positive".to_string()]);
        assert!(!problem.extensions.contains_key("errors"));
    }

    #[test]
    fn test_invalid_parameters_without_errors_member() {
        let json = serde_json::json!({"type": INVALID_PARAMETERS_PROBLEM_TYPE, "status": 400});
        let problem: ProblemDetails = serde_json::from_value(json).unwrap();
        assert_eq!(problem.errors().map(BTreeMap::len), Some(0));
    }

    #[test]
    fn test_unknown_type_keeps_extensions() {
        let json = r#"{
            "type": "https://api.cnaught.com/v1/errors/invalid-state",
            "title": "Order is in invalid state",
            "status": 409,
            "allowed_values": ["placed"],
            "current_value": "fulfilled"
        }"#;
        let problem: ProblemDetails = serde_json::from_str(json).unwrap();
        assert_eq!(problem.kind, ProblemKind::Unknown);
        assert_eq!(problem.extensions["current_value"], "fulfilled");
    }

    #[test]
    fn test_missing_type_is_about_blank() {
        let problem: ProblemDetails = serde_json::from_str(r#"{"title": "Oops"}"#).unwrap();
        assert_eq!(problem.type_uri, ABOUT_BLANK);
        assert_eq!(problem.kind, ProblemKind::Unknown);
    }

    #[test]
    fn test_kind_classification_ignores_host() {
        assert_eq!(
            ProblemKind::from_type_uri("https://api-stage.cnaught.com/v1/errors/forbidden"),
            ProblemKind::Forbidden
        );
        assert_eq!(
            ProblemKind::from_type_uri(IDEMPOTENCY_CHANGED_PAYLOAD_PROBLEM_TYPE),
            ProblemKind::IdempotencyChangedPayload
        );
        assert_eq!(ProblemKind::from_type_uri("not-found"), ProblemKind::Unknown);
    }

    #[test]
    fn test_retry_safety() {
        assert!(ProblemKind::IdempotencyConcurrentRequests.is_retry_safe());
        assert!(!ProblemKind::IdempotencyChangedPayload.is_retry_safe());
        assert!(!ProblemKind::NotFound.is_retry_safe());
    }

    #[test]
    fn test_serialize_puts_errors_back() {
        let json = serde_json::json!({
            "type": INVALID_PARAMETERS_PROBLEM_TYPE,
            "status": 400,
            "errors": {"name": ["is required"]}
        });
        let problem: ProblemDetails = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(serde_json::to_value(&problem).unwrap(), json);
    }

    #[test]
    fn test_malformed_errors_member_keeps_kind() {
        let json = serde_json::json!({
            "type": INVALID_PARAMETERS_PROBLEM_TYPE,
            "status": 400,
            "errors": {"amount_kg": "must be positive"}
        });
        let problem: ProblemDetails = serde_json::from_value(json).unwrap();
        assert_eq!(problem.errors().map(BTreeMap::len), Some(0));
        assert_eq!(problem.status, Some(400));
        assert_eq!(problem.extensions["errors"]["amount_kg"], "must be positive");
    }

    #[test]
    fn test_non_numeric_status_moves_to_extensions() {
        let json = serde_json::json!({
            "type": NOT_FOUND_PROBLEM_TYPE,
            "title": 7,
            "status": "404"
        });
        let problem: ProblemDetails = serde_json::from_value(json).unwrap();
        assert_eq!(problem.kind, ProblemKind::NotFound);
        assert_eq!(problem.status, None);
        assert_eq!(problem.title, None);
        assert_eq!(problem.extensions["status"], "404");
        assert_eq!(problem.extensions["title"], 7);
    }

    #[test]
    fn test_non_string_type_is_about_blank() {
        let problem: ProblemDetails =
            serde_json::from_value(serde_json::json!({"type": 42, "status": 500})).unwrap();
        assert_eq!(problem.type_uri, ABOUT_BLANK);
        assert_eq!(problem.kind, ProblemKind::Unknown);
        assert_eq!(problem.extensions["type"], 42);
    }
}
