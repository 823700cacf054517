//! Error types for the CNaught SDK.
//!
//! Every fallible SDK call returns [`ApiResult<T>`]. A non-2xx response with a
//! problem details body becomes [`ApiError::Problem`]; callers should branch on
//! [`ProblemKind`] (fine-grained) or [`ApiError::status`] (coarse).
//!
//! ```rust,ignore
//! match client.cancel_order("ord_123", None).await {
//!     Ok(order) => println!("{:?}", order.state),
//!     Err(e) if e.problem_kind() == Some(&ProblemKind::NotFound) => println!("no such order"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use thiserror::Error;

use crate::http::transport::{TransportError, TransportResponse};
use crate::problem::{ProblemDetails, ProblemKind};

/// Top-level SDK error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response was received. Holds the transport's error as raised.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The server answered with a non-2xx status and a problem details body.
    #[error(transparent)]
    Problem(Box<ProblemError>),

    /// The server answered with a non-2xx status and a body that is not a
    /// problem details object.
    #[error("Unexpected response {status} from {url}: {body}")]
    UnexpectedResponse {
        status: u16,
        url: String,
        body: String,
    },

    /// A 2xx body could not be decoded into the expected type.
    #[error("Failed to deserialize response from {url}: {message}")]
    Deserialize { url: String, message: String },

    /// A request body could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Query parameters could not be encoded.
    #[error("Query encoding error: {0}")]
    QueryEncode(#[from] serde_urlencoded::ser::Error),

    /// The client could not be configured.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ApiError {
    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Problem(err) => Some(err.status),
            Self::UnexpectedResponse { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Parsed problem details, if the server sent them.
    pub fn problem(&self) -> Option<&ProblemDetails> {
        match self {
            Self::Problem(err) => Some(&err.problem),
            _ => None,
        }
    }

    pub fn problem_kind(&self) -> Option<&ProblemKind> {
        self.problem().map(|problem| &problem.kind)
    }

    /// Whether the same request can be resent unchanged.
    pub fn is_retry_safe(&self) -> bool {
        self.problem_kind().is_some_and(ProblemKind::is_retry_safe)
    }
}

/// Result type alias for SDK operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// A non-2xx response carrying problem details.
#[derive(Debug, Clone, Error)]
#[error("API error {status} ({}) from {url}: {}", .problem.type_uri, .problem.summary())]
pub struct ProblemError {
    /// HTTP status code of the response.
    pub status: u16,
    /// URL the request was sent to.
    pub url: String,
    /// The response exactly as received.
    pub response: TransportResponse,
    pub problem: ProblemDetails,
}

impl From<ProblemError> for ApiError {
    fn from(err: ProblemError) -> Self {
        Self::Problem(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::NOT_FOUND_PROBLEM_TYPE;

    fn not_found() -> ApiError {
        let body = serde_json::json!({
            "type": NOT_FOUND_PROBLEM_TYPE,
            "title": "Order not found",
            "status": 404
        });
        let response = TransportResponse::json(404, &body);
        ProblemError {
            status: 404,
            url: "https://api.cnaught.com/v1/orders/x".to_string(),
            problem: serde_json::from_value(body).unwrap(),
            response,
        }
        .into()
    }

    #[test]
    fn test_problem_accessors() {
        let err = not_found();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.problem_kind(), Some(&ProblemKind::NotFound));
        assert!(!err.is_retry_safe());
        assert!(err.to_string().contains("Order not found"));
    }

    #[test]
    fn test_non_response_errors_have_no_status() {
        let err = ApiError::InvalidConfig("empty api key".to_string());
        assert_eq!(err.status(), None);
        assert!(err.problem().is_none());

        let err = ApiError::from(TransportError::InvalidRequest("bad header".to_string()));
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_unexpected_response_status() {
        let err = ApiError::UnexpectedResponse {
            status: 502,
            url: "https://api.cnaught.com/v1/orders".to_string(),
            body: "<html>Bad Gateway</html>".to_string(),
        };
        assert_eq!(err.status(), Some(502));
        assert!(err.problem().is_none());
    }
}
