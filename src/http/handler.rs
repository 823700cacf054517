//! Request handler: builds requests, dispatches them, normalises responses.
//!
//! One method per verb family. Paths are relative to the configured base URL
//! and start with `/`. The handler keeps no state between calls beyond its
//! immutable configuration, never retries, and returns every failure to the
//! caller.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult, ProblemError};
use crate::http::headers::{HeaderSet, AUTHORIZATION, USER_AGENT};
use crate::http::options::{Duplex, RequestOptions};
use crate::http::transport::{Method, RequestBody, Transport, TransportRequest, TransportResponse};
use crate::problem::ProblemDetails;

/// API key wrapper that never prints its value.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Low-level request handler shared by all facade methods.
#[derive(Clone)]
pub struct RequestHandler {
    base_url: String,
    api_key: ApiKey,
    user_agent: String,
    transport: Arc<dyn Transport>,
}

impl RequestHandler {
    pub fn new(
        base_url: impl Into<String>,
        api_key: ApiKey,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key,
            user_agent: crate::network::USER_AGENT.to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers attached to every request; they outrank per-call overrides.
    fn default_headers(&self) -> [(String, String); 2] {
        [
            (
                AUTHORIZATION.to_string(),
                format!("Bearer {}", self.api_key.expose()),
            ),
            (USER_AGENT.to_string(), self.user_agent.clone()),
        ]
    }

    // =========================================================================
    // Verb entry points
    // =========================================================================

    /// GET `path` and decode the JSON body as `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<&RequestOptions>,
    ) -> ApiResult<T> {
        let (url, response) = self.execute(Method::Get, path, None, options).await?;
        decode_body(&url, &response.body)
    }

    /// POST a structured body (or none) encoded as JSON.
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> ApiResult<T> {
        let body = body.map(encode_json).transpose()?;
        let (url, response) = self.execute(Method::Post, path, body, options).await?;
        decode_body(&url, &response.body)
    }

    /// PUT a structured body (or none) encoded as JSON.
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        options: Option<&RequestOptions>,
    ) -> ApiResult<T> {
        let body = body.map(encode_json).transpose()?;
        let (url, response) = self.execute(Method::Put, path, body, options).await?;
        decode_body(&url, &response.body)
    }

    /// POST raw bytes. The content type must come from a header override.
    pub async fn post_raw<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Vec<u8>,
        options: Option<&RequestOptions>,
    ) -> ApiResult<T> {
        let body = Some(RequestBody::Raw(body));
        let (url, response) = self.execute(Method::Post, path, body, options).await?;
        decode_body(&url, &response.body)
    }

    /// PUT raw bytes. The content type must come from a header override.
    pub async fn put_raw<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Vec<u8>,
        options: Option<&RequestOptions>,
    ) -> ApiResult<T> {
        let body = Some(RequestBody::Raw(body));
        let (url, response) = self.execute(Method::Put, path, body, options).await?;
        decode_body(&url, &response.body)
    }

    /// DELETE `path`. An empty body (e.g. 204) yields `None`.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: Option<&RequestOptions>,
    ) -> ApiResult<Option<T>> {
        let (url, response) = self.execute(Method::Delete, path, None, options).await?;
        if is_blank(&response.body) {
            return Ok(None);
        }
        decode_body(&url, &response.body).map(Some)
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    /// Assemble the request the transport will see.
    pub fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        options: Option<&RequestOptions>,
    ) -> TransportRequest {
        let default_options = RequestOptions::default();
        let options = options.unwrap_or(&default_options);

        let headers = HeaderSet::derive(options, body.as_ref())
            .with_client_defaults(&self.default_headers())
            .resolve();

        let mut transport_options = options.transport.clone();
        if body.as_ref().is_some_and(RequestBody::is_raw) {
            transport_options.duplex = Some(Duplex::Half);
        }

        TransportRequest {
            method,
            url: self.url_for(path),
            headers,
            body,
            options: transport_options,
        }
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// Send once; map non-2xx responses to errors.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<RequestBody>,
        options: Option<&RequestOptions>,
    ) -> ApiResult<(String, TransportResponse)> {
        let request = self.build_request(method, path, body, options);
        let url = request.url.clone();

        tracing::debug!(%method, %url, "sending API request");
        tracing::trace!(
            headers = ?request.headers.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>(),
            has_body = request.body.is_some(),
            "request headers"
        );

        let response = self.transport.send(request).await?;

        tracing::debug!(%method, %url, status = response.status, "received API response");

        if response.is_success() {
            Ok((url, response))
        } else {
            Err(error_from_response(url, response))
        }
    }
}

impl fmt::Debug for RequestHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestHandler")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key)
            .field("user_agent", &self.user_agent)
            .finish_non_exhaustive()
    }
}

fn encode_json<B: Serialize + ?Sized>(body: &B) -> ApiResult<RequestBody> {
    Ok(RequestBody::Json(serde_json::to_vec(body)?))
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

/// Decode a 2xx body. An empty body decodes as JSON `null`, which succeeds
/// for `()` and `Option<_>`.
fn decode_body<T: DeserializeOwned>(url: &str, body: &[u8]) -> ApiResult<T> {
    let decoded = if is_blank(body) {
        serde_json::from_value(Value::Null)
    } else {
        serde_json::from_slice(body)
    };

    decoded.map_err(|e| ApiError::Deserialize {
        url: url.to_string(),
        message: if is_blank(body) {
            format!("empty response body: {}", e)
        } else {
            e.to_string()
        },
    })
}

/// Map a non-2xx response to an [`ApiError`].
///
/// A JSON object body is read as problem details; anything else is surfaced
/// verbatim as [`ApiError::UnexpectedResponse`].
fn error_from_response(url: String, response: TransportResponse) -> ApiError {
    let problem = match serde_json::from_slice::<Value>(&response.body) {
        Ok(value @ Value::Object(_)) => serde_json::from_value::<ProblemDetails>(value).ok(),
        _ => None,
    };

    match problem {
        Some(problem) => ProblemError {
            status: response.status,
            url,
            response,
            problem,
        }
        .into(),
        None => ApiError::UnexpectedResponse {
            status: response.status,
            body: response.text(),
            url,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::headers::{CONTENT_TYPE, IDEMPOTENCY_KEY, SUBACCOUNT_ID};
    use crate::problem::ProblemKind;

    struct Unreachable;

    #[async_trait::async_trait]
    impl Transport for Unreachable {
        async fn send(
            &self,
            _request: TransportRequest,
        ) -> Result<TransportResponse, crate::http::TransportError> {
            Err(crate::http::TransportError::InvalidRequest("unreachable".to_string()))
        }
    }

    fn handler() -> RequestHandler {
        RequestHandler::new("https://example.com/", ApiKey::new("TESTKEY"), Arc::new(Unreachable))
    }

    #[test]
    fn test_base_url_trailing_slash_removed() {
        assert_eq!(handler().base_url(), "https://example.com");
    }

    #[test]
    fn test_build_get_request() {
        let request = handler().build_request(Method::Get, "/somepath", None, None);
        assert_eq!(request.url, "https://example.com/somepath");
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.header(AUTHORIZATION), Some("Bearer TESTKEY"));
        assert_eq!(request.header(USER_AGENT), Some(crate::network::USER_AGENT));
        assert_eq!(request.headers.len(), 2);
        assert!(request.body.is_none());
        assert!(request.options.duplex.is_none());
    }

    #[test]
    fn test_build_json_post_request() {
        let opts = RequestOptions::new()
            .with_idempotency_key("IDEM")
            .with_subaccount("SUB");
        let body = encode_json(&serde_json::json!({"data": "ABC"})).unwrap();
        let request = handler().build_request(Method::Post, "/postpath", Some(body), Some(&opts));

        assert_eq!(request.header(IDEMPOTENCY_KEY), Some("IDEM"));
        assert_eq!(request.header(CONTENT_TYPE), Some("application/json"));
        assert_eq!(request.header(SUBACCOUNT_ID), Some("SUB"));
        assert_eq!(request.body.unwrap().as_bytes(), br#"{"data":"ABC"}"#);
    }

    #[test]
    fn test_raw_body_forces_half_duplex() {
        let opts = RequestOptions::new().with_header("Content-Type", "image/png");
        let request = handler().build_request(
            Method::Put,
            "/logo",
            Some(RequestBody::Raw(vec![0x89, 0x50])),
            Some(&opts),
        );
        assert_eq!(request.options.duplex, Some(Duplex::Half));
        assert_eq!(request.header(CONTENT_TYPE), Some("image/png"));
    }

    #[test]
    fn test_relative_path_without_slash() {
        let request = handler().build_request(Method::Get, "orders", None, None);
        assert_eq!(request.url, "https://example.com/orders");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let debug = format!("{:?}", handler());
        assert!(!debug.contains("TESTKEY"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_decode_empty_body_as_unit() {
        assert!(decode_body::<()>("u", b"").is_ok());
        let absent: Option<serde_json::Value> = decode_body("u", b"  ").unwrap();
        assert!(absent.is_none());
    }

    #[test]
    fn test_decode_empty_body_into_struct_fails() {
        #[derive(Debug, serde::Deserialize)]
        struct Quote {
            #[allow(dead_code)]
            amount_kg: f64,
        }
        let err = decode_body::<Quote>("https://example.com/quotes", b"").unwrap_err();
        match err {
            ApiError::Deserialize { url, message } => {
                assert_eq!(url, "https://example.com/quotes");
                assert!(message.starts_with("empty response body"));
            }
            other => panic!("expected deserialize error, got {:?}", other),
        }
    }

    #[test]
    fn test_error_from_problem_body() {
        let body = serde_json::json!({
            "type": "https://api.cnaught.com/v1/errors/forbidden",
            "title": "User is not allowed to use subaccounts.",
            "status": 403
        });
        let err = error_from_response(
            "https://example.com/x".to_string(),
            TransportResponse::json(403, &body),
        );
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.problem_kind(), Some(&ProblemKind::Forbidden));
    }

    #[test]
    fn test_error_from_non_json_body() {
        let err = error_from_response(
            "https://example.com/x".to_string(),
            TransportResponse::new(502, "Bad Gateway"),
        );
        match err {
            ApiError::UnexpectedResponse { status, body, .. } => {
                assert_eq!(status, 502);
                assert_eq!(body, "Bad Gateway");
            }
            other => panic!("expected unexpected response, got {:?}", other),
        }
    }

    #[test]
    fn test_error_from_json_array_body() {
        let err = error_from_response(
            "https://example.com/x".to_string(),
            TransportResponse::new(500, "[1,2]"),
        );
        assert!(matches!(err, ApiError::UnexpectedResponse { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let err = handler()
            .get::<serde_json::Value>("/somepath", None)
            .await
            .unwrap_err();
        match err {
            ApiError::Transport(crate::http::TransportError::InvalidRequest(msg)) => {
                assert_eq!(msg, "unreachable");
            }
            other => panic!("expected transport error, got {:?}", other),
        }
    }
}
