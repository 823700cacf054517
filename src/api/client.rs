//! CNaught REST API client implementation.

use std::sync::Arc;
use std::time::Duration;

use serde::de::IgnoredAny;
use serde::Serialize;
use url::Url;

use crate::api::types::*;
use crate::error::{ApiError, ApiResult};
use crate::http::headers::CONTENT_TYPE;
use crate::http::{ApiKey, RequestHandler, RequestOptions, Transport};
use crate::network::{DEFAULT_API_URL, DEFAULT_API_VERSION};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Builder for configuring [`CNaughtApiClient`].
pub struct CNaughtApiClientBuilder {
    api_key: String,
    hostname: Option<String>,
    port: Option<u16>,
    api_version: String,
    base_url: Option<String>,
    timeout: Duration,
    transport: Option<Arc<dyn Transport>>,
}

impl CNaughtApiClientBuilder {
    /// Create a new builder with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            hostname: None,
            port: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            base_url: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            transport: None,
        }
    }

    /// Host to send requests to (default `api.cnaught.com`).
    pub fn hostname(mut self, hostname: impl Into<String>) -> Self {
        self.hostname = Some(hostname.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// API version path prefix (default `v1`).
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }

    /// Replace the whole base URL, e.g. `http://localhost:8080/v1`.
    ///
    /// Takes precedence over `hostname`, `port` and `api_version`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the request timeout of the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the timeout in seconds.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    /// Use a custom transport instead of the default reqwest one.
    ///
    /// The timeout setting is not applied to custom transports.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    fn compose_base_url(&self) -> ApiResult<String> {
        let invalid = |what: &str, e: &dyn std::fmt::Display| {
            ApiError::InvalidConfig(format!("Invalid {}: {}", what, e))
        };

        let url = match &self.base_url {
            Some(base_url) => Url::parse(base_url).map_err(|e| invalid("base URL", &e))?,
            None => {
                let mut url = Url::parse(DEFAULT_API_URL).map_err(|e| invalid("base URL", &e))?;
                if let Some(hostname) = &self.hostname {
                    url.set_host(Some(hostname.as_str()))
                        .map_err(|e| invalid("hostname", &e))?;
                }
                if let Some(port) = self.port {
                    url.set_port(Some(port))
                        .map_err(|_| invalid("port", &port))?;
                }
                url.set_path(&format!("/{}", self.api_version.trim_matches('/')));
                url
            }
        };

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidConfig(format!(
                "Unsupported URL scheme '{}'",
                url.scheme()
            )));
        }

        Ok(url.as_str().trim_end_matches('/').to_string())
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::InvalidConfig`] for an empty API key or a malformed
    /// base URL, and [`ApiError::Transport`] if the default transport cannot be
    /// initialised.
    pub fn build(self) -> ApiResult<CNaughtApiClient> {
        if self.api_key.trim().is_empty() {
            return Err(ApiError::InvalidConfig("API key must not be empty".to_string()));
        }

        let base_url = self.compose_base_url()?;

        let transport: Arc<dyn Transport> = match self.transport {
            Some(transport) => transport,
            #[cfg(feature = "http")]
            None => Arc::new(crate::http::ReqwestTransport::new(self.timeout)?),
            #[cfg(not(feature = "http"))]
            None => {
                return Err(ApiError::InvalidConfig(
                    "No transport configured; enable the `http` feature or supply one".to_string(),
                ))
            }
        };

        Ok(CNaughtApiClient {
            handler: RequestHandler::new(base_url, ApiKey::new(self.api_key), transport),
        })
    }
}

/// CNaught REST API client.
///
/// One method per API operation. Each method takes optional
/// [`RequestOptions`] last (idempotency key, subaccount, header overrides,
/// transport settings) and returns the decoded response unchanged.
#[derive(Debug, Clone)]
pub struct CNaughtApiClient {
    handler: RequestHandler,
}

impl CNaughtApiClient {
    /// Create a new client for the production API with default settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is empty or the HTTP client cannot be
    /// initialized.
    pub fn new(api_key: impl Into<String>) -> ApiResult<Self> {
        CNaughtApiClientBuilder::new(api_key).build()
    }

    /// Create a new client builder for custom configuration.
    pub fn builder(api_key: impl Into<String>) -> CNaughtApiClientBuilder {
        CNaughtApiClientBuilder::new(api_key)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.handler.base_url()
    }

    /// The underlying request handler, for endpoints without a typed method.
    pub fn handler(&self) -> &RequestHandler {
        &self.handler
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Get an order by id.
    pub async fn get_order_details(
        &self,
        id: &str,
        options: Option<&RequestOptions>,
    ) -> ApiResult<Order> {
        let path = format!("/orders/{}", urlencoding::encode(id));
        self.handler.get(&path, options).await
    }

    /// List orders, most recent first.
    ///
    /// `starting_after` is the id of the last order of the previous page.
    pub async fn get_list_of_orders(
        &self,
        limit: Option<u32>,
        starting_after: Option<&str>,
        options: Option<&RequestOptions>,
    ) -> ApiResult<List<Order>> {
        let path = with_query("/orders", &ListParams::new(limit, starting_after))?;
        self.handler.get(&path, options).await
    }

    /// Place an order for an amount of CO2e or for a total price.
    ///
    /// Pass an idempotency key to make retries safe.
    pub async fn place_order(
        &self,
        order: &PlaceOrderOptions,
        options: Option<&RequestOptions>,
    ) -> ApiResult<Order> {
        self.handler.post("/orders", Some(order), options).await
    }

    /// Place an order offsetting a ride of the given distance.
    pub async fn place_ride_order(
        &self,
        order: &RideOrderOptions,
        options: Option<&RequestOptions>,
    ) -> ApiResult<RideOrder> {
        self.handler.post("/orders/ride", Some(order), options).await
    }

    /// Cancel an order that has not been fulfilled yet.
    pub async fn cancel_order(
        &self,
        id: &str,
        options: Option<&RequestOptions>,
    ) -> ApiResult<Order> {
        let path = format!("/orders/{}/cancel", urlencoding::encode(id));
        self.handler.post(&path, None::<&()>, options).await
    }

    // =========================================================================
    // Quotes
    // =========================================================================

    pub async fn get_generic_quote(
        &self,
        params: &GenericQuoteParams,
        options: Option<&RequestOptions>,
    ) -> ApiResult<OffsetsQuote> {
        self.handler.post("/quotes", Some(params), options).await
    }

    pub async fn get_ride_quote(
        &self,
        params: &RideQuoteParams,
        options: Option<&RequestOptions>,
    ) -> ApiResult<OffsetsQuote> {
        self.handler.post("/quotes/ride", Some(params), options).await
    }

    pub async fn get_flight_quote(
        &self,
        params: &FlightQuoteParams,
        options: Option<&RequestOptions>,
    ) -> ApiResult<OffsetsQuote> {
        self.handler.post("/quotes/flight", Some(params), options).await
    }

    pub async fn get_train_quote(
        &self,
        params: &TrainQuoteParams,
        options: Option<&RequestOptions>,
    ) -> ApiResult<OffsetsQuote> {
        self.handler.post("/quotes/train", Some(params), options).await
    }

    pub async fn get_ground_transport_quote(
        &self,
        params: &GroundTransportQuoteParams,
        options: Option<&RequestOptions>,
    ) -> ApiResult<OffsetsQuote> {
        self.handler
            .post("/quotes/ground-transport", Some(params), options)
            .await
    }

    pub async fn get_ground_freight_quote(
        &self,
        params: &GroundFreightQuoteParams,
        options: Option<&RequestOptions>,
    ) -> ApiResult<OffsetsQuote> {
        self.handler
            .post("/quotes/ground-freight", Some(params), options)
            .await
    }

    pub async fn get_air_freight_quote(
        &self,
        params: &AirFreightQuoteParams,
        options: Option<&RequestOptions>,
    ) -> ApiResult<OffsetsQuote> {
        self.handler
            .post("/quotes/air-freight", Some(params), options)
            .await
    }

    pub async fn get_office_space_quote(
        &self,
        params: &OfficeSpaceQuoteParams,
        options: Option<&RequestOptions>,
    ) -> ApiResult<OffsetsQuote> {
        self.handler
            .post("/quotes/office-space", Some(params), options)
            .await
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Create a hosted checkout session. Redirect the customer to
    /// [`CheckoutSession::checkout_url`].
    pub async fn create_checkout_session(
        &self,
        session: &CheckoutSessionOptions,
        options: Option<&RequestOptions>,
    ) -> ApiResult<CheckoutSession> {
        self.handler
            .post("/checkout/sessions", Some(session), options)
            .await
    }

    // =========================================================================
    // Subaccounts
    // =========================================================================

    pub async fn create_subaccount(
        &self,
        subaccount: &SubaccountOptions,
        options: Option<&RequestOptions>,
    ) -> ApiResult<Subaccount> {
        self.handler
            .post("/subaccounts", Some(subaccount), options)
            .await
    }

    pub async fn get_subaccount_details(
        &self,
        id: &str,
        options: Option<&RequestOptions>,
    ) -> ApiResult<Subaccount> {
        let path = format!("/subaccounts/{}", urlencoding::encode(id));
        self.handler.get(&path, options).await
    }

    pub async fn get_list_of_subaccounts(
        &self,
        limit: Option<u32>,
        starting_after: Option<&str>,
        options: Option<&RequestOptions>,
    ) -> ApiResult<List<Subaccount>> {
        let path = with_query("/subaccounts", &ListParams::new(limit, starting_after))?;
        self.handler.get(&path, options).await
    }

    /// Replace a subaccount's settings.
    ///
    /// This is a full replace, not a patch: a `None` default portfolio clears
    /// the current one.
    pub async fn update_subaccount(
        &self,
        id: &str,
        update: &UpdateSubaccountOptions,
        options: Option<&RequestOptions>,
    ) -> ApiResult<Subaccount> {
        let path = format!("/subaccounts/{}", urlencoding::encode(id));
        self.handler.put(&path, Some(update), options).await
    }

    /// Set a subaccount's logo from a publicly reachable image URL.
    pub async fn update_subaccount_logo_from_url(
        &self,
        id: &str,
        logo: &SubaccountLogoUrlOptions,
        options: Option<&RequestOptions>,
    ) -> ApiResult<Subaccount> {
        let path = format!("/subaccounts/{}/logo", urlencoding::encode(id));
        self.handler.post(&path, Some(logo), options).await
    }

    /// Upload a subaccount's logo as raw image bytes.
    ///
    /// `content_type` is the image MIME type, e.g. `image/png`. It overrides
    /// any `Content-Type` header in `options`.
    pub async fn update_subaccount_logo_from_image_data(
        &self,
        id: &str,
        image_data: Vec<u8>,
        content_type: &str,
        options: Option<&RequestOptions>,
    ) -> ApiResult<Subaccount> {
        let path = format!("/subaccounts/{}/logo", urlencoding::encode(id));
        let options = options
            .cloned()
            .unwrap_or_default()
            .with_header(CONTENT_TYPE, content_type);
        self.handler.put_raw(&path, image_data, Some(&options)).await
    }

    /// Remove a subaccount's logo.
    pub async fn remove_subaccount_logo(
        &self,
        id: &str,
        options: Option<&RequestOptions>,
    ) -> ApiResult<()> {
        let path = format!("/subaccounts/{}/logo", urlencoding::encode(id));
        self.handler.delete::<IgnoredAny>(&path, options).await?;
        Ok(())
    }

    // =========================================================================
    // Impact
    // =========================================================================

    /// Offset totals, optionally limited to a date range.
    ///
    /// Pass a subaccount in `options` for that subaccount's impact.
    pub async fn get_impact_data(
        &self,
        filter: Option<&ImpactDataFilter>,
        options: Option<&RequestOptions>,
    ) -> ApiResult<ImpactData> {
        let query = filter.map(ImpactDataFilter::query).unwrap_or_default();
        let path = with_query("/impact/data", &query)?;
        self.handler.get(&path, options).await
    }

    pub async fn get_impact_hosted_page_config(
        &self,
        options: Option<&RequestOptions>,
    ) -> ApiResult<ImpactHostedPageConfig> {
        self.handler
            .get("/impact/hosted-page-config", options)
            .await
    }

    // =========================================================================
    // Projects and portfolios
    // =========================================================================

    pub async fn get_project_details(
        &self,
        id: &str,
        options: Option<&RequestOptions>,
    ) -> ApiResult<ProjectWithCreditIssuances> {
        let path = format!("/projects/{}", urlencoding::encode(id));
        self.handler.get(&path, options).await
    }

    pub async fn get_project_category_details(
        &self,
        id: &str,
        options: Option<&RequestOptions>,
    ) -> ApiResult<ProjectCategoryWithProjects> {
        let path = format!("/project-categories/{}", urlencoding::encode(id));
        self.handler.get(&path, options).await
    }

    pub async fn get_portfolio_details(
        &self,
        id: &str,
        options: Option<&RequestOptions>,
    ) -> ApiResult<PortfolioWithCategoryAllocations> {
        let path = format!("/portfolios/{}", urlencoding::encode(id));
        self.handler.get(&path, options).await
    }

    pub async fn get_list_of_portfolios(
        &self,
        options: Option<&RequestOptions>,
    ) -> ApiResult<List<Portfolio>> {
        self.handler.get("/portfolios", options).await
    }
}

/// Append `query` to `path`, omitting the `?` when every parameter is absent.
fn with_query<Q: Serialize>(path: &str, query: &Q) -> ApiResult<String> {
    let query = serde_urlencoded::to_string(query)?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{}?{}", path, query))
    }
}
