//! Order types for the CNaught REST API.

use serde::{Deserialize, Serialize};

use super::project::Project;

/// Lifecycle state of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderState {
    /// Accepted, credits not yet retired
    Placed,
    /// Credits retired, certificate available
    Fulfilled,
    Cancelled,
    /// A state this SDK version does not know about
    #[serde(other)]
    Unknown,
}

/// Where the API sends order state notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    pub url: String,
}

impl NotificationConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Registry retirement backing part of an allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Retirement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number_range: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Amount of an order fulfilled from one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectAllocation {
    pub project: Project,
    pub amount_kg: f64,
    #[serde(default)]
    pub retirements: Vec<Retirement>,
}

/// An offset order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier
    pub id: String,
    /// Human-friendly order number
    pub order_number: String,
    /// Amount of CO2e offset, in kg
    pub amount_kg: f64,
    /// Creation timestamp (ISO 8601)
    pub created_on: String,
    /// Caller metadata supplied at placement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Price paid, in US cents
    pub price_usd_cents: i64,
    pub state: OrderState,
    /// Order type (e.g. "generic", "ride")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_public_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certificate_download_public_url: Option<String>,
    /// Set when the order was placed for a subaccount
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subaccount_id: Option<String>,
    /// Empty until the order is fulfilled
    #[serde(default)]
    pub project_allocations: Vec<ProjectAllocation>,
    /// Set when the order was created by a checkout session
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkout_session_id: Option<String>,
}

/// Order placed for a ride, with the distance that was offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideOrder {
    #[serde(flatten)]
    pub order: Order,
    pub distance_km: f64,
}

/// Fields shared by every order placement request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseOrderOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_config: Option<NotificationConfig>,
    /// Portfolio to fulfil from; the account default when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<String>,
}

/// Request body for `POST /orders`.
///
/// Exactly one of `amount_kg` and `total_price_usd_cents` must be set. The
/// server enforces this; a violation comes back as an invalid-parameters
/// problem.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceOrderOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_kg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price_usd_cents: Option<i64>,
    #[serde(flatten)]
    pub base: BaseOrderOptions,
}

impl PlaceOrderOptions {
    /// Order a fixed amount of CO2e, in kg.
    pub fn by_amount(amount_kg: f64) -> Self {
        Self {
            amount_kg: Some(amount_kg),
            ..Default::default()
        }
    }

    /// Spend a fixed total, in US cents.
    pub fn by_price(total_price_usd_cents: i64) -> Self {
        Self {
            total_price_usd_cents: Some(total_price_usd_cents),
            ..Default::default()
        }
    }

    pub fn with_metadata(mut self, metadata: impl Into<String>) -> Self {
        self.base.metadata = Some(metadata.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.base.description = Some(description.into());
        self
    }

    pub fn with_notification_url(mut self, url: impl Into<String>) -> Self {
        self.base.notification_config = Some(NotificationConfig::new(url));
        self
    }

    pub fn with_portfolio(mut self, portfolio_id: impl Into<String>) -> Self {
        self.base.portfolio_id = Some(portfolio_id.into());
        self
    }
}

/// Request body for `POST /orders/ride`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RideOrderOptions {
    pub distance_km: f64,
    #[serde(flatten)]
    pub base: BaseOrderOptions,
}

impl RideOrderOptions {
    pub fn new(distance_km: f64) -> Self {
        Self {
            distance_km,
            base: BaseOrderOptions::default(),
        }
    }
}
