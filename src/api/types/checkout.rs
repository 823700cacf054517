//! Hosted checkout session types.

use serde::{Deserialize, Serialize};

use super::order::NotificationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutSessionState {
    /// Awaiting payment
    Open,
    /// Paid; an order was placed
    Complete,
    Expired,
}

/// A hosted page where an end customer pays for a one-time purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    pub amount_kg: f64,
    pub price_usd_cents: i64,
    pub success_url: String,
    pub cancel_url: String,
    /// Page to redirect the customer to
    pub checkout_url: String,
    pub state: CheckoutSessionState,
    pub expires_on: String,
    #[serde(default)]
    pub completed_on: Option<String>,
    pub portfolio_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subaccount_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_webhook_url: Option<String>,
}

/// Request body for `POST /checkout/sessions`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSessionOptions {
    pub amount_kg: f64,
    pub success_url: String,
    pub cancel_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<String>,
    /// Description of the order placed on completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_config: Option<NotificationConfig>,
}

impl CheckoutSessionOptions {
    pub fn new(
        amount_kg: f64,
        success_url: impl Into<String>,
        cancel_url: impl Into<String>,
    ) -> Self {
        Self {
            amount_kg,
            success_url: success_url.into(),
            cancel_url: cancel_url.into(),
            ..Default::default()
        }
    }
}
