//! Subaccount types.

use serde::{Deserialize, Serialize};

/// A tenant scope under the account that owns the API key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subaccount {
    pub id: String,
    pub name: String,
    /// Creation timestamp (ISO 8601)
    pub created_on: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_portfolio_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Request body for `POST /subaccounts`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubaccountOptions {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_portfolio_id: Option<String>,
}

impl SubaccountOptions {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_portfolio_id: None,
        }
    }

    pub fn with_default_portfolio(mut self, portfolio_id: impl Into<String>) -> Self {
        self.default_portfolio_id = Some(portfolio_id.into());
        self
    }
}

/// Request body for `PUT /subaccounts/{id}`.
///
/// The update replaces the whole record: `default_portfolio_id: None` is sent
/// as `null` and clears the default portfolio.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSubaccountOptions {
    pub name: String,
    #[serde(default)]
    pub default_portfolio_id: Option<String>,
}

impl UpdateSubaccountOptions {
    pub fn new(name: impl Into<String>, default_portfolio_id: Option<String>) -> Self {
        Self {
            name: name.into(),
            default_portfolio_id,
        }
    }
}

/// Request body for setting a logo from a publicly reachable URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubaccountLogoUrlOptions {
    pub logo_url: String,
}

impl SubaccountLogoUrlOptions {
    pub fn new(logo_url: impl Into<String>) -> Self {
        Self {
            logo_url: logo_url.into(),
        }
    }
}
