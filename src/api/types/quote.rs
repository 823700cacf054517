//! Price quote request and response types.
//!
//! A quote is a price calculation for a prospective purchase; it places no
//! order. Every request accepts an optional `portfolio_id`.

use serde::{Deserialize, Serialize};

/// Amount and price returned by every quote endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OffsetsQuote {
    pub amount_kg: f64,
    pub price_usd_cents: i64,
}

/// Quote for a fixed amount of CO2e.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenericQuoteParams {
    pub amount_kg: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<String>,
}

/// Quote for a ride of the given length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RideQuoteParams {
    pub distance_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightQuoteParams {
    pub distance_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainQuoteParams {
    pub distance_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<String>,
}

/// Vehicle used for a ground transport quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleType {
    PassengerCarVanOrSuv,
    SmallBus,
    SchoolBus,
    CoachBus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroundTransportQuoteParams {
    pub distance_km: f64,
    pub vehicle_type: VehicleType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<String>,
}

/// Freight moved by road.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroundFreightQuoteParams {
    pub freight_mass_kg: f64,
    pub distance_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<String>,
}

/// Freight moved by air.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirFreightQuoteParams {
    pub freight_mass_kg: f64,
    pub distance_km: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<String>,
}

/// Annual emissions of an office of the given floor area.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfficeSpaceQuoteParams {
    pub square_footage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio_id: Option<String>,
}
