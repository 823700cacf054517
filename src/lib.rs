//! # CNaught Rust SDK
//!
//! A typed client for the CNaught carbon offset API.
//!
//! ## Modules
//!
//! - [`api`]: typed client with one method per API operation, plus the
//!   request and response records
//! - [`http`]: request/response handling layer (header derivation, body
//!   encoding, the pluggable [`Transport`](http::Transport) and its default
//!   reqwest implementation)
//! - [`problem`]: RFC 7807 problem details returned on API errors
//! - [`error`]: the [`ApiError`] type every operation returns
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cnaught::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CNaughtApiClient::new("your-api-key")?;
//!
//!     let orders = client.get_list_of_orders(Some(5), None, None).await?;
//!     for order in orders {
//!         println!("{} {:?} {} kg", order.id, order.state, order.amount_kg);
//!     }
//!
//!     let opts = RequestOptions::new().with_subaccount("sub_123");
//!     let impact = client.get_impact_data(None, Some(&opts)).await?;
//!     println!("Offset so far: {} kg", impact.total_offset_kgs);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Custom transports
//!
//! Every request goes through a [`Transport`](http::Transport). Supply your
//! own to route requests through a proxy layer or to test without a network:
//!
//! ```rust,ignore
//! let client = CNaughtApiClient::builder("your-api-key")
//!     .transport(Arc::new(MyTransport::default()))
//!     .build()?;
//! ```

// ============================================================================
// MODULES
// ============================================================================

/// Typed API client and payload types.
pub mod api;

/// Error types shared by all operations.
pub mod error;

/// Request/response handling layer.
pub mod http;

/// Network URL constants and the SDK user agent.
pub mod network;

/// RFC 7807 problem details.
pub mod problem;

pub use error::{ApiError, ApiResult, ProblemError};
pub use problem::{ProblemDetails, ProblemKind};

// ============================================================================
// PRELUDE
// ============================================================================

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use cnaught::prelude::*;
/// ```
pub mod prelude {
    // Client
    pub use crate::api::{CNaughtApiClient, CNaughtApiClientBuilder};

    // Common types
    pub use crate::api::{
        CheckoutSession, CheckoutSessionOptions, ImpactData, ImpactDataFilter,
        ImpactHostedPageConfig, List, OffsetsQuote, Order, OrderState, PlaceOrderOptions,
        Portfolio, PortfolioWithCategoryAllocations, ProjectCategoryWithProjects,
        ProjectWithCreditIssuances, RideOrder, RideOrderOptions, Subaccount,
        SubaccountLogoUrlOptions, SubaccountOptions, UpdateSubaccountOptions,
    };

    // Quote params
    pub use crate::api::{
        AirFreightQuoteParams, FlightQuoteParams, GenericQuoteParams, GroundFreightQuoteParams,
        GroundTransportQuoteParams, OfficeSpaceQuoteParams, RideQuoteParams, TrainQuoteParams,
        VehicleType,
    };

    // Request options and transport
    pub use crate::http::{RequestOptions, Transport, TransportOptions};
    #[cfg(feature = "http")]
    pub use crate::http::ReqwestTransport;

    // Errors
    pub use crate::error::{ApiError, ApiResult};
    pub use crate::problem::{ProblemDetails, ProblemKind};

    // Network constants
    pub use crate::network::DEFAULT_API_URL;
}
