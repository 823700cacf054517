//! REST API client module for CNaught.
//!
//! This module provides a typed client for the CNaught carbon offset API:
//! orders, quotes, checkout sessions, subaccounts, impact reporting and the
//! project/portfolio catalog.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cnaught::api::{CNaughtApiClient, GenericQuoteParams, PlaceOrderOptions};
//! use cnaught::http::RequestOptions;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CNaughtApiClient::new(std::env::var("CNAUGHT_API_KEY")?)?;
//!
//!     let quote = client
//!         .get_generic_quote(&GenericQuoteParams { amount_kg: 10.0, portfolio_id: None }, None)
//!         .await?;
//!     println!("10 kg costs {} cents", quote.price_usd_cents);
//!
//!     // Keep the options around to retry with the same idempotency key.
//!     let opts = RequestOptions::new().with_generated_idempotency_key();
//!     let order = client.place_order(&PlaceOrderOptions::by_amount(10.0), Some(&opts)).await?;
//!     println!("Order {} is {:?}", order.id, order.state);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Client Configuration
//!
//! ```rust,ignore
//! use cnaught::api::CNaughtApiClient;
//! use std::time::Duration;
//!
//! let client = CNaughtApiClient::builder("api-key")
//!     .hostname("api.sandbox.example.com")
//!     .timeout(Duration::from_secs(60))
//!     .build()?;
//! ```
//!
//! # Error Handling
//!
//! All methods return `ApiResult<T>`. API failures carry RFC 7807 problem
//! details; branch on the problem kind:
//!
//! ```rust,ignore
//! use cnaught::{ApiError, ProblemKind};
//!
//! match client.get_order_details("unknown", None).await {
//!     Ok(order) => println!("Found order {}", order.order_number),
//!     Err(e) if e.problem_kind() == Some(&ProblemKind::NotFound) => println!("No such order"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

pub mod client;
pub mod types;

// Re-export main types for convenience
pub use client::{CNaughtApiClient, CNaughtApiClientBuilder};
pub use types::*;
