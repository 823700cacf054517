//! Request and response types for the CNaught REST API.
//!
//! Records are plain serde structs. Response types are not validated beyond
//! what deserialization enforces; optional members default to `None` or empty.

pub mod checkout;
pub mod impact;
pub mod list;
pub mod order;
pub mod project;
pub mod quote;
pub mod subaccount;

// Re-export all types for convenience
pub use checkout::*;
pub use impact::*;
pub use list::*;
pub use order::*;
pub use project::*;
pub use quote::*;
pub use subaccount::*;
