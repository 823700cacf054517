//! Network constants for the CNaught SDK.

/// Default REST API base URL, including the API version prefix.
pub const DEFAULT_API_URL: &str = "https://api.cnaught.com/v1";

/// Default API hostname.
pub const DEFAULT_API_HOSTNAME: &str = "api.cnaught.com";

/// API version path segment used by [`DEFAULT_API_URL`].
pub const DEFAULT_API_VERSION: &str = "v1";

/// User-Agent sent with every request.
pub const USER_AGENT: &str = concat!("CNaught-RustSDK/", env!("CARGO_PKG_VERSION"));
