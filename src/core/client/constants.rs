//! Centralized defaults for the HTTP client.

/// Default UA sent with every quote request.
pub(crate) const USER_AGENT: &str = concat!("arnie-quotes/", env!("CARGO_PKG_VERSION"));

/// Accept header value; quote endpoints answer with JSON.
pub(crate) const ACCEPT_JSON: &str = "application/json";
