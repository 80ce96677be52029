use thiserror::Error;

/// The error type for transport-level operations in this crate.
///
/// Batch fetching never surfaces this to callers; it is folded into a
/// [`QuoteResult::Failure`](crate::QuoteResult::Failure) per URL.
#[derive(Debug, Error)]
pub enum QuoteError {
    /// An error occurred during an HTTP request or while reading its body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// An opaque failure reported by a custom transport.
    #[error("Transport failure: {0}")]
    Transport(String),
}
