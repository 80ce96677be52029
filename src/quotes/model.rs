use serde::{Deserialize, Serialize};
use std::fmt;

/// Key under which a successful quote is serialized.
pub const SUCCESS_KEY: &str = "Arnie Quote";
/// Key under which any failure is serialized.
pub const FAILURE_KEY: &str = "FAILURE";
/// Reason used when the transport call itself failed.
pub const FAILED_RESPONSE: &str = "FAILED RESPONSE";
/// Reason used when the body is not JSON or has no string `message`.
pub const MALFORMED_DATA: &str = "MALFORMED DATA";

/// The outcome of fetching one quote URL.
///
/// Serializes as a single-key JSON object:
/// `{"Arnie Quote": "..."}` on success, `{"FAILURE": "..."}` otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteResult {
    /// Status 200 with a well-formed payload; carries the quote text.
    #[serde(rename = "Arnie Quote")]
    Success(String),
    /// Anything else; carries the server message or a sentinel reason.
    #[serde(rename = "FAILURE")]
    Failure(String),
}

impl QuoteResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn failure(reason: impl Into<String>) -> Self {
        Self::Failure(reason.into())
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// The carried text: the quote on success, the reason on failure.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Success(m) | Self::Failure(m) => m,
        }
    }

    /// The serialized key for this variant.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Success(_) => SUCCESS_KEY,
            Self::Failure(_) => FAILURE_KEY,
        }
    }
}

impl fmt::Display for QuoteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key(), self.message())
    }
}
