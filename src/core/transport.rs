use std::sync::Arc;

use crate::core::QuoteError;

/// The settled payload of one fetch: HTTP status plus the raw body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The response body, unparsed.
    pub body: String,
}

impl RawResponse {
    /// Creates a response from a status code and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Boxed future returned by [`Transport::get`].
pub type TransportFuture<'a> = core::pin::Pin<
    Box<dyn core::future::Future<Output = Result<RawResponse, QuoteError>> + Send + 'a>,
>;

/// A capability that can fetch a single URL.
///
/// This abstracts the network away from the batch reconciliation logic, making it
/// possible to plug in scripted transports for tests or alternative HTTP stacks.
/// It is implemented by [`QuoteClient`](crate::QuoteClient).
///
/// Any HTTP status, including 4xx/5xx, must be returned as `Ok`; an `Err` means the
/// call itself failed (connection refused, unreadable body, bad URL).
pub trait Transport: Send + Sync {
    /// Asynchronously fetches `url` and returns its status and body.
    fn get<'a>(&'a self, url: &'a str) -> TransportFuture<'a>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get<'a>(&'a self, url: &'a str) -> TransportFuture<'a> {
        (**self).get(url)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get<'a>(&'a self, url: &'a str) -> TransportFuture<'a> {
        (**self).get(url)
    }
}
