mod api;
mod model;
mod wire;

pub use api::{classify, fetch_quotes};
pub use model::{FAILED_RESPONSE, FAILURE_KEY, MALFORMED_DATA, QuoteResult, SUCCESS_KEY};

use crate::core::Transport;

/// Builder for a batch of quote URLs fetched through one transport.
pub struct QuotesBuilder<'a, T: Transport + ?Sized> {
    transport: &'a T,
    urls: Vec<String>,
}

impl<'a, T: Transport + ?Sized> QuotesBuilder<'a, T> {
    /// Start an empty batch that fetches through `transport`.
    pub fn new(transport: &'a T) -> Self {
        Self {
            transport,
            urls: Vec::new(),
        }
    }

    /// Set the URLs to query, replacing any already added.
    #[must_use]
    pub fn urls<I, S>(mut self, urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.urls = urls.into_iter().map(Into::into).collect();
        self
    }

    /// Add a single URL.
    #[must_use]
    pub fn add_url(mut self, url: impl Into<String>) -> Self {
        self.urls.push(url.into());
        self
    }

    /// Execute the batch. See [`fetch_quotes`].
    pub async fn fetch(self) -> Vec<QuoteResult> {
        fetch_quotes(self.transport, &self.urls).await
    }
}
