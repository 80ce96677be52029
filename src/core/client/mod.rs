//! Public client surface + builder.
//! Defaults live in `constants`.

mod constants;

use crate::core::{QuoteError, RawResponse, Transport, TransportFuture, net};
use constants::{ACCEPT_JSON, USER_AGENT};
use reqwest::Client;
use url::Url;

/// The default [`Transport`], backed by a `reqwest` client.
#[derive(Debug, Clone)]
pub struct QuoteClient {
    http: Client,
    base_url: Option<Url>,
}

impl Default for QuoteClient {
    fn default() -> Self {
        Self {
            http: Client::builder()
                .user_agent(USER_AGENT)
                .build()
                .unwrap_or_default(),
            base_url: None,
        }
    }
}

impl QuoteClient {
    /// Create a new builder.
    pub fn builder() -> QuoteClientBuilder {
        QuoteClientBuilder::default()
    }

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// The base URL relative request strings are joined onto, if any.
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    /// Turn a request string into an absolute URL.
    ///
    /// Absolute strings pass through unchanged; relative ones need a base URL.
    pub(crate) fn resolve(&self, raw: &str) -> Result<Url, QuoteError> {
        match &self.base_url {
            Some(base) => Ok(base.join(raw)?),
            None => Ok(Url::parse(raw)?),
        }
    }

    async fn get_raw(&self, raw: &str) -> Result<RawResponse, QuoteError> {
        let url = self.resolve(raw)?;
        let resp = self
            .http()
            .get(url.clone())
            .header("accept", ACCEPT_JSON)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let body = net::get_text(resp, url.as_str()).await?;
        Ok(RawResponse { status, body })
    }
}

impl Transport for QuoteClient {
    fn get<'a>(&'a self, url: &'a str) -> TransportFuture<'a> {
        Box::pin(self.get_raw(url))
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct QuoteClientBuilder {
    user_agent: Option<String>,
    base_url: Option<Url>,
    http: Option<Client>,
}

impl QuoteClientBuilder {
    /// Override the User-Agent. Ignored when a prebuilt client is supplied.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Resolve relative request strings against this base (e.g., `https://quotes.example.com/`).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Use a preconfigured `reqwest::Client` instead of building one.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    /// Build the client, creating a `reqwest::Client` unless one was supplied.
    pub fn build(self) -> Result<QuoteClient, QuoteError> {
        let http = match self.http {
            Some(c) => c,
            None => reqwest::Client::builder()
                .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
                .build()?,
        };

        Ok(QuoteClient {
            http,
            base_url: self.base_url,
        })
    }
}
