#![allow(dead_code)]

use arnie_quotes::{QuoteClient, QuoteError, RawResponse, Transport, TransportFuture};
use httpmock::{Method::GET, Mock, MockServer};
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Barrier;
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

/// A client whose relative request strings resolve against the mock server.
pub fn client_for(server: &MockServer) -> QuoteClient {
    QuoteClient::builder()
        .base_url(Url::parse(&format!("{}/", server.base_url())).unwrap())
        .build()
        .unwrap()
}

pub fn mock_quote<'a>(server: &'a MockServer, path: &'a str, status: u16, body: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(status)
            .header("content-type", "application/json")
            .body(body);
    })
}

#[derive(Clone)]
enum Script {
    Respond { status: u16, body: String, delay: Duration },
    Fail { delay: Duration },
}

/// In-memory transport answering from a per-URL script.
///
/// Unknown URLs fail like a refused connection.
#[derive(Default)]
pub struct ScriptedTransport {
    scripts: HashMap<String, Script>,
    calls: AtomicUsize,
    barrier: Option<Arc<Barrier>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, url: &str, status: u16, body: &str) -> Self {
        self.respond_after(url, status, body, Duration::ZERO)
    }

    pub fn respond_after(mut self, url: &str, status: u16, body: &str, delay: Duration) -> Self {
        self.scripts.insert(
            url.to_string(),
            Script::Respond {
                status,
                body: body.to_string(),
                delay,
            },
        );
        self
    }

    pub fn fail(self, url: &str) -> Self {
        self.fail_after(url, Duration::ZERO)
    }

    pub fn fail_after(mut self, url: &str, delay: Duration) -> Self {
        self.scripts.insert(url.to_string(), Script::Fail { delay });
        self
    }

    /// Every call parks until `n` calls are in flight at once.
    pub fn rendezvous(mut self, n: usize) -> Self {
        self.barrier = Some(Arc::new(Barrier::new(n)));
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Transport for ScriptedTransport {
    fn get<'a>(&'a self, url: &'a str) -> TransportFuture<'a> {
        Box::pin(async move {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(b) = &self.barrier {
                b.wait().await;
            }

            match self.scripts.get(url).cloned() {
                Some(Script::Respond {
                    status,
                    body,
                    delay,
                }) => {
                    tokio::time::sleep(delay).await;
                    Ok(RawResponse::new(status, body))
                }
                Some(Script::Fail { delay }) => {
                    tokio::time::sleep(delay).await;
                    Err(QuoteError::Transport(format!("connection reset: {url}")))
                }
                None => Err(QuoteError::Transport(format!("connection refused: {url}"))),
            }
        })
    }
}
