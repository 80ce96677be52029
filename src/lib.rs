//! arnie-quotes: fetch a batch of quote URLs concurrently and get back one
//! uniform result record per URL, in input order.
//!
//! ```no_run
//! # async fn run() -> Result<(), arnie_quotes::QuoteError> {
//! let client = arnie_quotes::QuoteClient::builder().build()?;
//! let results = arnie_quotes::fetch_quotes(&client, ["https://quotes.example.com/1"]).await;
//! println!("{}", serde_json::to_string(&results).unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod quotes;

pub use crate::core::{QuoteClient, QuoteClientBuilder, QuoteError, RawResponse, Transport, TransportFuture};
pub use quotes::{
    FAILED_RESPONSE, FAILURE_KEY, MALFORMED_DATA, QuoteResult, QuotesBuilder, SUCCESS_KEY, classify,
    fetch_quotes,
};
