//! Core components of the `arnie-quotes` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`Transport`] capability and its [`RawResponse`] payload.
//! - The default [`QuoteClient`] and its builder.
//! - The [`QuoteError`] type.

/// The default client (`QuoteClient`), builder, and configuration.
pub mod client;
/// The error type (`QuoteError`) for transport-level failures.
pub mod error;
/// The transport capability consumed by batch fetching.
pub mod transport;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::QuoteClient`
pub use client::{QuoteClient, QuoteClientBuilder};
pub use error::QuoteError;
pub use transport::{RawResponse, Transport, TransportFuture};
