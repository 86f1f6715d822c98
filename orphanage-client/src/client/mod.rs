//! Client module - HTTP transports.
//!
//! `NetworkHttpClient` talks to a remote server; `OneshotHttpClient`
//! (feature `in-process`) drives an axum Router in the same process.

pub mod http;
#[cfg(feature = "in-process")]
pub mod http_oneshot;

// Re-export main types
pub use http::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use http_oneshot::OneshotHttpClient;
