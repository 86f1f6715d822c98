//! Orphanage Client - data access for the orphanages API
//!
//! Provides the read-only HTTP transports and the [`OrphanageSource`]
//! capability consumed by the detail view.

pub mod client;
pub mod config;
pub mod error;
pub mod orphanages;

pub use client::{HttpClient, NetworkHttpClient};
#[cfg(feature = "in-process")]
pub use client::OneshotHttpClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use orphanages::{OrphanageApi, OrphanageSource};

// Re-export shared types for convenience
pub use shared::{Orphanage, OrphanageId, OrphanageImage};

/// Build the network-backed orphanages API from configuration
pub fn network_api(config: &ClientConfig) -> ClientResult<OrphanageApi<NetworkHttpClient>> {
    Ok(OrphanageApi::new(config.build_http_client()?))
}
