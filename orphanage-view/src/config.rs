//! View configuration

use orphanage_client::{ClientConfig, NetworkHttpClient, OrphanageApi, network_api};

use crate::error::{ViewError, ViewResult};

/// Detail view configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewConfig {
    /// Data-access client settings
    pub client: ClientConfig,
    /// Map tile access token (only the tile URL uses it)
    pub mapbox_token: String,
}

impl ViewConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `MAPBOX_TOKEN` plus everything [`ClientConfig::from_env`] reads.
    /// Loading a `.env` file is left to the binary.
    pub fn from_env() -> Self {
        Self {
            client: ClientConfig::from_env(),
            mapbox_token: std::env::var("MAPBOX_TOKEN").unwrap_or_default(),
        }
    }

    pub fn with_client(mut self, client: ClientConfig) -> Self {
        self.client = client;
        self
    }

    pub fn with_mapbox_token(mut self, token: impl Into<String>) -> Self {
        self.mapbox_token = token.into();
        self
    }

    /// Reject settings the client cannot work with
    pub fn validate(&self) -> ViewResult<()> {
        let base = self.client.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ViewError::Config(format!(
                "API base URL must be http(s): {:?}",
                self.client.base_url
            )));
        }
        if self.client.timeout == 0 {
            return Err(ViewError::Config("timeout must be at least 1 second".into()));
        }
        Ok(())
    }

    /// Validate and build the network-backed data source
    pub fn connect(&self) -> ViewResult<OrphanageApi<NetworkHttpClient>> {
        self.validate()?;
        if self.mapbox_token.is_empty() {
            tracing::warn!("MAPBOX_TOKEN not set, map tiles will not load");
        }
        Ok(network_api(&self.client)?)
    }

    /// Render-time settings derived from this configuration
    pub fn render_config(&self) -> crate::render::RenderConfig {
        crate::render::RenderConfig {
            mapbox_token: self.mapbox_token.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let config = ViewConfig::default();
        assert!(config.validate().is_ok());

        let config = ViewConfig::default().with_client(ClientConfig::new("ftp://x"));
        assert!(matches!(config.validate(), Err(ViewError::Config(_))));

        let config =
            ViewConfig::default().with_client(ClientConfig::new("http://x").with_timeout(0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_connect_validates_first() {
        let config = ViewConfig::default().with_client(ClientConfig::new("ftp://x"));
        assert!(matches!(config.connect(), Err(ViewError::Config(_))));

        let config = ViewConfig::default()
            .with_client(ClientConfig::new("http://127.0.0.1:3333/").with_timeout(5));
        let api = config.connect().unwrap();
        assert_eq!(api.http().base_url(), "http://127.0.0.1:3333");
    }

    #[test]
    fn test_render_config_carries_token() {
        let config = ViewConfig::default().with_mapbox_token("abc");
        assert_eq!(config.render_config().mapbox_token, "abc");
    }
}
