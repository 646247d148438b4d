//! Application configuration module
//!
//! Provides the configuration for reaching the remote document store.

use thiserror::Error;

/// Default document store URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Resource path of the cart document on the remote store
pub const CART_DOCUMENT_PATH: &str = "/cart.json";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    server_url: String,
}

impl Default for Config {
    fn default() -> Self {
        let server_url = std::env::var("CARTSYNC_API_URL")
            .unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self { server_url }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new ConfigBuilder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Get the full URL for a document path
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    /// Base URL of the remote document store
    pub fn server_url(&self) -> &str {
        &self.server_url
    }
}

/// Builder for Config
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    server_url: Option<String>,
}

impl ConfigBuilder {
    /// Set the document store URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        let server_url = self
            .server_url
            .ok_or(ConfigError::MissingValue("server_url"))?;
        if !server_url.starts_with("http://") && !server_url.starts_with("https://") {
            return Err(ConfigError::InvalidUrl(server_url));
        }
        // A trailing slash would double up when joined with a document path.
        Ok(Config {
            server_url: server_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = Config::builder()
            .server_url("http://localhost:8080")
            .build()
            .unwrap();
        assert_eq!(config.server_url(), "http://localhost:8080");
    }

    #[test]
    fn test_builder_strips_trailing_slash() {
        let config = Config::builder()
            .server_url("http://localhost:8080/")
            .build()
            .unwrap();
        assert_eq!(
            config.api_url(CART_DOCUMENT_PATH),
            "http://localhost:8080/cart.json"
        );
    }

    #[test]
    fn test_builder_rejects_bad_scheme() {
        let result = Config::builder().server_url("localhost:8080").build();
        assert!(matches!(result, Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_builder_requires_url() {
        let result = Config::builder().build();
        assert!(matches!(result, Err(ConfigError::MissingValue("server_url"))));
    }

    #[test]
    fn test_api_url() {
        let config = Config::builder()
            .server_url("http://127.0.0.1:3000")
            .build()
            .unwrap();
        assert_eq!(
            config.api_url("/cart.json"),
            "http://127.0.0.1:3000/cart.json"
        );
    }
}
