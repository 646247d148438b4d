//! Remote Sync Gateway
//!
//! The cart lives remotely as a single JSON document at a fixed resource
//! path. [`CartGateway`] is the seam the sync service talks through;
//! [`HttpGateway`] is the production implementation, speaking plain
//! GET/PUT with reqwest. Tests substitute in-memory implementations.

use crate::config::{Config, CART_DOCUMENT_PATH};
use crate::shared::{CartState, SyncError};
use async_trait::async_trait;
use reqwest::Client;

/// Read/write access to the remotely stored cart document.
#[async_trait]
pub trait CartGateway: Send + Sync {
    /// Fetch the stored cart. `Ok(None)` means the document has never been
    /// written (the store serves a JSON `null`).
    async fn fetch_cart(&self) -> Result<Option<CartState>, SyncError>;

    /// Replace the stored cart document with `cart`.
    async fn store_cart(&self, cart: &CartState) -> Result<(), SyncError>;
}

/// HTTP implementation of [`CartGateway`].
#[derive(Debug, Clone)]
pub struct HttpGateway {
    config: Config,
    client: Client,
}

impl HttpGateway {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    fn document_url(&self) -> String {
        self.config.api_url(CART_DOCUMENT_PATH)
    }
}

#[async_trait]
impl CartGateway for HttpGateway {
    async fn fetch_cart(&self) -> Result<Option<CartState>, SyncError> {
        let url = self.document_url();
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            return Err(SyncError::transport(format!(
                "GET failed: {} - {}",
                status, error_text
            )));
        }

        let body = response.text().await?;
        let cart: Option<CartState> = serde_json::from_str(&body)?;
        Ok(cart)
    }

    async fn store_cart(&self, cart: &CartState) -> Result<(), SyncError> {
        let url = self.document_url();
        let response = self
            .client
            .put(&url)
            .header("Content-Type", "application/json")
            .json(cart)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            return Err(SyncError::transport(format!(
                "PUT failed: {} - {}",
                status, error_text
            )));
        }

        Ok(())
    }
}
