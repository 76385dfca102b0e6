use crate::domain::ports::{CatalogService, StockService};
use crate::domain::product::{Product, ProductId, StockLevel};
use crate::error::{CartError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// HTTP client for the remote catalog and stock services.
///
/// One instance implements both read ports against the same base URL,
/// sharing a `reqwest::Client` connection pool. Transport failures and
/// non-success statuses are reported uniformly as `RemoteFetch`.
#[derive(Clone)]
pub struct RemoteCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| CartError::RemoteFetch(e.to_string()))?;

        response
            .json()
            .await
            .map_err(|e| CartError::RemoteFetch(e.to_string()))
    }
}

#[async_trait]
impl StockService for RemoteCatalog {
    async fn stock_level(&self, product_id: ProductId) -> Result<StockLevel> {
        self.get_json(&format!("stock/{product_id}")).await
    }
}

#[async_trait]
impl CatalogService for RemoteCatalog {
    async fn product(&self, product_id: ProductId) -> Result<Product> {
        self.get_json(&format!("products/{product_id}")).await
    }

    async fn products(&self) -> Result<Vec<Product>> {
        self.get_json("products").await
    }
}
