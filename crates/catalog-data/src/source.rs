//! The remote product source.

use catalog_core::Product;

use crate::{FetchClient, FetchError, Response};

/// Product API used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://fakestoreapi.com/products";

/// Read-only endpoint returning a JSON array of products.
#[derive(Debug, Clone)]
pub struct CatalogSource {
    url: String,
    client: FetchClient,
}

impl Default for CatalogSource {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl CatalogSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: FetchClient::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the catalog snapshot. One request, no retry.
    pub async fn fetch_catalog(&self) -> Result<Vec<Product>, FetchError> {
        let response = self
            .client
            .get(self.url.as_str())
            .accept("application/json")
            .send()
            .await?;
        let products = parse_catalog(response)?;
        tracing::debug!(url = %self.url, count = products.len(), "catalog fetched");
        Ok(products)
    }
}

/// Turn a buffered response into a snapshot.
///
/// Non-2xx statuses and bodies that are not an array of products both fail.
pub fn parse_catalog(response: Response) -> Result<Vec<Product>, FetchError> {
    response.error_for_status()?.json()
}
