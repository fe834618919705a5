//! HTTP fetching for the catalog.
//!
//! [`FetchClient`] is a small builder-style client: Spin's outbound HTTP on
//! `wasm32`, `reqwest` natively. [`CatalogSource`] uses it to produce a
//! catalog snapshot from the remote product API.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_data::CatalogSource;
//!
//! let source = CatalogSource::new("https://fakestoreapi.com/products");
//! let snapshot = source.fetch_catalog().await?;
//! println!("{} products", snapshot.len());
//! ```

mod error;
mod request;
mod response;
mod source;

pub use error::FetchError;
pub use request::RequestBuilder;
pub use response::Response;
pub use source::{parse_catalog, CatalogSource, DEFAULT_API_URL};

/// HTTP client for outbound GET requests.
#[derive(Debug, Clone, Default)]
pub struct FetchClient {
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::Client,
}

impl FetchClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        ClientRequestBuilder {
            #[cfg(not(target_arch = "wasm32"))]
            http: self.http.clone(),
            builder: RequestBuilder::get(url),
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::Client,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Set the Accept header.
    pub fn accept(mut self, content_type: impl Into<String>) -> Self {
        self.builder = self.builder.accept(content_type);
        self
    }

    /// Send the request and buffer the response.
    #[cfg(target_arch = "wasm32")]
    pub async fn send(self) -> Result<Response, FetchError> {
        use spin_sdk::http::{Method, Request};

        self.builder.validate()?;

        let mut request = Request::builder();
        request.method(Method::Get).uri(self.builder.url.as_str());
        for (key, value) in &self.builder.headers {
            request.header(key.as_str(), value.as_str());
        }

        tracing::debug!(url = %self.builder.url, "sending request");
        let response: spin_sdk::http::Response = spin_sdk::http::send(request.build())
            .await
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        let status = *response.status();
        Ok(Response::new(status, response.into_body()))
    }

    /// Send the request and buffer the response.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn send(self) -> Result<Response, FetchError> {
        self.builder.validate()?;

        let mut request = self.http.get(self.builder.url.as_str());
        for (key, value) in &self.builder.headers {
            request = request.header(key.as_str(), value.as_str());
        }

        tracing::debug!(url = %self.builder.url, "sending request");
        let response = request.send().await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        Ok(Response::new(status, body))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{CatalogSource, FetchClient, FetchError, Response};
}
