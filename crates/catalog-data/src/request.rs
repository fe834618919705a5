//! HTTP request builder.

use std::collections::HashMap;

use crate::FetchError;

/// A GET request under construction.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
}

impl RequestBuilder {
    /// Create a GET request builder.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HashMap::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Set the Accept header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }

    /// Check that the URL is absolute `http` or `https`.
    pub(crate) fn validate(&self) -> Result<(), FetchError> {
        let parsed = url::Url::parse(&self.url)?;
        match parsed.scheme() {
            "http" | "https" => Ok(()),
            other => Err(FetchError::InvalidUrl(format!(
                "unsupported scheme `{other}` in {}",
                self.url
            ))),
        }
    }
}
