//! Storefront settings.

use catalog_data::DEFAULT_API_URL;
use catalog_observability::LogFormat;

/// Settings read from Spin variables (`api_url`, `kv_store`, `log_format`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Product API endpoint.
    pub api_url: String,
    /// Key-value store name; `None` opens the default store.
    pub kv_store: Option<String>,
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            kv_store: None,
            log_format: LogFormat::Json,
        }
    }
}

impl StorefrontConfig {
    /// Build from a variable lookup. Missing or blank values keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Self {
            api_url: get("api_url").unwrap_or(defaults.api_url),
            kv_store: get("kv_store").filter(|name| name != "default"),
            log_format: get("log_format")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_format),
        }
    }

    /// Read from the component's Spin variables.
    #[cfg(target_arch = "wasm32")]
    pub fn from_variables() -> Self {
        Self::from_lookup(|name| spin_sdk::variables::get(name).ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(StorefrontConfig::from_lookup(lookup(&[])), StorefrontConfig::default());
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("api_url", "https://catalog.internal/products"),
            ("kv_store", "catalog"),
            ("log_format", "human"),
        ]));

        assert_eq!(config.api_url, "https://catalog.internal/products");
        assert_eq!(config.kv_store.as_deref(), Some("catalog"));
        assert_eq!(config.log_format, LogFormat::Human);
    }

    #[test]
    fn test_blank_and_invalid_values_fall_back() {
        let config = StorefrontConfig::from_lookup(lookup(&[
            ("api_url", "  "),
            ("kv_store", "default"),
            ("log_format", "yaml"),
        ]));
        assert_eq!(config, StorefrontConfig::default());
    }
}
