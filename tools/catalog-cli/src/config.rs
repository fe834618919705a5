//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use catalog_cache::SELECTION_SLOT;
use catalog_core::SortOrder;
use catalog_data::DEFAULT_API_URL;

/// Config file names looked up from the working directory upwards.
pub const CONFIG_NAMES: [&str; 3] = ["catalog.toml", ".catalog.toml", "catalog.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// Product source.
    #[serde(default)]
    pub source: SourceConfig,

    /// Selection store.
    #[serde(default)]
    pub store: StoreConfig,

    /// Criteria applied when a flag is not given.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Endpoint returning the product array.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// JSON file holding the key-value store, relative to the working directory.
    #[serde(default = "default_store_path")]
    pub path: String,

    /// Key of the selection slot.
    #[serde(default = "default_slot")]
    pub slot: String,
}

fn default_store_path() -> String {
    ".catalog/store.json".to_string()
}

fn default_slot() -> String {
    SELECTION_SLOT.to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
            slot: default_slot(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Sort wire name (`price-asc`, `name-desc`, ...). Unknown means none.
    #[serde(default)]
    pub sort: String,

    /// Category to filter by; empty means all.
    #[serde(default)]
    pub category: String,
}

impl DefaultsConfig {
    pub fn sort_order(&self) -> SortOrder {
        SortOrder::parse(&self.sort)
    }
}

/// Generate a default catalog.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Catalog CLI configuration

[source]
api_url = "{api_url}"

[store]
# JSON file backing the selection slot
path = "{path}"
slot = "{slot}"

[defaults]
# none, price-asc, price-desc, name-asc, name-desc
sort = "none"
# empty means all categories
category = ""
"#,
        api_url = DEFAULT_API_URL,
        path = default_store_path(),
        slot = SELECTION_SLOT
    )
}
