//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use catalog_cache::SelectionBridge;
use catalog_core::{ProductStore, ViewCriteria};
use catalog_data::CatalogSource;

use crate::config::{CliConfig, CONFIG_NAMES};
use crate::output::Output;
use crate::store::FileStore;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Where the configuration was loaded from, if anywhere.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => (CliConfig::load(path)?, Some(PathBuf::from(path))),
            None => match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            },
        };

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Open the configured file store.
    pub fn open_store(&self) -> Result<FileStore> {
        let path = self.resolve_path(&self.config.store.path);
        self.output.debug(&format!("Store: {}", path.display()));
        let store = FileStore::open(&path)
            .with_context(|| format!("Failed to open store: {}", path.display()))?;
        Ok(store.with_output(self.output.clone()))
    }

    /// The selection slot over an opened store.
    pub fn selection<'a>(&self, store: &'a FileStore) -> SelectionBridge<&'a FileStore> {
        SelectionBridge::with_slot(store, self.config.store.slot.as_str())
    }

    /// Fetch the catalog behind a spinner and apply `criteria`.
    pub async fn load_catalog(&self, criteria: ViewCriteria) -> Result<ProductStore> {
        let source = CatalogSource::new(self.config.source.api_url.as_str());
        self.output.debug(&format!("Fetching {}", source.url()));

        let spinner = self.output.spinner("Cargando productos...");
        let fetched = source.fetch_catalog().await;
        spinner.finish_and_clear();

        let snapshot = fetched.context("Error al cargar productos")?;
        self.output
            .debug(&format!("Fetched {} products", snapshot.len()));
        Ok(ProductStore::with_criteria(snapshot, criteria))
    }
}

/// Find a config file in the directory tree above `start`.
fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                    return Some((config, config_path));
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}
