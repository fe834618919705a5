//! CLI command implementations.

pub mod categories;
pub mod config;
pub mod list;
pub mod select;
pub mod show;

use clap::{Args, Subcommand};

use catalog_core::{SortOrder, ViewCriteria};

use crate::config::DefaultsConfig;

/// Search, category and sort options shared by `list` and `select`.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Case-insensitive title search.
    #[arg(short, long)]
    pub search: Option<String>,

    /// Exact category to keep.
    #[arg(long)]
    pub category: Option<String>,

    /// Sort order: none, price-asc, price-desc, name-asc, name-desc.
    #[arg(long)]
    pub sort: Option<String>,
}

impl FilterArgs {
    /// Criteria from the flags, falling back to the configured defaults.
    pub fn criteria(&self, defaults: &DefaultsConfig) -> ViewCriteria {
        let sort = match &self.sort {
            Some(sort) => SortOrder::parse(sort),
            None => defaults.sort_order(),
        };
        ViewCriteria::new()
            .with_search(self.search.clone().unwrap_or_default())
            .with_category(
                self.category
                    .clone()
                    .unwrap_or_else(|| defaults.category.clone()),
            )
            .with_sort(sort)
    }
}

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for the select command.
#[derive(Args)]
pub struct SelectArgs {
    /// Product id; omit to pick interactively.
    pub id: Option<i64>,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let defaults = DefaultsConfig {
            sort: "name-asc".to_string(),
            category: "clothing".to_string(),
        };

        let from_defaults = FilterArgs::default().criteria(&defaults);
        assert_eq!(from_defaults.category, "clothing");
        assert_eq!(from_defaults.sort_order, SortOrder::NameAsc);
        assert_eq!(from_defaults.search_term, "");

        let flags = FilterArgs {
            search: Some("mouse".to_string()),
            category: Some(String::new()),
            sort: Some("price-desc".to_string()),
        };
        let criteria = flags.criteria(&defaults);
        assert_eq!(criteria.search_term, "mouse");
        assert_eq!(criteria.category, "");
        assert_eq!(criteria.sort_order, SortOrder::PriceDesc);
    }
}
