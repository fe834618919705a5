//! View criteria: the three independent filter/sort axes.

use serde::{Deserialize, Serialize};

/// Sort options for the view list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Keep the catalog's original order.
    #[default]
    None,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by title A-Z.
    NameAsc,
    /// Sort by title Z-A.
    NameDesc,
}

impl SortOrder {
    /// Every sort order, in selector order.
    pub const ALL: [SortOrder; 5] = [
        SortOrder::None,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
        SortOrder::NameAsc,
        SortOrder::NameDesc,
    ];

    /// Wire name used in query strings, forms and config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::None => "none",
            SortOrder::PriceAsc => "price-asc",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::NameAsc => "name-asc",
            SortOrder::NameDesc => "name-desc",
        }
    }

    /// Parse a wire name. Unknown or empty values mean no sorting.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "price-asc" => SortOrder::PriceAsc,
            "price-desc" => SortOrder::PriceDesc,
            "name-asc" => SortOrder::NameAsc,
            "name-desc" => SortOrder::NameDesc,
            _ => SortOrder::None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::None => "Ordenar por...",
            SortOrder::PriceAsc => "Precio: menor a mayor",
            SortOrder::PriceDesc => "Precio: mayor a menor",
            SortOrder::NameAsc => "Nombre: A-Z",
            SortOrder::NameDesc => "Nombre: Z-A",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The user's current filter and sort choices.
///
/// Empty strings mean "no constraint on this axis".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewCriteria {
    /// Free text matched against product titles.
    pub search_term: String,
    /// Exact category label, or empty for all categories.
    pub category: String,
    /// Sort applied after filtering.
    pub sort_order: SortOrder,
}

impl ViewCriteria {
    /// Criteria with no constraints.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term.
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the sort order.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort_order = sort;
        self
    }

    /// The lower-cased, trimmed search term, or `None` when it is blank.
    pub fn normalized_search(&self) -> Option<String> {
        let term = self.search_term.trim();
        if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        }
    }

    /// The category filter, or `None` when empty.
    pub fn category_filter(&self) -> Option<&str> {
        if self.category.is_empty() {
            None
        } else {
            Some(self.category.as_str())
        }
    }

    /// Whether these criteria leave the catalog untouched.
    pub fn is_unconstrained(&self) -> bool {
        self.normalized_search().is_none()
            && self.category_filter().is_none()
            && self.sort_order == SortOrder::None
    }
}
