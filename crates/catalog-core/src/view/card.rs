//! Catalog card view model.

use serde::Serialize;

use crate::product::Product;

/// Titles longer than this many characters are truncated on cards.
pub const TITLE_MAX_CHARS: usize = 50;

const ELLIPSIS: &str = "...";

/// A product card, ready for display.
///
/// Built from fetch-sourced data, which is trusted for value ranges.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub id: i64,
    /// Possibly truncated title.
    pub title: String,
    /// Untruncated title (for `alt` text and tooltips).
    pub full_title: String,
    pub category: String,
    /// Price with exactly two decimals, without currency symbol.
    pub price: String,
    /// Rating with one decimal.
    pub rating: String,
    pub rating_count: u64,
    pub image: String,
}

impl CardView {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: truncate_title(&product.title),
            full_title: product.title.clone(),
            category: product.category.clone(),
            price: format!("{:.2}", product.price),
            rating: format!("{:.1}", product.rating.rate),
            rating_count: product.rating.count,
            image: product.image.clone(),
        }
    }

    /// Cards for a whole view list, in order.
    pub fn from_view(view: &[Product]) -> Vec<Self> {
        view.iter().map(Self::from_product).collect()
    }
}

/// Truncate to [`TITLE_MAX_CHARS`] characters plus an ellipsis marker.
pub fn truncate_title(title: &str) -> String {
    if title.chars().count() > TITLE_MAX_CHARS {
        let mut truncated: String = title.chars().take(TITLE_MAX_CHARS).collect();
        truncated.push_str(ELLIPSIS);
        truncated
    } else {
        title.to_string()
    }
}
