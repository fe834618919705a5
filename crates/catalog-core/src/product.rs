//! Product records as served by the remote catalog API.

use serde::{Deserialize, Serialize};

/// Aggregate customer rating of a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Rating {
    /// Average rating, nominally 0–5.
    #[serde(default)]
    pub rate: f64,
    /// Number of ratings.
    #[serde(default)]
    pub count: u64,
}

impl Rating {
    pub fn new(rate: f64, count: u64) -> Self {
        Self { rate, count }
    }
}

/// A product in the catalog.
///
/// Field names follow the remote API so the record can be deserialized
/// directly from the fetch response and written back unchanged into the
/// selection slot. Missing fields fall back to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Product {
    /// Identifier, unique within one fetch batch.
    #[serde(default)]
    pub id: i64,
    /// Product title.
    #[serde(default)]
    pub title: String,
    /// Unit price.
    #[serde(default)]
    pub price: f64,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Category label.
    #[serde(default)]
    pub category: String,
    /// Image URL (untrusted).
    #[serde(default)]
    pub image: String,
    /// Customer rating.
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// Create a product with the fields the catalog filters on.
    pub fn new(id: i64, title: impl Into<String>, price: f64, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            category: category.into(),
            ..Default::default()
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the rating.
    pub fn with_rating(mut self, rate: f64, count: u64) -> Self {
        self.rating = Rating::new(rate, count);
        self
    }
}
