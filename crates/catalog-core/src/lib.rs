//! Catalog domain types and view logic for the catalog storefront.
//!
//! This crate provides the pieces that do not touch the network or storage:
//!
//! - **Products**: the API-shaped [`Product`] record and its [`Rating`]
//! - **Search**: [`ViewCriteria`], [`SortOrder`] and the pure [`derive`] engine
//! - **Store**: [`ProductStore`], which owns the catalog snapshot and the current view
//! - **Views**: display-ready [`CardView`] and sanitized [`DetailView`] models
//!
//! # Example
//!
//! ```rust
//! use catalog_core::prelude::*;
//!
//! let catalog = vec![
//!     Product::new(1, "Red Shirt", 20.0, "clothing"),
//!     Product::new(2, "Blue Mouse", 15.0, "electronics"),
//! ];
//!
//! let criteria = ViewCriteria::new()
//!     .with_category("electronics")
//!     .with_sort(SortOrder::PriceAsc);
//!
//! let view = derive(&catalog, &criteria);
//! assert_eq!(view.len(), 1);
//! assert_eq!(view[0].title, "Blue Mouse");
//! ```

pub mod error;
pub mod product;
pub mod search;
pub mod store;
pub mod view;

pub use error::{CatalogError, InvalidProductError};
pub use product::{Product, Rating};
pub use search::{category_label, derive, distinct_categories, SortOrder, ViewCriteria};
pub use store::{CatalogState, ProductStore};
pub use view::{CardView, DetailView};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CatalogError, InvalidProductError};
    pub use crate::product::{Product, Rating};
    pub use crate::search::{category_label, derive, distinct_categories, SortOrder, ViewCriteria};
    pub use crate::store::{CatalogState, ProductStore};
    pub use crate::view::{CardView, DetailView};
}
