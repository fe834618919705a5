//! Product store: the catalog snapshot plus the current view.

use crate::product::Product;
use crate::search::{derive, distinct_categories, SortOrder, ViewCriteria};

/// Owns the authoritative catalog snapshot and the criteria currently applied.
///
/// The snapshot is immutable once the store is built. Every criteria change
/// recomputes the view from the snapshot through [`derive`].
#[derive(Debug, Clone, Default)]
pub struct ProductStore {
    snapshot: Vec<Product>,
    criteria: ViewCriteria,
    view: Vec<Product>,
}

impl ProductStore {
    /// Build a store from a freshly fetched catalog.
    pub fn new(snapshot: Vec<Product>) -> Self {
        Self::with_criteria(snapshot, ViewCriteria::default())
    }

    /// Build a store and apply initial criteria.
    pub fn with_criteria(snapshot: Vec<Product>, criteria: ViewCriteria) -> Self {
        let view = derive(&snapshot, &criteria);
        Self {
            snapshot,
            criteria,
            view,
        }
    }

    /// The authoritative catalog, in fetch order.
    pub fn snapshot(&self) -> &[Product] {
        &self.snapshot
    }

    /// The criteria behind the current view.
    pub fn criteria(&self) -> &ViewCriteria {
        &self.criteria
    }

    /// The current view list.
    pub fn view(&self) -> &[Product] {
        &self.view
    }

    /// Replace all criteria and recompute the view.
    pub fn set_criteria(&mut self, criteria: ViewCriteria) -> &[Product] {
        self.criteria = criteria;
        self.refresh()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> &[Product] {
        self.criteria.search_term = term.into();
        self.refresh()
    }

    pub fn set_category(&mut self, category: impl Into<String>) -> &[Product] {
        self.criteria.category = category.into();
        self.refresh()
    }

    pub fn set_sort_order(&mut self, order: SortOrder) -> &[Product] {
        self.criteria.sort_order = order;
        self.refresh()
    }

    /// Distinct categories of the snapshot, in first-seen order.
    pub fn categories(&self) -> Vec<String> {
        distinct_categories(&self.snapshot)
    }

    /// Look a product up by id in the snapshot.
    pub fn find(&self, id: i64) -> Option<&Product> {
        self.snapshot.iter().find(|p| p.id == id)
    }

    /// Number of products in the snapshot.
    pub fn len(&self) -> usize {
        self.snapshot.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.is_empty()
    }

    fn refresh(&mut self) -> &[Product] {
        self.view = derive(&self.snapshot, &self.criteria);
        &self.view
    }
}

/// Lifecycle of the catalog on a page.
///
/// Criteria changes are only meaningful once a snapshot exists; while
/// loading (or after a failed fetch) they are ignored.
#[derive(Debug, Clone, Default)]
pub enum CatalogState {
    /// The fetch has not completed yet.
    #[default]
    Loading,
    /// The snapshot is available.
    Ready(ProductStore),
    /// The fetch failed; holds the user-facing reason.
    Failed(String),
}

impl CatalogState {
    /// Wrap a fetched catalog.
    pub fn ready(snapshot: Vec<Product>, criteria: ViewCriteria) -> Self {
        CatalogState::Ready(ProductStore::with_criteria(snapshot, criteria))
    }

    /// The store, once ready.
    pub fn store(&self) -> Option<&ProductStore> {
        match self {
            CatalogState::Ready(store) => Some(store),
            _ => None,
        }
    }

    /// Apply criteria; returns the new view, or `None` when there is no snapshot.
    pub fn apply(&mut self, criteria: ViewCriteria) -> Option<&[Product]> {
        match self {
            CatalogState::Ready(store) => Some(store.set_criteria(criteria)),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, CatalogState::Loading)
    }
}
