//! Selection slot: hands the chosen product from the catalog to the details view.
//!
//! The slot holds one serialized [`Product`]. Reads never fail on bad
//! content: a value that does not parse as a JSON object is reported as
//! [`Selection::Corrupt`] and deleted, so the next read sees
//! [`Selection::Absent`].

use catalog_core::{DetailView, Product};
use serde_json::Value;

use crate::{Cache, CacheError, KeyValueStore, SessionId};

/// Default slot name.
pub const SELECTION_SLOT: &str = "selected-product";

/// Outcome of reading the selection slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// The slot holds a JSON object. Its fields are still untrusted.
    Selected(Value),
    /// Nothing has been selected.
    Absent,
    /// The slot held unreadable data and has been cleared.
    Corrupt,
}

impl Selection {
    /// The sanitized detail view, when a product is selected.
    pub fn detail_view(&self) -> Option<DetailView> {
        match self {
            Selection::Selected(raw) => DetailView::from_raw(raw).ok(),
            Selection::Absent | Selection::Corrupt => None,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }
}

/// Reads and writes the selection slot of one store.
pub struct SelectionBridge<S> {
    cache: Cache<S>,
    slot: String,
}

impl<S: KeyValueStore> SelectionBridge<S> {
    /// Bridge over the default slot.
    pub fn new(store: S) -> Self {
        Self::with_slot(store, SELECTION_SLOT)
    }

    /// Bridge over a named slot.
    pub fn with_slot(store: S, slot: impl Into<String>) -> Self {
        Self {
            cache: Cache::new(store),
            slot: slot.into(),
        }
    }

    /// Bridge over the slot belonging to one browser session.
    pub fn for_session(store: S, session: &SessionId) -> Self {
        Self::with_slot(store, crate::cache_key!(SELECTION_SLOT, session))
    }

    /// The key this bridge reads and writes.
    pub fn slot(&self) -> &str {
        &self.slot
    }

    /// Write the full product, replacing any previous selection.
    pub fn select(&self, product: &Product) -> Result<(), CacheError> {
        tracing::debug!(slot = %self.slot, product_id = product.id, "writing selection");
        self.cache.set(&self.slot, product)
    }

    /// Read the slot, clearing it if its content is unusable.
    pub fn read_selection(&self) -> Result<Selection, CacheError> {
        let Some(bytes) = self.cache.get_raw(&self.slot)? else {
            return Ok(Selection::Absent);
        };

        match serde_json::from_slice::<Value>(&bytes) {
            Ok(value) if value.is_object() => Ok(Selection::Selected(value)),
            Ok(_) | Err(_) => {
                tracing::warn!(slot = %self.slot, bytes = bytes.len(), "clearing corrupt selection");
                self.cache.delete(&self.slot)?;
                Ok(Selection::Corrupt)
            }
        }
    }

    /// Remove any selection.
    pub fn clear(&self) -> Result<(), CacheError> {
        self.cache.delete(&self.slot)
    }
}
