//! Typed key-value layer for the catalog storefront.
//!
//! Provides JSON-serializing access to a key-value store (Spin's store on
//! `wasm32`, an in-memory map elsewhere), per-session records, and the
//! selection slot that carries the chosen product to the details page.
//!
//! # Example
//!
//! ```rust
//! use catalog_cache::{MemoryStore, Selection, SelectionBridge};
//! use catalog_core::Product;
//!
//! let store = MemoryStore::new();
//! let bridge = SelectionBridge::new(&store);
//!
//! bridge.select(&Product::new(1, "Red Shirt", 20.0, "clothing")).unwrap();
//! match bridge.read_selection().unwrap() {
//!     Selection::Selected(raw) => assert_eq!(raw["title"], "Red Shirt"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

mod error;
mod kv;
mod preferences;
mod selection;
mod session;

pub use error::CacheError;
#[cfg(target_arch = "wasm32")]
pub use kv::SpinStore;
pub use kv::{Cache, KeyValueStore, MemoryStore};
pub use preferences::{CatalogPreferences, PreferenceStore, PREFERENCES_NAMESPACE};
pub use selection::{Selection, SelectionBridge, SELECTION_SLOT};
pub use session::{Session, SessionData, SessionId};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        Cache, CacheError, KeyValueStore, MemoryStore, PreferenceStore, Selection,
        SelectionBridge, Session, SessionId,
    };
}
