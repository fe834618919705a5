//! Per-session catalog preferences.

use catalog_core::ViewCriteria;
use serde::{Deserialize, Serialize};

use crate::{CacheError, KeyValueStore, Session, SessionId};

/// Key namespace for preference records.
pub const PREFERENCES_NAMESPACE: &str = "catalog-preferences";

/// What the catalog page remembers between visits.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogPreferences {
    /// The last criteria applied.
    pub criteria: ViewCriteria,
}

/// Preference records over a key-value store.
pub struct PreferenceStore<S> {
    session: Session<CatalogPreferences, S>,
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(store: S) -> Self {
        Self {
            session: Session::new(store, PREFERENCES_NAMESPACE),
        }
    }

    /// Saved criteria, or the unconstrained default.
    pub fn criteria(&self, id: &SessionId) -> Result<ViewCriteria, CacheError> {
        Ok(self.session.get_or_default(id)?.criteria)
    }

    /// Remember `criteria`; skips the write when nothing changed.
    pub fn remember(&self, id: &SessionId, criteria: &ViewCriteria) -> Result<(), CacheError> {
        let current = self.session.get(id)?;
        if current.as_ref().map(|p| &p.criteria) == Some(criteria) {
            return Ok(());
        }
        let prefs = CatalogPreferences {
            criteria: criteria.clone(),
        };
        self.session.set(id, &prefs)
    }
}
