//! Key-value store abstraction with automatic JSON serialization.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::{de::DeserializeOwned, Serialize};

use crate::CacheError;

/// Raw byte-level key-value storage.
///
/// Implemented by Spin's key-value store on `wasm32`, by an in-memory map for
/// tests, and by the CLI's file-backed store.
pub trait KeyValueStore {
    /// Read the bytes stored under `key`.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError>;

    /// Remove `key`. Deleting a missing key is not an error.
    fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check whether `key` holds a value.
    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        Ok(self.get(key)?.is_some())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        (**self).set(key, value)
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        (**self).delete(key)
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        (**self).exists(key)
    }
}

/// Type-safe cache over any [`KeyValueStore`].
///
/// # Example
///
/// ```rust
/// use catalog_cache::{Cache, MemoryStore};
///
/// let cache = Cache::new(MemoryStore::new());
/// cache.set("greeting", &"hola").unwrap();
/// let value: Option<String> = cache.get("greeting").unwrap();
/// assert_eq!(value.as_deref(), Some("hola"));
/// ```
#[derive(Debug)]
pub struct Cache<S> {
    store: S,
}

impl<S: KeyValueStore> Cache<S> {
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Get and deserialize a value. Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        match self.store.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Serialize and set a value.
    pub fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let bytes = serde_json::to_vec(value)?;
        self.store.set(key, &bytes)
    }

    /// Get the raw bytes of a value, without deserializing.
    pub fn get_raw(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.store.get(key)
    }

    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store.delete(key)
    }

    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store.exists(key)
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }
}

/// In-memory store, for tests and native development.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Spin's key-value store.
#[cfg(target_arch = "wasm32")]
pub struct SpinStore {
    store: spin_sdk::key_value::Store,
}

#[cfg(target_arch = "wasm32")]
impl SpinStore {
    /// Open the default Key-Value store.
    pub fn open_default() -> Result<Self, CacheError> {
        let store = spin_sdk::key_value::Store::open_default()
            .map_err(|e| CacheError::OpenError(e.to_string()))?;
        Ok(Self { store })
    }

    /// Open a named Key-Value store.
    pub fn open(name: &str) -> Result<Self, CacheError> {
        let store = spin_sdk::key_value::Store::open(name)
            .map_err(|e| CacheError::OpenError(e.to_string()))?;
        Ok(Self { store })
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for SpinStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.store
            .get(key)
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }

    fn set(&self, key: &str, value: &[u8]) -> Result<(), CacheError> {
        self.store
            .set(key, value)
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }

    fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.store
            .delete(key)
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }

    fn exists(&self, key: &str) -> Result<bool, CacheError> {
        self.store
            .exists(key)
            .map_err(|e| CacheError::StoreError(e.to_string()))
    }
}

/// Helper to build cache keys with namespacing.
///
/// # Example
///
/// ```rust
/// use catalog_cache::cache_key;
///
/// let key = cache_key!("selected-product", "sess_abc");
/// assert_eq!(key, "selected-product:sess_abc");
/// ```
#[macro_export]
macro_rules! cache_key {
    ($prefix:expr, $($part:expr),+) => {{
        let mut key = String::from($prefix);
        $(
            key.push(':');
            key.push_str(&$part.to_string());
        )+
        key
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Entry {
        name: String,
        count: u32,
    }

    #[test]
    fn test_typed_round_trip() {
        let cache = Cache::new(MemoryStore::new());
        let entry = Entry {
            name: "lamp".to_string(),
            count: 2,
        };

        cache.set("entry", &entry).unwrap();
        assert_eq!(cache.get::<Entry>("entry").unwrap(), Some(entry));
        assert!(cache.exists("entry").unwrap());
    }

    #[test]
    fn test_missing_key() {
        let cache = Cache::new(MemoryStore::new());
        assert_eq!(cache.get::<Entry>("nope").unwrap(), None);
        assert!(!cache.exists("nope").unwrap());
        cache.delete("nope").unwrap();
    }

    #[test]
    fn test_type_mismatch_is_serialize_error() {
        let store = MemoryStore::new();
        store.set("entry", b"not json").unwrap();

        let cache = Cache::new(&store);
        assert!(matches!(
            cache.get::<Entry>("entry"),
            Err(CacheError::SerializeError(_))
        ));
        assert_eq!(cache.get_raw("entry").unwrap(), Some(b"not json".to_vec()));
    }

    #[test]
    fn test_borrowed_store_shares_state() {
        let store = MemoryStore::new();
        Cache::new(&store).set("a", &1).unwrap();
        Cache::new(&store).set("b", &2).unwrap();

        assert_eq!(store.len(), 2);
        Cache::new(&store).delete("a").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_cache_key_macro() {
        assert_eq!(cache_key!("prefs", "sess_1"), "prefs:sess_1");
        assert_eq!(cache_key!("a", 1, "b"), "a:1:b");
    }
}
