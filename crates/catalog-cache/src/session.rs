//! Session management using the key-value store.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{Cache, CacheError, KeyValueStore};

/// A unique session identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Create a new session ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new cryptographically secure session ID.
    pub fn generate() -> Self {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
        use rand::Rng;

        let bytes: [u8; 18] = rand::thread_rng().gen();
        Self(format!("sess_{}", URL_SAFE_NO_PAD.encode(bytes)))
    }

    /// Accept an id from an untrusted source (e.g. a cookie).
    ///
    /// Only ids shaped like [`SessionId::generate`] output are accepted, so a
    /// crafted cookie cannot address arbitrary store keys.
    pub fn parse(raw: &str) -> Option<Self> {
        let token = raw.strip_prefix("sess_")?;
        let well_formed = token.len() == 24
            && token
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
        well_formed.then(|| Self(raw.to_string()))
    }

    /// Get the session ID as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for SessionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for SessionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Session data stored in the cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionData<T> {
    /// The session ID.
    pub id: SessionId,
    /// User-defined session data.
    pub data: T,
    /// Incremented on every write.
    pub version: u64,
    /// When the session was last written (Unix timestamp).
    pub updated_at: u64,
}

/// Per-session records stored under `<namespace>:<session id>`.
///
/// # Example
///
/// ```rust
/// use catalog_cache::{MemoryStore, Session, SessionId};
///
/// let store = MemoryStore::new();
/// let session = Session::<Vec<String>, _>::new(&store, "history");
/// let id = SessionId::from("sess_demo");
///
/// session.set(&id, &vec!["electronics".to_string()]).unwrap();
/// assert_eq!(session.get(&id).unwrap().map(|h| h.len()), Some(1));
/// ```
pub struct Session<T, S> {
    cache: Cache<S>,
    namespace: String,
    _phantom: std::marker::PhantomData<T>,
}

impl<T, S> Session<T, S>
where
    T: Serialize + DeserializeOwned + Default + Clone,
    S: KeyValueStore,
{
    /// Create a session manager over `store`, keyed under `namespace`.
    pub fn new(store: S, namespace: impl Into<String>) -> Self {
        Self {
            cache: Cache::new(store),
            namespace: namespace.into(),
            _phantom: std::marker::PhantomData,
        }
    }

    /// Get session data if it exists.
    ///
    /// A record that no longer deserializes is treated as missing.
    pub fn get(&self, id: &SessionId) -> Result<Option<T>, CacheError> {
        Ok(self.get_versioned(id)?.map(|s| s.data))
    }

    /// Get session data, or the default when there is none.
    pub fn get_or_default(&self, id: &SessionId) -> Result<T, CacheError> {
        Ok(self.get(id)?.unwrap_or_default())
    }

    /// Get full session data including version.
    pub fn get_versioned(&self, id: &SessionId) -> Result<Option<SessionData<T>>, CacheError> {
        match self.cache.get::<SessionData<T>>(&self.session_key(id)) {
            Ok(found) => Ok(found),
            Err(CacheError::SerializeError(e)) => {
                tracing::warn!(session = %id, error = %e, "ignoring unreadable session record");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Set session data (unconditional write).
    pub fn set(&self, id: &SessionId, data: &T) -> Result<(), CacheError> {
        let version = self.get_versioned(id)?.map(|s| s.version + 1).unwrap_or(1);
        let session_data = SessionData {
            id: id.clone(),
            data: data.clone(),
            version,
            updated_at: current_timestamp(),
        };
        self.cache.set(&self.session_key(id), &session_data)
    }

    /// Delete a session.
    pub fn delete(&self, id: &SessionId) -> Result<(), CacheError> {
        self.cache.delete(&self.session_key(id))
    }

    /// Check if a session exists.
    pub fn exists(&self, id: &SessionId) -> Result<bool, CacheError> {
        self.cache.exists(&self.session_key(id))
    }

    fn session_key(&self, id: &SessionId) -> String {
        crate::cache_key!(self.namespace.as_str(), id)
    }
}

fn current_timestamp() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_session_id_generate_format() {
        let id = SessionId::generate();
        let s = id.as_str();

        assert!(s.starts_with("sess_"));
        // Base64 encoded 18 bytes = 24 chars, plus "sess_" = 29 chars
        assert_eq!(s.len(), 29);
    }

    #[test]
    fn test_session_id_generate_uniqueness() {
        let id1 = SessionId::generate();
        let id2 = SessionId::generate();
        assert_ne!(id1.as_str(), id2.as_str());
    }

    #[test]
    fn test_session_id_parse() {
        let generated = SessionId::generate();
        assert_eq!(SessionId::parse(generated.as_str()), Some(generated));

        assert_eq!(SessionId::parse("abc"), None);
        assert_eq!(SessionId::parse("sess_short"), None);
        assert_eq!(SessionId::parse("sess_aaaaaaaaaaaaaaaaaaaaaa:x"), None);
        assert_eq!(SessionId::parse("sess_aaaaaaaaaaaaaaaaaaaaa/.."), None);
    }

    #[test]
    fn test_session_id_serialization() {
        let id = SessionId::new("serialize-me");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""serialize-me""#);

        let deserialized: SessionId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }

    #[test]
    fn test_session_set_get_versions() {
        let store = MemoryStore::new();
        let session = Session::<Vec<u32>, _>::new(&store, "numbers");
        let id = SessionId::new("sess_a");

        assert_eq!(session.get(&id).unwrap(), None);
        assert_eq!(session.get_or_default(&id).unwrap(), Vec::<u32>::new());

        session.set(&id, &vec![1]).unwrap();
        session.set(&id, &vec![1, 2]).unwrap();

        let versioned = session.get_versioned(&id).unwrap().unwrap();
        assert_eq!(versioned.version, 2);
        assert_eq!(versioned.data, vec![1, 2]);
        assert!(store.exists("numbers:sess_a").unwrap());
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = MemoryStore::new();
        let session = Session::<String, _>::new(&store, "notes");

        session.set(&SessionId::new("one"), &"first".to_string()).unwrap();
        session.set(&SessionId::new("two"), &"second".to_string()).unwrap();

        assert_eq!(session.get(&SessionId::new("one")).unwrap().as_deref(), Some("first"));

        session.delete(&SessionId::new("one")).unwrap();
        assert!(!session.exists(&SessionId::new("one")).unwrap());
        assert!(session.exists(&SessionId::new("two")).unwrap());
    }

    #[test]
    fn test_unreadable_record_is_missing() {
        let store = MemoryStore::new();
        store.set("notes:one", b"{broken").unwrap();

        let session = Session::<String, _>::new(&store, "notes");
        assert_eq!(session.get(&SessionId::new("one")).unwrap(), None);

        // Overwriting it recovers the record.
        session.set(&SessionId::new("one"), &"ok".to_string()).unwrap();
        assert_eq!(session.get(&SessionId::new("one")).unwrap().as_deref(), Some("ok"));
    }
}
