use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{AssistantExchange, User, UserType};
use crate::store::session::SessionState;

/// Fixed key the durable record is stored under.
pub const STORAGE_KEY: &str = "community-nexus-storage";

/// Failure at the durable storage boundary.
///
/// Storage faults never propagate out of a store mutation; they are logged
/// and the in-memory state stays authoritative for the rest of the session.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backing store rejected the read or write (disabled, quota
    /// exceeded, ...).
    #[error("durable storage unavailable: {0}")]
    Unavailable(String),

    /// The stored record could not be encoded or decoded.
    #[error("stored session record is malformed")]
    Serde(#[from] serde_json::Error),
}

/// The durable subset of [`SessionState`].
///
/// Exactly these fields survive a restart. Session-local fields
/// (`active_tab`, `breaking_news`, `search_query`, `filters`) must never
/// appear here; unknown keys in an older stored record are discarded on
/// hydration.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersistedSession {
    pub city_name: String,
    pub is_configured: bool,
    pub user: Option<User>,
    pub user_type: UserType,
    pub is_authenticated: bool,
    pub dark_mode: bool,
    pub ai_history: Vec<AssistantExchange>,
}

impl From<&SessionState> for PersistedSession {
    fn from(state: &SessionState) -> Self {
        Self {
            city_name: state.city_name.clone(),
            is_configured: state.is_configured,
            user: state.user.clone(),
            user_type: state.user_type,
            is_authenticated: state.is_authenticated,
            dark_mode: state.dark_mode,
            ai_history: state.ai_history.clone(),
        }
    }
}

impl From<PersistedSession> for SessionState {
    /// Hydrate a full session: persisted fields restored, session-local
    /// fields at their defaults.
    fn from(persisted: PersistedSession) -> Self {
        Self {
            city_name: persisted.city_name,
            is_configured: persisted.is_configured,
            user: persisted.user,
            user_type: persisted.user_type,
            is_authenticated: persisted.is_authenticated,
            dark_mode: persisted.dark_mode,
            ai_history: persisted.ai_history,
            ..Self::default()
        }
    }
}

/// Durable storage for the persisted session subset.
///
/// The frontend backs this with browser `localStorage`; tests use
/// [`MemoryStorage`].
pub trait SessionStorage {
    /// Load the stored record. `Ok(None)` means nothing has been written
    /// yet.
    fn load(&self) -> Result<Option<PersistedSession>, StorageError>;

    /// Replace the stored record.
    fn save(&self, snapshot: &PersistedSession) -> Result<(), StorageError>;
}

/// In-memory [`SessionStorage`] used by tests and native embeddings.
///
/// Records round-trip through JSON so the serialization path is exercised
/// the same way the browser backend exercises it.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    record: std::cell::RefCell<Option<String>>,
}

impl MemoryStorage {
    /// Storage seeded with an already-written record.
    pub fn seeded(snapshot: &PersistedSession) -> Result<Self, StorageError> {
        let storage = Self::default();
        storage.save(snapshot)?;
        Ok(storage)
    }

    /// Storage pre-populated with a raw record, bypassing serialization.
    /// Test hook for malformed or legacy records.
    pub fn from_raw(json: impl Into<String>) -> Self {
        Self {
            record: std::cell::RefCell::new(Some(json.into())),
        }
    }

    /// Raw stored JSON, if any. Test hook.
    pub fn raw(&self) -> Option<String> {
        self.record.borrow().clone()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
        self.record
            .borrow()
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
            .map_err(StorageError::from)
    }

    fn save(&self, snapshot: &PersistedSession) -> Result<(), StorageError> {
        let json = serde_json::to_string(snapshot)?;
        *self.record.borrow_mut() = Some(json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partialization_excludes_session_local_fields() {
        let mut state = SessionState::default();
        state.set_city_name("Springfield");
        state.set_search_query("vintage guitar");
        state.set_breaking_news(Some("storm".to_string()));
        state.set_active_tab("marketplace");

        let json = serde_json::to_string(&PersistedSession::from(&state)).unwrap();

        assert!(json.contains("Springfield"));
        assert!(!json.contains("vintage guitar"));
        assert!(!json.contains("storm"));
        assert!(!json.contains("marketplace"));
    }

    #[test]
    fn test_hydration_defaults_session_local_fields() {
        let mut state = SessionState::default();
        state.set_city_name("Springfield");
        state.toggle_dark_mode();
        state.set_search_query("bike");

        let restored = SessionState::from(PersistedSession::from(&state));

        assert_eq!(restored.city_name, "Springfield");
        assert!(restored.is_configured);
        assert!(restored.dark_mode);
        assert_eq!(restored.search_query, "");
        assert_eq!(restored.active_tab, "home");
        assert!(restored.breaking_news.is_none());
    }

    #[test]
    fn test_hydration_discards_unknown_keys() {
        // A record written by an older build that leaked an ephemeral field.
        let json = r#"{"city_name":"Springfield","is_configured":true,"search_query":"leaked"}"#;
        let persisted: PersistedSession = serde_json::from_str(json).unwrap();

        let restored = SessionState::from(persisted);
        assert_eq!(restored.city_name, "Springfield");
        assert!(restored.is_configured);
        assert_eq!(restored.search_query, "");
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let mut state = SessionState::default();
        state.set_city_name("Elm City");
        let snapshot = PersistedSession::from(&state);

        let storage = MemoryStorage::default();
        assert!(storage.load().unwrap().is_none());
        storage.save(&snapshot).unwrap();
        assert_eq!(storage.load().unwrap(), Some(snapshot.clone()));

        let seeded = MemoryStorage::seeded(&snapshot).unwrap();
        assert_eq!(seeded.load().unwrap(), Some(snapshot));
    }
}
