//! Browser-backed durable storage for the session record.

use gloo_storage::errors::StorageError as BrowserError;
use gloo_storage::{LocalStorage, Storage};
use shared::store::{PersistedSession, STORAGE_KEY, SessionState, SessionStorage, StorageError};

/// [`SessionStorage`] backend over browser `localStorage`.
///
/// Reads and writes the single record under
/// [`STORAGE_KEY`](shared::store::STORAGE_KEY). Only the durable subset of
/// the session ever passes through here.
#[derive(Debug, Default, Clone)]
pub struct LocalSessionStorage;

impl LocalSessionStorage {
    /// Hydrate a full session from the browser record.
    ///
    /// A missing record yields defaults; an unreadable one yields defaults
    /// with a console warning. Hydration can never fail.
    pub fn hydrate(&self) -> SessionState {
        match self.load() {
            Ok(Some(persisted)) => SessionState::from(persisted),
            Ok(None) => SessionState::default(),
            Err(err) => {
                log::warn!("stored session unreadable, starting fresh: {err}");
                SessionState::default()
            }
        }
    }

    /// Flush the durable subset of `session`.
    ///
    /// Failures (storage disabled, quota exceeded) are logged and
    /// swallowed; the in-memory state stays authoritative.
    pub fn persist(&self, session: &SessionState) {
        if let Err(err) = self.save(&PersistedSession::from(session)) {
            log::warn!("session persistence failed, keeping in-memory state: {err}");
        }
    }
}

impl SessionStorage for LocalSessionStorage {
    fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
        match LocalStorage::get::<PersistedSession>(STORAGE_KEY) {
            Ok(record) => Ok(Some(record)),
            Err(BrowserError::KeyNotFound(_)) => Ok(None),
            Err(BrowserError::SerdeError(err)) => Err(StorageError::Serde(err)),
            Err(err) => Err(StorageError::Unavailable(err.to_string())),
        }
    }

    fn save(&self, snapshot: &PersistedSession) -> Result<(), StorageError> {
        LocalStorage::set(STORAGE_KEY, snapshot).map_err(|err| match err {
            BrowserError::SerdeError(err) => StorageError::Serde(err),
            other => StorageError::Unavailable(other.to_string()),
        })
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_restart_round_trip_restores_persisted_fields() {
        LocalStorage::delete(STORAGE_KEY);

        let mut session = SessionState::default();
        session.set_city_name("Springfield");
        session.set_search_query("vintage guitar");

        let storage = LocalSessionStorage;
        storage.persist(&session);

        // A fresh hydration stands in for a process restart.
        let restored = storage.hydrate();
        assert_eq!(restored.city_name, "Springfield");
        assert!(restored.is_configured);
        assert_eq!(restored.search_query, "");

        LocalStorage::delete(STORAGE_KEY);
    }

    #[wasm_bindgen_test]
    fn test_missing_record_hydrates_to_defaults() {
        LocalStorage::delete(STORAGE_KEY);
        assert_eq!(LocalSessionStorage.hydrate(), SessionState::default());
    }

    #[wasm_bindgen_test]
    fn test_garbage_record_hydrates_to_defaults() {
        LocalStorage::raw().set_item(STORAGE_KEY, "{not json").unwrap();
        assert_eq!(LocalSessionStorage.hydrate(), SessionState::default());
        LocalStorage::delete(STORAGE_KEY);
    }
}
