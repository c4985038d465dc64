//! The session/configuration store: state machine, persistence contract,
//! and an injectable state holder tying the two together.

pub mod persistence;
pub mod session;

pub use persistence::{
    MemoryStorage, PersistedSession, STORAGE_KEY, SessionStorage, StorageError,
};
pub use session::SessionState;

/// Injectable state holder pairing a [`SessionState`] with a storage
/// backend.
///
/// Every mutation applies the pure state transition, then writes the
/// durable subset back to storage. A storage failure is logged and
/// swallowed: the in-memory state stays correct and usable for the rest of
/// the session, and no mutation can fail or panic because of it.
///
/// This is deliberately not a global singleton; tests construct isolated
/// instances over [`MemoryStorage`], and the frontend binds an equivalent
/// holder into its UI store.
#[derive(Debug)]
pub struct SessionStore<S: SessionStorage> {
    state: SessionState,
    storage: S,
}

impl<S: SessionStorage> SessionStore<S> {
    /// Create a store by hydrating from `storage`.
    ///
    /// A missing record yields defaults; an unreadable record yields
    /// defaults with a warning, never an error.
    pub fn hydrate(storage: S) -> Self {
        let state = match storage.load() {
            Ok(Some(persisted)) => SessionState::from(persisted),
            Ok(None) => SessionState::default(),
            Err(err) => {
                tracing::warn!("stored session unreadable, starting fresh: {err}");
                SessionState::default()
            }
        };
        Self { state, storage }
    }

    /// Read access to the current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Consume the store, returning the in-memory state.
    pub fn into_state(self) -> SessionState {
        self.state
    }

    /// Set the community name and mark the session configured.
    pub fn set_city_name(&mut self, name: impl Into<String>) {
        self.mutate(|state| state.set_city_name(name));
    }

    /// Record a signed-in identity.
    pub fn set_user(&mut self, user: crate::models::User) {
        self.mutate(|state| state.set_user(user));
    }

    /// Clear the identity and drop back to the free tier.
    pub fn logout(&mut self) {
        self.mutate(SessionState::logout);
    }

    /// Flip the display preference.
    pub fn toggle_dark_mode(&mut self) {
        self.mutate(SessionState::toggle_dark_mode);
    }

    /// Record the active navigation tab.
    pub fn set_active_tab(&mut self, tab: impl Into<String>) {
        self.mutate(|state| state.set_active_tab(tab));
    }

    /// Append one assistant exchange to the history.
    pub fn add_ai_query(
        &mut self,
        query: impl Into<String>,
        response: crate::models::AssistantReply,
    ) {
        self.mutate(|state| state.add_ai_query(query, response));
    }

    /// Set or clear the banner message.
    pub fn set_breaking_news(&mut self, news: Option<String>) {
        self.mutate(|state| state.set_breaking_news(news));
    }

    /// Record the marketplace search text.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.mutate(|state| state.set_search_query(query));
    }

    /// Shallow-merge a partial filter update.
    pub fn set_filters(&mut self, update: crate::models::FilterUpdate) {
        self.mutate(|state| state.set_filters(update));
    }

    /// Apply one mutation, then sync the durable subset.
    fn mutate(&mut self, op: impl FnOnce(&mut SessionState)) {
        op(&mut self.state);
        self.sync();
    }

    fn sync(&self) {
        if let Err(err) = self.storage.save(&PersistedSession::from(&self.state)) {
            tracing::warn!("session persistence failed, keeping in-memory state: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AssistantReply;

    /// Backend standing in for disabled or over-quota storage.
    struct FailingStorage;

    impl SessionStorage for FailingStorage {
        fn load(&self) -> Result<Option<PersistedSession>, StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }

        fn save(&self, _snapshot: &PersistedSession) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
    }

    fn reply() -> AssistantReply {
        AssistantReply {
            answer: "answer".to_string(),
            sources: Vec::new(),
            confidence: 0.5,
            follow_up: Vec::new(),
        }
    }

    #[test]
    fn test_hydrate_from_empty_storage_yields_defaults() {
        let store = SessionStore::hydrate(MemoryStorage::default());
        assert_eq!(store.state(), &SessionState::default());
    }

    #[test]
    fn test_every_mutation_is_flushed() {
        let mut store = SessionStore::hydrate(MemoryStorage::default());
        store.set_city_name("Springfield");

        let raw = store.storage.raw().expect("record written");
        assert!(raw.contains("Springfield"));

        store.toggle_dark_mode();
        let raw = store.storage.raw().expect("record written");
        assert!(raw.contains("\"dark_mode\":true"));
    }

    #[test]
    fn test_restart_restores_persisted_fields_only() {
        let mut first = SessionStore::hydrate(MemoryStorage::default());
        first.set_city_name("Springfield");
        first.set_search_query("vintage guitar");
        let record = first.storage.raw().expect("record written");

        // Simulated process restart: a fresh store over the same record.
        let rehydrated = SessionStore::hydrate(MemoryStorage::from_raw(record));

        assert_eq!(rehydrated.state().city_name, "Springfield");
        assert!(rehydrated.state().is_configured);
        assert_eq!(rehydrated.state().search_query, "");
    }

    #[test]
    fn test_storage_failure_leaves_state_usable() {
        let mut store = SessionStore::hydrate(FailingStorage);
        assert_eq!(store.state(), &SessionState::default());

        store.set_city_name("Elm City");
        store.toggle_dark_mode();
        store.add_ai_query("hi", reply());

        assert_eq!(store.state().city_name, "Elm City");
        assert!(store.state().is_configured);
        assert!(store.state().dark_mode);
        assert_eq!(store.state().ai_history.len(), 1);
    }

    #[test]
    fn test_corrupt_record_hydrates_to_defaults() {
        let store = SessionStore::hydrate(MemoryStorage::from_raw("{not json"));
        assert_eq!(store.state(), &SessionState::default());
    }

    #[test]
    fn test_named_operations_delegate_to_the_state_machine() {
        let mut store = SessionStore::hydrate(MemoryStorage::default());
        store.set_active_tab("news");
        store.set_breaking_news(Some("storm".to_string()));
        store.set_filters(crate::models::FilterUpdate::category("jobs"));

        assert_eq!(store.state().active_tab, "news");
        assert_eq!(store.state().breaking_news.as_deref(), Some("storm"));
        assert_eq!(store.state().filters.category, "jobs");

        // None of those fields may reach the durable record.
        let raw = store.storage.raw().expect("record written");
        assert!(!raw.contains("storm"));
        assert!(!raw.contains("jobs"));
    }
}
