use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::{AssistantExchange, AssistantReply, FilterUpdate, ListingFilters, User, UserType};

/// The shared session/configuration record every view reads.
///
/// Mutations go through the named operations below. Each operation is a
/// total function over its declared input domain; none can fail, block, or
/// suspend. Synchronizing the durable subset to storage is the job of
/// [`SessionStore`](crate::store::SessionStore) (or the frontend's store
/// binding), applied after every mutation.
///
/// Invariants upheld by the operations:
/// - `is_authenticated` is true exactly when `user` is present.
/// - `is_configured` never transitions back to false once set.
/// - `ai_history` is append-only with store-assigned, non-decreasing
///   timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Community display label, set once during setup.
    pub city_name: String,
    /// Gates the setup screen vs. the main application.
    pub is_configured: bool,
    /// Signed-in identity, absent until authentication occurs.
    pub user: Option<User>,
    /// Membership tier; reset to free on logout.
    pub user_type: UserType,
    /// Mirrors presence of `user`.
    pub is_authenticated: bool,
    /// Display preference applied to the document root.
    pub dark_mode: bool,
    /// Navigation scalar, last-write-wins. Session-local.
    pub active_tab: String,
    /// Append-only assistant exchange history.
    pub ai_history: Vec<AssistantExchange>,
    /// Optional banner message. Session-local.
    pub breaking_news: Option<String>,
    /// Marketplace search text. Session-local.
    pub search_query: String,
    /// Marketplace filters. Session-local.
    pub filters: ListingFilters,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            city_name: String::new(),
            is_configured: false,
            user: None,
            user_type: UserType::default(),
            is_authenticated: false,
            dark_mode: false,
            active_tab: "home".to_string(),
            ai_history: Vec::new(),
            breaking_news: None,
            search_query: String::new(),
            filters: ListingFilters::default(),
        }
    }
}

impl SessionState {
    /// Set the community name and mark the session configured.
    ///
    /// Calling again replaces the name; `is_configured` is never cleared.
    /// The store accepts any string; the setup form rejects empty names at
    /// the UI boundary.
    pub fn set_city_name(&mut self, name: impl Into<String>) {
        self.city_name = name.into();
        self.is_configured = true;
    }

    /// Record a signed-in identity.
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
        self.is_authenticated = true;
    }

    /// Clear the identity and drop the session back to the free tier.
    pub fn logout(&mut self) {
        self.user = None;
        self.is_authenticated = false;
        self.user_type = UserType::Free;
    }

    /// Flip the display preference.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Record the active navigation tab. Last write wins.
    pub fn set_active_tab(&mut self, tab: impl Into<String>) {
        self.active_tab = tab.into();
    }

    /// Append one assistant exchange to the history.
    ///
    /// The timestamp is assigned here, not by the caller, so entries stay
    /// in non-decreasing chronological order.
    pub fn add_ai_query(&mut self, query: impl Into<String>, response: AssistantReply) {
        self.ai_history.push(AssistantExchange {
            query: query.into(),
            response,
            timestamp: Utc::now().timestamp_millis(),
        });
    }

    /// Set or clear the banner message.
    pub fn set_breaking_news(&mut self, news: Option<String>) {
        self.breaking_news = news;
    }

    /// Record the marketplace search text.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Shallow-merge a partial filter update; unset fields keep their
    /// prior values.
    pub fn set_filters(&mut self, update: FilterUpdate) {
        self.filters.apply(update);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn reply(answer: &str) -> AssistantReply {
        AssistantReply {
            answer: answer.to_string(),
            sources: vec!["City Database".to_string()],
            confidence: 0.85,
            follow_up: Vec::new(),
        }
    }

    fn resident() -> User {
        User {
            id: Uuid::new_v4(),
            username: "resident".to_string(),
            email: "resident@example.com".to_string(),
            display_name: None,
        }
    }

    #[test]
    fn test_authentication_flag_mirrors_user_presence() {
        let mut state = SessionState::default();
        assert_eq!(state.is_authenticated, state.user.is_some());

        state.set_user(resident());
        assert_eq!(state.is_authenticated, state.user.is_some());
        assert!(state.is_authenticated);

        state.logout();
        assert_eq!(state.is_authenticated, state.user.is_some());
        assert!(!state.is_authenticated);
    }

    #[test]
    fn test_is_configured_is_monotonic() {
        let mut state = SessionState::default();
        state.set_city_name("Springfield");
        assert!(state.is_configured);

        // No operation sequence may clear the flag again.
        state.set_city_name("Shelbyville");
        state.set_user(resident());
        state.logout();
        state.toggle_dark_mode();
        state.set_active_tab("news");
        state.add_ai_query("hi", reply("hello"));
        state.set_breaking_news(Some("storm warning".to_string()));
        state.set_breaking_news(None);
        state.set_search_query("bike");
        state.set_filters(FilterUpdate::category("jobs"));
        assert!(state.is_configured);
        assert_eq!(state.city_name, "Shelbyville");
    }

    #[test]
    fn test_logout_resets_tier_to_free() {
        let mut state = SessionState::default();
        state.set_user(resident());
        state.user_type = UserType::Publisher;

        state.logout();

        assert_eq!(state.user_type, UserType::Free);
        assert!(state.user.is_none());
    }

    #[test]
    fn test_history_is_append_only_and_ordered() {
        let mut state = SessionState::default();
        for i in 0..5 {
            state.add_ai_query(format!("question {i}"), reply("answer"));
        }

        assert_eq!(state.ai_history.len(), 5);
        for (i, entry) in state.ai_history.iter().enumerate() {
            assert_eq!(entry.query, format!("question {i}"));
        }
        for pair in state.ai_history.windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[test]
    fn test_filter_update_leaves_unset_fields_alone() {
        let mut state = SessionState::default();
        let prior = state.filters.clone();

        state.set_filters(FilterUpdate::category("realestate"));

        assert_eq!(state.filters.category, "realestate");
        assert_eq!(state.filters.price_range, prior.price_range);
        assert_eq!(state.filters.location, prior.location);
        assert_eq!(state.filters.date_range, prior.date_range);
    }

    #[test]
    fn test_setup_theme_and_history_scenario() {
        let mut state = SessionState::default();

        state.set_city_name("Elm City");
        assert_eq!(state.city_name, "Elm City");
        assert!(state.is_configured);

        let original = state.dark_mode;
        state.toggle_dark_mode();
        state.toggle_dark_mode();
        assert_eq!(state.dark_mode, original);

        state.add_ai_query("hi", reply("x"));
        assert_eq!(state.ai_history.len(), 1);
        assert_eq!(state.ai_history[0].query, "hi");
    }

    #[test]
    fn test_breaking_news_sets_and_clears_independently() {
        let mut state = SessionState::default();
        state.set_breaking_news(Some("road closed".to_string()));
        assert_eq!(state.breaking_news.as_deref(), Some("road closed"));

        state.toggle_dark_mode();
        assert_eq!(state.breaking_news.as_deref(), Some("road closed"));

        state.set_breaking_news(None);
        assert!(state.breaking_news.is_none());
    }

    #[test]
    fn test_active_tab_last_write_wins() {
        let mut state = SessionState::default();
        assert_eq!(state.active_tab, "home");
        state.set_active_tab("news");
        state.set_active_tab("events");
        assert_eq!(state.active_tab, "events");
    }
}
