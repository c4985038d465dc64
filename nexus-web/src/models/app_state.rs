use std::rc::Rc;

use shared::store::SessionState;
use yewdux::prelude::*;

use crate::storage::LocalSessionStorage;

/// The application store: the shared session record bound to yewdux.
///
/// Views mutate it exclusively through the session's named operations
/// inside `reduce_mut`, e.g.
/// `dispatch.reduce_mut(|app| app.session.toggle_dark_mode())`. Each
/// change notifies subscribers once and the [`SessionSaver`] listener
/// flushes the durable subset, so persistence happens after every
/// mutation without any view knowing about it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AppState {
    /// The session/configuration record every view reads.
    pub session: SessionState,
}

/// Listener that mirrors every store change into browser storage.
struct SessionSaver;

impl Listener for SessionSaver {
    type Store = AppState;

    fn on_change(&mut self, _cx: &yewdux::Context, state: Rc<Self::Store>) {
        LocalSessionStorage.persist(&state.session);
    }
}

impl Store for AppState {
    fn new(cx: &yewdux::Context) -> Self {
        init_listener(SessionSaver, cx);
        Self {
            session: LocalSessionStorage.hydrate(),
        }
    }

    fn should_notify(&self, old: &Self) -> bool {
        self != old
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use gloo_storage::{LocalStorage, Storage};
    use shared::store::STORAGE_KEY;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_mutations_reach_browser_storage() {
        LocalStorage::delete(STORAGE_KEY);

        let cx = yewdux::Context::new();
        let dispatch = Dispatch::<AppState>::new(&cx);
        dispatch.reduce_mut(|app| app.session.set_city_name("Elm City"));

        let raw: String = LocalStorage::raw()
            .get_item(STORAGE_KEY)
            .unwrap()
            .expect("record written after mutation");
        assert!(raw.contains("Elm City"));

        // Session-local fields stay out of the durable record.
        dispatch.reduce_mut(|app| app.session.set_search_query("vintage guitar"));
        let raw: String = LocalStorage::raw()
            .get_item(STORAGE_KEY)
            .unwrap()
            .expect("record written after mutation");
        assert!(!raw.contains("vintage guitar"));

        LocalStorage::delete(STORAGE_KEY);
    }
}
