use crate::containers::setup::Setup;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use web_sys::window;
use yew::{Html, function_component, html, use_effect_with};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

/// Root component: gates on configuration state and applies the theme.
///
/// An unconfigured session only ever sees the setup screen; once
/// `set_city_name` flips the flag the router takes over. The stored
/// `dark_mode` preference is mirrored onto the document root as a
/// `data-theme` attribute so the whole visual scope follows it.
#[function_component(App)]
pub fn app() -> Html {
    let (state, _dispatch) = use_store::<AppState>();
    let is_configured = state.session.is_configured;
    let dark_mode = state.session.dark_mode;

    use_effect_with(dark_mode, move |&dark_mode| {
        let theme = if dark_mode { "dark" } else { "light" };
        if let Some(window) = window()
            && let Some(document) = window.document()
            && let Some(html_element) = document.document_element()
        {
            let _ = html_element.set_attribute("data-theme", theme);
        }
        || {}
    });

    if !is_configured {
        return html! { <Setup /> };
    }

    html! {
        <HashRouter>
            <Switch<MainRoute> render={crate::routes::switch} />
        </HashRouter>
    }
}
