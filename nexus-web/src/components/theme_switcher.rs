use crate::models::app_state::AppState;
use yew::{Callback, Classes, Html, Properties, function_component, html};
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq, Eq)]
pub struct ThemeSwitcherProps {
    #[prop_or_default]
    pub class: Classes,
}

/// Toggle between the light and dark theme.
///
/// The preference lives in the session store (`toggle_dark_mode`), so it
/// persists across restarts; the root component mirrors it onto the
/// document's `data-theme` attribute.
#[function_component(ThemeSwitcher)]
pub fn theme_switcher(props: &ThemeSwitcherProps) -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let dark_mode = state.session.dark_mode;

    let toggle_theme = Callback::from(move |_: yew::MouseEvent| {
        dispatch.reduce_mut(|app| app.session.toggle_dark_mode());
    });

    // Show sun icon in dark mode (to switch to light) and moon icon in light mode
    let theme_icon = if dark_mode {
        IconId::HeroiconsSolidSun
    } else {
        IconId::HeroiconsSolidMoon
    };

    html! {
        <div class={props.class.clone()}>
            <button
                class="btn btn-ghost btn-circle"
                onclick={toggle_theme}
                aria-label="Toggle theme"
            >
                <Icon icon_id={theme_icon} class="h-5 w-5" />
            </button>
        </div>
    }
}
