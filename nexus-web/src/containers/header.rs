use crate::{
    components::theme_switcher::ThemeSwitcher, config::FrontendConfig,
    models::app_state::AppState, routes::MainRoute,
};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

/// Top navigation bar: brand line for the configured community plus the
/// theme switcher, notifications, and profile shortcut.
#[function_component(Header)]
pub fn header() -> Html {
    let city_name = use_selector(|state: &AppState| state.session.city_name.clone());
    let config = FrontendConfig::new();

    html! {
        <nav class="navbar justify-between bg-base-300 sticky top-0 z-40">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg gap-2">
                <span class="bg-primary text-primary-content rounded-lg w-8 h-8 flex items-center justify-center font-bold">
                    { "N" }
                </span>
                { config.platform_title(&city_name) }
            </Link<MainRoute>>
            <div class="flex items-center gap-1">
                <ThemeSwitcher />
                <button class="btn btn-ghost btn-circle" aria-label="Notifications">
                    <div class="indicator">
                        <Icon icon_id={IconId::HeroiconsOutlineBell} class="h-5 w-5" />
                        <span class="badge badge-error badge-xs indicator-item"></span>
                    </div>
                </button>
                <Link<MainRoute> to={MainRoute::Profile} classes="btn btn-ghost btn-circle">
                    <Icon icon_id={IconId::HeroiconsOutlineUser} class="h-5 w-5" />
                </Link<MainRoute>>
            </div>
        </nav>
    }
}
