use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_store;

#[derive(Properties, PartialEq)]
pub struct BottomNavProps {
    pub current_route: MainRoute,
}

/// The five primary destinations shown on mobile.
const NAV_ITEMS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("dashboard", "Dashboard"),
    ("ai", "Ask AI"),
    ("news", "News"),
    ("events", "Events"),
];

fn nav_route(tab: &str) -> MainRoute {
    match tab {
        "dashboard" => MainRoute::Dashboard,
        "ai" => MainRoute::Assistant,
        "news" => MainRoute::News,
        "events" => MainRoute::Events,
        _ => MainRoute::Home,
    }
}

fn nav_icon(tab: &str) -> IconId {
    match tab {
        "dashboard" => IconId::HeroiconsOutlineSquares2X2,
        "ai" => IconId::HeroiconsOutlineChatBubbleLeftRight,
        "news" => IconId::HeroiconsOutlineNewspaper,
        "events" => IconId::HeroiconsOutlineCalendarDays,
        _ => IconId::HeroiconsOutlineHome,
    }
}

/// Fixed bottom navigation.
///
/// Navigating records the tab in the session (`set_active_tab`,
/// last-write-wins); the highlighted item follows the current route, which
/// stays the source of truth when navigation happens elsewhere.
#[function_component(BottomNav)]
pub fn bottom_nav(props: &BottomNavProps) -> Html {
    let navigator = use_navigator().expect("router context");
    let (_state, dispatch) = use_store::<AppState>();

    let items = NAV_ITEMS.iter().map(|&(tab, label)| {
        let route = nav_route(tab);
        let is_active = props.current_route == route;
        let onclick = {
            let navigator = navigator.clone();
            let dispatch = dispatch.clone();
            let route = route.clone();
            Callback::from(move |_: MouseEvent| {
                dispatch.reduce_mut(|app| app.session.set_active_tab(tab));
                navigator.push(&route);
            })
        };
        let classes = if is_active {
            "flex flex-col items-center justify-center py-2 px-1 text-primary"
        } else {
            "flex flex-col items-center justify-center py-2 px-1 text-base-content/60"
        };
        html! {
            <button key={tab} class={classes} {onclick}>
                <Icon icon_id={nav_icon(tab)} class="w-6 h-6 mb-1" />
                <span class="text-xs font-medium">{ label }</span>
            </button>
        }
    });

    html! {
        <nav class="fixed bottom-0 left-0 right-0 bg-base-200 border-t border-base-300 z-40">
            <div class="grid grid-cols-5 py-1">
                { for items }
            </div>
        </nav>
    }
}
