use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_selector;

/// Landing page: welcome hero, quick actions, and recent activity.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let navigator = use_navigator().expect("router context");
    let city_name = use_selector(|state: &AppState| state.session.city_name.clone());

    let quick_actions: [(&str, &str, IconId, MainRoute); 4] = [
        (
            "Ask AI Assistant",
            "Get instant answers about your community",
            IconId::HeroiconsOutlineChatBubbleLeftRight,
            MainRoute::Assistant,
        ),
        (
            "Local News",
            "Stay updated with community happenings",
            IconId::HeroiconsOutlineNewspaper,
            MainRoute::News,
        ),
        (
            "Find Businesses",
            "Discover local shops and services",
            IconId::HeroiconsOutlineMapPin,
            MainRoute::Businesses,
        ),
        (
            "Marketplace",
            "Buy, sell, and trade locally",
            IconId::HeroiconsOutlineShoppingBag,
            MainRoute::Marketplace,
        ),
    ];

    let recent_activity: [(&str, &str, IconId); 3] = [
        (
            "City Council Meeting Tonight",
            "2 hours ago",
            IconId::HeroiconsOutlineCalendarDays,
        ),
        (
            "New Restaurant Opening Downtown",
            "4 hours ago",
            IconId::HeroiconsOutlineStar,
        ),
        (
            "Weather Alert: Heavy Rain Expected",
            "6 hours ago",
            IconId::HeroiconsOutlineArrowTrendingUp,
        ),
    ];

    let ask_anything = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&MainRoute::Assistant))
    };

    html! {
        <div class="p-4 space-y-6">
            <div class="card bg-gradient-to-r from-primary to-secondary text-primary-content shadow-xl">
                <div class="card-body">
                    <h1 class="text-2xl font-bold">{ format!("Welcome to {}", *city_name) }</h1>
                    <p class="opacity-80">{ "Your community hub for news, services, and connections" }</p>
                    <div class="card-actions">
                        <button class="btn bg-base-100 text-primary" onclick={ask_anything}>
                            <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="w-5 h-5" />
                            { "Ask Me Anything" }
                        </button>
                    </div>
                </div>
            </div>

            <div>
                <h2 class="text-xl font-bold mb-4">{ "Quick Actions" }</h2>
                <div class="grid grid-cols-2 gap-4">
                    {
                        for quick_actions.into_iter().map(|(title, subtitle, icon_id, route)| {
                            let onclick = {
                                let navigator = navigator.clone();
                                Callback::from(move |_: MouseEvent| navigator.push(&route))
                            };
                            html! {
                                <button key={title} class="card bg-base-200 shadow-sm text-left hover:shadow-md transition-shadow" {onclick}>
                                    <div class="card-body p-4">
                                        <div class="bg-primary/10 rounded-lg w-12 h-12 flex items-center justify-center mb-2">
                                            <Icon {icon_id} class="w-6 h-6 text-primary" />
                                        </div>
                                        <h3 class="font-semibold">{ title }</h3>
                                        <p class="text-sm text-base-content/60">{ subtitle }</p>
                                    </div>
                                </button>
                            }
                        })
                    }
                </div>
            </div>

            <div>
                <h2 class="text-xl font-bold mb-4">{ "Recent Activity" }</h2>
                <div class="card bg-base-200 shadow-sm">
                    <div class="card-body p-4 divide-y divide-base-300">
                        {
                            for recent_activity.into_iter().map(|(title, time, icon_id)| html! {
                                <div key={title} class="flex items-center gap-3 py-3">
                                    <Icon {icon_id} class="w-5 h-5 text-primary" />
                                    <div class="flex-1">
                                        <p class="font-medium">{ title }</p>
                                        <p class="text-sm text-base-content/60">{ time }</p>
                                    </div>
                                </div>
                            })
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
