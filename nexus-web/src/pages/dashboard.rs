use crate::components::emergency_alerts::EmergencyAlerts;
use crate::components::weather_widget::WeatherWidget;
use crate::content;
use crate::models::app_state::AppState;
use shared::models::news::time_ago;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_selector;

const WIDGETS: [(&str, &str); 5] = [
    ("weather", "Weather"),
    ("events", "Upcoming Events"),
    ("news", "Latest News"),
    ("activity", "Community Activity"),
    ("alerts", "Emergency Alerts"),
];

fn activity_feed() -> [(&'static str, &'static str, IconId); 3] {
    [
        (
            "New listings in the marketplace: 5 items added in the last hour",
            "1 hour ago",
            IconId::HeroiconsOutlineShoppingBag,
        ),
        (
            "Active discussion: \"Ideas for improving the downtown area\" - 23 new comments",
            "3 hours ago",
            IconId::HeroiconsOutlineChatBubbleLeftRight,
        ),
        (
            "Community cleanup event now has 45 volunteers signed up",
            "5 hours ago",
            IconId::HeroiconsOutlineUsers,
        ),
    ]
}

/// Dashboard page: a configurable set of widgets over the catalog.
///
/// Widget visibility and the grid/list layout are page-local UI state;
/// nothing here touches the session beyond reads.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let city_name = use_selector(|state: &AppState| state.session.city_name.clone());
    let grid_layout = use_state(|| true);
    let disabled: UseStateHandle<Vec<&'static str>> = use_state(Vec::new);

    let toggle_layout = {
        let grid_layout = grid_layout.clone();
        Callback::from(move |_: MouseEvent| grid_layout.set(!*grid_layout))
    };

    let widget_body = |id: &str| -> Html {
        match id {
            "weather" => html! { <WeatherWidget /> },
            "alerts" => html! { <EmergencyAlerts /> },
            "events" => html! {
                <div class="card bg-base-200 shadow-sm">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineCalendarDays} class="w-6 h-6" />
                            { "Upcoming Events" }
                        </h2>
                        {
                            for content::events().into_iter().take(3).map(|event| html! {
                                <div key={event.id} class="py-1">
                                    <p class="font-medium">{ event.title }</p>
                                    <p class="text-sm text-base-content/60">
                                        { format!("{} · {} · {}", event.date.format("%b %-d"), event.time, event.location) }
                                    </p>
                                </div>
                            })
                        }
                    </div>
                </div>
            },
            "news" => html! {
                <div class="card bg-base-200 shadow-sm">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineNewspaper} class="w-6 h-6" />
                            { "Latest News" }
                        </h2>
                        {
                            for content::news_articles().into_iter().take(3).map(|article| {
                                let age = time_ago(article.published_at, chrono::Utc::now());
                                html! {
                                    <div key={article.id} class="py-1">
                                        <p class="font-medium">{ article.title }</p>
                                        <p class="text-sm text-base-content/60">
                                            { format!("{} · {}", article.author, age) }
                                        </p>
                                    </div>
                                }
                            })
                        }
                    </div>
                </div>
            },
            _ => html! {
                <div class="card bg-base-200 shadow-sm">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={IconId::HeroiconsOutlineArrowTrendingUp} class="w-6 h-6" />
                            { "Community Activity" }
                        </h2>
                        {
                            for activity_feed().into_iter().map(|(text, time, icon_id)| html! {
                                <div key={text} class="flex items-center gap-3 py-1">
                                    <Icon {icon_id} class="w-5 h-5 text-primary" />
                                    <div class="flex-1">
                                        <p class="text-sm">{ text }</p>
                                        <p class="text-xs text-base-content/60">{ time }</p>
                                    </div>
                                </div>
                            })
                        }
                    </div>
                </div>
            },
        }
    };

    let enabled_widgets: Vec<&'static str> = WIDGETS
        .iter()
        .map(|&(id, _)| id)
        .filter(|id| !disabled.contains(id))
        .collect();

    let container_classes = if *grid_layout {
        "grid grid-cols-1 md:grid-cols-2 gap-4"
    } else {
        "flex flex-col gap-4"
    };

    html! {
        <div class="p-4 space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold">{ format!("{} Dashboard", *city_name) }</h1>
                    <p class="text-base-content/60">{ "Your community at a glance" }</p>
                </div>
                <button class="btn btn-ghost btn-sm" onclick={toggle_layout} aria-label="Toggle layout">
                    <Icon
                        icon_id={if *grid_layout { IconId::HeroiconsOutlineListBullet } else { IconId::HeroiconsOutlineSquares2X2 }}
                        class="w-5 h-5"
                    />
                </button>
            </div>

            <div class="flex flex-wrap gap-2">
                {
                    for WIDGETS.iter().map(|&(id, title)| {
                        let is_enabled = !disabled.contains(&id);
                        let onclick = {
                            let disabled = disabled.clone();
                            Callback::from(move |_: MouseEvent| {
                                let mut next = (*disabled).clone();
                                if let Some(pos) = next.iter().position(|d| *d == id) {
                                    next.remove(pos);
                                } else {
                                    next.push(id);
                                }
                                disabled.set(next);
                            })
                        };
                        let classes = if is_enabled { "btn btn-xs btn-primary" } else { "btn btn-xs btn-ghost" };
                        html! { <button key={id} class={classes} {onclick}>{ title }</button> }
                    })
                }
            </div>

            <div class={container_classes}>
                {
                    for enabled_widgets.into_iter().map(|id| html! {
                        <div key={id}>{ widget_body(id) }</div>
                    })
                }
            </div>
        </div>
    }
}
