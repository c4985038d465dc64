use crate::content;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use shared::models::news::time_ago;
use shared::models::{NewsArticle, filter_by_category};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_store;

const TABS: [(&str, &str); 5] = [
    ("all", "All News"),
    ("breaking", "Breaking"),
    ("local", "Local"),
    ("government", "Government"),
    ("events", "Events"),
];

/// News center: tabbed category filter over the article catalog.
///
/// Breaking articles carry a pin control that publishes their title to the
/// session's breaking-news banner (`set_breaking_news`).
#[function_component(NewsPage)]
pub fn news_page() -> Html {
    let navigator = use_navigator().expect("router context");
    let (state, dispatch) = use_store::<AppState>();
    let city_name = state.session.city_name.clone();

    let active_tab = use_state(|| "all".to_string());

    let articles = content::news_articles();
    let filtered: Vec<NewsArticle> = filter_by_category(&articles, &active_tab)
        .into_iter()
        .cloned()
        .collect();

    let now = chrono::Utc::now();

    html! {
        <div class="p-4 space-y-6">
            <div>
                <h1 class="text-2xl font-bold mb-2">{ format!("{city_name} News") }</h1>
                <p class="text-base-content/60">{ "Stay informed with the latest community updates" }</p>
            </div>

            <div role="tablist" class="tabs tabs-boxed">
                {
                    for TABS.into_iter().map(|(slug, label)| {
                        let onclick = {
                            let active_tab = active_tab.clone();
                            Callback::from(move |_: MouseEvent| active_tab.set(slug.to_string()))
                        };
                        let classes = if *active_tab == slug { "tab tab-active" } else { "tab" };
                        html! { <a key={slug} role="tab" class={classes} {onclick}>{ label }</a> }
                    })
                }
            </div>

            <div class="space-y-4">
                {
                    for filtered.into_iter().map(|article| {
                        let open_article = {
                            let navigator = navigator.clone();
                            let id = article.id;
                            Callback::from(move |_: MouseEvent| {
                                navigator.push(&MainRoute::NewsArticle { id });
                            })
                        };
                        let pin_banner = article.is_breaking.then(|| {
                            let dispatch = dispatch.clone();
                            let title = article.title.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.stop_propagation();
                                dispatch.reduce_mut(|app| {
                                    app.session.set_breaking_news(Some(title.clone()));
                                });
                            })
                        });
                        html! {
                            <div key={article.id} class="card bg-base-200 shadow-sm cursor-pointer hover:shadow-md transition-shadow" onclick={open_article}>
                                <div class="card-body p-4">
                                    <div class="flex items-center gap-2">
                                        if article.is_breaking {
                                            <span class="badge badge-error">{ "Breaking" }</span>
                                        }
                                        <span class="badge badge-ghost">{ article.category.clone() }</span>
                                    </div>
                                    <h2 class="card-title text-lg">{ article.title.clone() }</h2>
                                    <p class="text-base-content/70">{ article.summary.clone() }</p>
                                    <div class="flex items-center justify-between text-sm text-base-content/60">
                                        <span>{ format!("{} · {}", article.author, time_ago(article.published_at, now)) }</span>
                                        <span class="flex items-center gap-3">
                                            <span class="flex items-center gap-1">
                                                <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-4 h-4" />
                                                { format!("{} min", article.read_minutes) }
                                            </span>
                                            <span class="flex items-center gap-1">
                                                <Icon icon_id={IconId::HeroiconsOutlineEye} class="w-4 h-4" />
                                                { article.views }
                                            </span>
                                        </span>
                                    </div>
                                    if let Some(pin) = pin_banner {
                                        <div class="card-actions justify-end">
                                            <button class="btn btn-outline btn-error btn-xs" onclick={pin}>
                                                { "Pin to banner" }
                                            </button>
                                        </div>
                                    }
                                </div>
                            </div>
                        }
                    })
                }
            </div>
        </div>
    }
}
