use crate::components::CategoryPills;
use crate::content;
use crate::models::app_state::AppState;
use crate::routes::MainRoute;
use shared::models::news::time_ago;
use shared::models::{FilterUpdate, Listing};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_store;

const CATEGORIES: [(&str, &str); 5] = [
    ("all", "All"),
    ("realestate", "Real Estate"),
    ("automotive", "Automotive"),
    ("jobs", "Jobs"),
    ("general", "General"),
];

/// Search and category narrowing over the listing catalog.
fn visible_listings(listings: &[Listing], category: &str, query: &str) -> Vec<Listing> {
    let needle = query.trim().to_lowercase();
    listings
        .iter()
        .filter(|listing| category == "all" || listing.category == category)
        .filter(|listing| needle.is_empty() || listing.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Marketplace page.
///
/// Unlike the other directories, search text and the category filter live
/// in the session (`set_search_query` / `set_filters`) so they survive
/// in-app navigation — but they are session-local and reset on restart.
#[function_component(MarketplacePage)]
pub fn marketplace_page() -> Html {
    let navigator = use_navigator().expect("router context");
    let (state, dispatch) = use_store::<AppState>();

    let search_query = state.session.search_query.clone();
    let active_category = state.session.filters.category.clone();

    let listings = content::listings();
    let filtered = visible_listings(&listings, &active_category, &search_query);

    let on_search_change = {
        let dispatch = dispatch.clone();
        move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            dispatch.reduce_mut(|app| app.session.set_search_query(input.value()));
        }
    };

    let on_select = {
        let dispatch = dispatch.clone();
        Callback::from(move |slug: &'static str| {
            dispatch.reduce_mut(|app| app.session.set_filters(FilterUpdate::category(slug)));
        })
    };

    let now = chrono::Utc::now();

    html! {
        <div class="p-4 space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold mb-2">{ "Marketplace" }</h1>
                    <p class="text-base-content/60">{ "Buy, sell, and discover locally" }</p>
                </div>
                <button class="btn btn-primary btn-square" aria-label="Post a listing">
                    <Icon icon_id={IconId::HeroiconsOutlinePlus} class="w-6 h-6" />
                </button>
            </div>

            <label class="input input-bordered flex items-center gap-2 w-full">
                <Icon icon_id={IconId::HeroiconsOutlineMagnifyingGlass} class="w-5 h-5 text-base-content/40" />
                <input
                    type="text"
                    class="grow"
                    placeholder="Search marketplace..."
                    value={search_query}
                    onchange={on_search_change}
                    data-testid="marketplace-search-input"
                />
            </label>

            <CategoryPills
                categories={CATEGORIES.to_vec()}
                active={active_category}
                {on_select}
            />

            if filtered.is_empty() {
                <div class="text-center text-base-content/60 p-8">
                    { "No listings match your search." }
                </div>
            }

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {
                    for filtered.into_iter().map(|listing| {
                        let onclick = {
                            let navigator = navigator.clone();
                            let id = listing.id;
                            Callback::from(move |_: MouseEvent| {
                                navigator.push(&MainRoute::MarketplaceDetail { id });
                            })
                        };
                        html! {
                            <div key={listing.id} class="card bg-base-200 shadow-sm cursor-pointer hover:shadow-md transition-shadow" {onclick}>
                                <div class="card-body p-4">
                                    <div class="flex items-center justify-between">
                                        <h2 class="card-title text-lg">{ listing.title.clone() }</h2>
                                        if listing.is_featured {
                                            <span class="badge badge-warning">{ "Featured" }</span>
                                        }
                                    </div>
                                    <p class="text-primary font-semibold">{ listing.price.clone() }</p>
                                    <div class="flex items-center gap-4 text-sm text-base-content/60">
                                        <span class="flex items-center gap-1">
                                            <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-4 h-4" />
                                            { listing.location.clone() }
                                        </span>
                                        <span class="flex items-center gap-1">
                                            <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-4 h-4" />
                                            { time_ago(listing.posted_at, now) }
                                        </span>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_and_search_narrowing_compose() {
        let listings = content::listings();

        let all = visible_listings(&listings, "all", "");
        assert_eq!(all.len(), listings.len());

        let realestate = visible_listings(&listings, "realestate", "");
        assert!(!realestate.is_empty());
        assert!(realestate.iter().all(|l| l.category == "realestate"));

        let searched = visible_listings(&listings, "all", "guitar");
        assert_eq!(searched.len(), 1);
        assert!(searched[0].title.contains("Guitar"));

        // Search is case-insensitive and composes with the category filter.
        let both = visible_listings(&listings, "general", "GUITAR");
        assert_eq!(both.len(), 1);
        let none = visible_listings(&listings, "jobs", "guitar");
        assert!(none.is_empty());
    }
}
