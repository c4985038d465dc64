use crate::components::{CategoryPills, StarRating};
use crate::content;
use crate::routes::MainRoute;
use shared::models::{Business, filter_by_category};
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::use_navigator;

const CATEGORIES: [(&str, &str); 6] = [
    ("all", "All"),
    ("restaurants", "Restaurants"),
    ("retail", "Retail"),
    ("services", "Services"),
    ("healthcare", "Healthcare"),
    ("automotive", "Automotive"),
];

/// Business directory with category filtering and ratings.
#[function_component(BusinessesPage)]
pub fn businesses_page() -> Html {
    let navigator = use_navigator().expect("router context");
    let active_category = use_state(|| "all".to_string());

    let businesses = content::businesses();
    let filtered: Vec<Business> = filter_by_category(&businesses, &active_category)
        .into_iter()
        .cloned()
        .collect();

    let on_select = {
        let active_category = active_category.clone();
        Callback::from(move |slug: &'static str| active_category.set(slug.to_string()))
    };

    html! {
        <div class="p-4 space-y-6">
            <div>
                <h1 class="text-2xl font-bold mb-2">{ "Business Directory" }</h1>
                <p class="text-base-content/60">{ "Discover local shops and services" }</p>
            </div>

            <CategoryPills
                categories={CATEGORIES.to_vec()}
                active={(*active_category).clone()}
                {on_select}
            />

            <div class="space-y-4">
                {
                    for filtered.into_iter().map(|business| {
                        let onclick = {
                            let navigator = navigator.clone();
                            let id = business.id;
                            Callback::from(move |_: MouseEvent| {
                                navigator.push(&MainRoute::BusinessDetail { id });
                            })
                        };
                        html! {
                            <div key={business.id} class="card bg-base-200 shadow-sm cursor-pointer hover:shadow-md transition-shadow" {onclick}>
                                <div class="card-body p-4">
                                    <div class="flex items-center justify-between">
                                        <h2 class="card-title text-lg">{ business.name.clone() }</h2>
                                        if business.is_featured {
                                            <span class="badge badge-warning">{ "Featured" }</span>
                                        }
                                    </div>
                                    <StarRating rating={business.rating} review_count={business.review_count} />
                                    <p class="text-base-content/70">{ business.description.clone() }</p>
                                    <div class="flex flex-wrap gap-4 text-sm text-base-content/60">
                                        <span class="flex items-center gap-1">
                                            <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-4 h-4" />
                                            { business.address.clone() }
                                        </span>
                                        <span class="flex items-center gap-1">
                                            <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-4 h-4" />
                                            { business.hours.clone() }
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
