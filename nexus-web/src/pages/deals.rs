use crate::components::CategoryPills;
use crate::content;
use shared::models::{Deal, filter_by_category};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

const CATEGORIES: [(&str, &str); 5] = [
    ("all", "All Deals"),
    ("restaurants", "Restaurants"),
    ("retail", "Retail"),
    ("services", "Services"),
    ("entertainment", "Entertainment"),
];

/// Local deals with discount badges and redemption codes.
#[function_component(DealsPage)]
pub fn deals_page() -> Html {
    let active_category = use_state(|| "all".to_string());

    let deals = content::deals();
    let filtered: Vec<Deal> = filter_by_category(&deals, &active_category)
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
                <h1 class="text-2xl font-bold mb-2">{ "Local Deals" }</h1>
                <p class="text-base-content/60">{ "Save at businesses around town" }</p>
            </div>

            <CategoryPills
                categories={CATEGORIES.to_vec()}
                active={(*active_category).clone()}
                {on_select}
            />

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {
                    for filtered.into_iter().map(|deal| html! {
                        <div key={deal.id} class="card bg-base-200 shadow-sm">
                            <div class="card-body p-4">
                                <div class="flex items-center justify-between">
                                    <h2 class="card-title text-lg">{ deal.title.clone() }</h2>
                                    <span class="badge badge-success badge-lg font-bold">
                                        { format!("{} OFF", deal.discount) }
                                    </span>
                                </div>
                                <p class="text-sm text-base-content/60">{ deal.business.clone() }</p>
                                <p class="text-base-content/70">{ deal.description.clone() }</p>
                                <div class="flex items-center justify-between text-sm">
                                    <span class="flex items-center gap-1 text-base-content/60">
                                        <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-4 h-4" />
                                        { format!("Valid until {}", deal.valid_until) }
                                    </span>
                                    <span class="flex items-center gap-1 font-mono font-semibold">
                                        <Icon icon_id={IconId::HeroiconsOutlineTag} class="w-4 h-4" />
                                        { deal.code.clone() }
                                    </span>
                                </div>
                            </div>
                        </div>
                    })
                }
            </div>
        </div>
    }
}
