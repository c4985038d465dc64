use crate::components::{CategoryPills, StarRating};
use crate::content;
use shared::models::{ServiceProvider, filter_by_category};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

const CATEGORIES: [(&str, &str); 6] = [
    ("all", "All Services"),
    ("home", "Home Services"),
    ("health", "Healthcare"),
    ("professional", "Professional"),
    ("education", "Education"),
    ("beauty", "Beauty & Wellness"),
];

/// Local services directory with category filtering.
#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    let active_category = use_state(|| "all".to_string());

    let providers = content::service_providers();
    let filtered: Vec<ServiceProvider> = filter_by_category(&providers, &active_category)
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
                <h1 class="text-2xl font-bold mb-2">{ "Local Services" }</h1>
                <p class="text-base-content/60">{ "Trusted providers in your community" }</p>
            </div>

            <CategoryPills
                categories={CATEGORIES.to_vec()}
                active={(*active_category).clone()}
                {on_select}
            />

            <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                {
                    for filtered.into_iter().map(|provider| html! {
                        <div key={provider.id} class="card bg-base-200 shadow-sm">
                            <div class="card-body p-4">
                                <h2 class="card-title text-lg">{ provider.name.clone() }</h2>
                                <StarRating rating={provider.rating} />
                                <p class="text-base-content/70">{ provider.description.clone() }</p>
                                <div class="flex flex-wrap gap-4 text-sm text-base-content/60">
                                    <span class="flex items-center gap-1">
                                        <Icon icon_id={IconId::HeroiconsOutlinePhone} class="w-4 h-4" />
                                        { provider.phone.clone() }
                                    </span>
                                    <span class="flex items-center gap-1">
                                        <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-4 h-4" />
                                        { provider.availability.clone() }
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
