use yew::prelude::*;
use yew_icons::{Icon, IconId};

struct Landmark {
    title: &'static str,
    description: &'static str,
}

struct Happening {
    title: &'static str,
    when: &'static str,
    category: &'static str,
}

fn landmarks() -> Vec<Landmark> {
    vec![
        Landmark {
            title: "Historic Downtown District",
            description: "Walkable blocks of century-old storefronts, restaurants, and the \
                          Saturday arts walk.",
        },
        Landmark {
            title: "City Park and Recreation Center",
            description: "Trails, sports fields, a public pool, and the amphitheater that \
                          hosts the summer concert series.",
        },
        Landmark {
            title: "Annual Harvest Festival",
            description: "The fall tradition that closes Main Street for a weekend of food, \
                          music, and a farmers showcase.",
        },
    ]
}

fn happenings() -> Vec<Happening> {
    vec![
        Happening {
            title: "City Council Meeting",
            when: "Tuesday, 7 PM",
            category: "Government",
        },
        Happening {
            title: "Farmers Market",
            when: "Saturday, 8 AM",
            category: "Community",
        },
        Happening {
            title: "Library Book Club",
            when: "Thursday, 6 PM",
            category: "Culture",
        },
    ]
}

fn category_badge(category: &str) -> &'static str {
    match category {
        "Government" => "badge badge-info",
        "Community" => "badge badge-success",
        _ => "badge badge-secondary",
    }
}

/// Community hub: local landmarks and regular happenings.
#[function_component(CommunityPage)]
pub fn community_page() -> Html {
    html! {
        <div class="p-4 space-y-6">
            <div>
                <h1 class="text-2xl font-bold mb-2">{ "Community Hub" }</h1>
                <p class="text-base-content/60">{ "Get to know the places and rhythms of your community" }</p>
            </div>

            <div>
                <h2 class="text-lg font-semibold mb-3">{ "Landmarks" }</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {
                        for landmarks().into_iter().map(|landmark| html! {
                            <div key={landmark.title} class="card bg-base-200 shadow-sm">
                                <div class="card-body p-4">
                                    <h3 class="card-title text-base">
                                        <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-5 h-5 text-primary" />
                                        { landmark.title }
                                    </h3>
                                    <p class="text-sm text-base-content/70">{ landmark.description }</p>
                                </div>
                            </div>
                        })
                    }
                </div>
            </div>

            <div>
                <h2 class="text-lg font-semibold mb-3">{ "Regular Happenings" }</h2>
                <div class="card bg-base-200 shadow-sm">
                    <div class="card-body p-4 divide-y divide-base-300">
                        {
                            for happenings().into_iter().map(|happening| html! {
                                <div key={happening.title} class="flex items-center justify-between py-3">
                                    <div>
                                        <p class="font-medium">{ happening.title }</p>
                                        <p class="text-sm text-base-content/60">{ happening.when }</p>
                                    </div>
                                    <span class={category_badge(happening.category)}>{ happening.category }</span>
                                </div>
                            })
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
