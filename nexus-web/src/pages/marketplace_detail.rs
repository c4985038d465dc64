use crate::content;
use crate::routes::MainRoute;
use shared::models::news::time_ago;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct MarketplaceDetailProps {
    pub id: u32,
}

/// Single-listing view looked up from the catalog by route id.
#[function_component(MarketplaceDetailPage)]
pub fn marketplace_detail_page(props: &MarketplaceDetailProps) -> Html {
    let Some(listing) = content::listings()
        .into_iter()
        .find(|listing| listing.id == props.id)
    else {
        return html! {
            <div class="p-16 text-center space-y-4">
                <h1 class="text-2xl font-bold">{ "Listing not found" }</h1>
                <Link<MainRoute> to={MainRoute::Marketplace} classes="btn btn-primary">
                    { "Back to Marketplace" }
                </Link<MainRoute>>
            </div>
        };
    };

    html! {
        <div class="p-4 space-y-4 max-w-2xl mx-auto">
            <Link<MainRoute> to={MainRoute::Marketplace} classes="btn btn-ghost btn-sm">
                <Icon icon_id={IconId::HeroiconsOutlineChevronLeft} class="w-4 h-4" />
                { "Marketplace" }
            </Link<MainRoute>>

            <div class="card bg-base-200 shadow-sm">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h1 class="card-title text-2xl">{ listing.title.clone() }</h1>
                        if listing.is_featured {
                            <span class="badge badge-warning">{ "Featured" }</span>
                        }
                    </div>
                    <p class="text-primary text-xl font-semibold">{ listing.price.clone() }</p>
                    <div class="flex flex-wrap gap-4 text-sm text-base-content/60">
                        <span class="flex items-center gap-1">
                            <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-4 h-4" />
                            { listing.location.clone() }
                        </span>
                        <span class="flex items-center gap-1">
                            <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-4 h-4" />
                            { time_ago(listing.posted_at, chrono::Utc::now()) }
                        </span>
                        <span class="badge badge-ghost">{ listing.category.clone() }</span>
                    </div>
                    <p class="text-base-content/80">{ listing.description.clone() }</p>
                    <div class="divider my-1"></div>
                    <div class="flex items-center justify-between">
                        <span class="text-sm text-base-content/60">
                            { format!("Listed by {}", listing.seller) }
                        </span>
                        <button class="btn btn-primary btn-sm">
                            <Icon icon_id={IconId::HeroiconsOutlineChatBubbleLeftRight} class="w-4 h-4" />
                            { "Contact Seller" }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
