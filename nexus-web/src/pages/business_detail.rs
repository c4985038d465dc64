use crate::components::StarRating;
use crate::content;
use crate::routes::MainRoute;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct BusinessDetailProps {
    pub id: u32,
}

/// Single-business view looked up from the catalog by route id.
#[function_component(BusinessDetailPage)]
pub fn business_detail_page(props: &BusinessDetailProps) -> Html {
    let Some(business) = content::businesses()
        .into_iter()
        .find(|business| business.id == props.id)
    else {
        return html! {
            <div class="p-16 text-center space-y-4">
                <h1 class="text-2xl font-bold">{ "Business not found" }</h1>
                <Link<MainRoute> to={MainRoute::Businesses} classes="btn btn-primary">
                    { "Back to Directory" }
                </Link<MainRoute>>
            </div>
        };
    };

    html! {
        <div class="p-4 space-y-4 max-w-2xl mx-auto">
            <Link<MainRoute> to={MainRoute::Businesses} classes="btn btn-ghost btn-sm">
                <Icon icon_id={IconId::HeroiconsOutlineChevronLeft} class="w-4 h-4" />
                { "Directory" }
            </Link<MainRoute>>

            <div class="card bg-base-200 shadow-sm">
                <div class="card-body">
                    <div class="flex items-center justify-between">
                        <h1 class="card-title text-2xl">{ business.name.clone() }</h1>
                        <span class="badge badge-ghost">{ business.category.clone() }</span>
                    </div>
                    <StarRating rating={business.rating} review_count={business.review_count} />
                    <p class="text-base-content/80">{ business.description.clone() }</p>

                    <div class="divider my-1"></div>
                    <div class="space-y-2 text-sm">
                        <div class="flex items-center gap-2">
                            <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-4 h-4 text-primary" />
                            { business.address.clone() }
                        </div>
                        <div class="flex items-center gap-2">
                            <Icon icon_id={IconId::HeroiconsOutlinePhone} class="w-4 h-4 text-primary" />
                            { business.phone.clone() }
                        </div>
                        <div class="flex items-center gap-2">
                            <Icon icon_id={IconId::HeroiconsOutlineGlobeAlt} class="w-4 h-4 text-primary" />
                            { business.website.clone() }
                        </div>
                        <div class="flex items-center gap-2">
                            <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-4 h-4 text-primary" />
                            { business.hours.clone() }
                        </div>
                    </div>

                    <div class="card-actions justify-end pt-2">
                        <button class="btn btn-outline btn-sm">
                            <Icon icon_id={IconId::HeroiconsOutlinePhone} class="w-4 h-4" />
                            { "Call" }
                        </button>
                        <button class="btn btn-primary btn-sm">
                            <Icon icon_id={IconId::HeroiconsOutlineGlobeAlt} class="w-4 h-4" />
                            { "Visit Website" }
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
