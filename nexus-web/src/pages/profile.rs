use crate::content;
use crate::models::app_state::AppState;
use shared::models::UserType;
use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

fn plan_blurb(tier: UserType) -> &'static str {
    match tier {
        UserType::Free => "Browse the hub, ask the assistant, and save listings.",
        UserType::Paid => "Priority placement for your listings and deal alerts.",
        UserType::Publisher => "Publish news and pin community announcements.",
    }
}

/// Profile page: identity (or guest state), membership plans, saved
/// listings, and logout.
///
/// Authentication is stubbed — there is no login flow — so this page
/// usually renders the guest state. Logout still runs the full operation:
/// identity cleared and the tier forced back to free.
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let user = state.session.user.clone();
    let user_type = state.session.user_type;

    let on_logout = {
        let dispatch = dispatch.clone();
        Callback::from(move |_: MouseEvent| {
            dispatch.reduce_mut(|app| app.session.logout());
        })
    };

    let saved_listings: Vec<_> = content::listings()
        .into_iter()
        .filter(|listing| listing.is_featured)
        .collect();

    html! {
        <div class="p-4 space-y-6">
            <div class="card bg-base-200 shadow-sm">
                <div class="card-body items-center text-center">
                    <div class="bg-primary/10 rounded-full w-20 h-20 flex items-center justify-center">
                        <Icon icon_id={IconId::HeroiconsOutlineUser} class="w-10 h-10 text-primary" />
                    </div>
                    {
                        match user {
                            Some(ref user) => html! {
                                <>
                                    <h1 class="text-xl font-bold">
                                        { user.display_name.clone().unwrap_or_else(|| user.username.clone()) }
                                    </h1>
                                    <p class="text-sm text-base-content/60">{ user.email.clone() }</p>
                                </>
                            },
                            None => html! {
                                <>
                                    <h1 class="text-xl font-bold">{ "Guest" }</h1>
                                    <p class="text-sm text-base-content/60">
                                        { "Sign-in isn't available yet — you're browsing as a guest." }
                                    </p>
                                </>
                            },
                        }
                    }
                    <span class="badge badge-primary">
                        { format!("{} Member", user_type.plan_label()) }
                    </span>
                </div>
            </div>

            <div>
                <h2 class="text-lg font-semibold mb-3">{ "Membership Plans" }</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                    {
                        for UserType::iter().map(|tier| {
                            let is_current = tier == user_type;
                            let card_classes = if is_current {
                                "card bg-base-200 shadow-sm border-2 border-primary"
                            } else {
                                "card bg-base-200 shadow-sm"
                            };
                            html! {
                                <div key={tier.to_string()} class={card_classes}>
                                    <div class="card-body p-4">
                                        <h3 class="card-title text-base">{ tier.plan_label() }</h3>
                                        <p class="text-sm text-base-content/70">{ plan_blurb(tier) }</p>
                                        <div class="card-actions justify-end">
                                            if is_current {
                                                <span class="badge badge-primary">{ "Current plan" }</span>
                                            } else {
                                                <button class="btn btn-outline btn-xs" disabled={true}>
                                                    { "Coming soon" }
                                                </button>
                                            }
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                    }
                </div>
            </div>

            <div>
                <h2 class="text-lg font-semibold mb-3">{ "Saved Listings" }</h2>
                <div class="space-y-3">
                    {
                        for saved_listings.into_iter().map(|listing| html! {
                            <div key={listing.id} class="card bg-base-200 shadow-sm">
                                <div class="card-body p-4 flex-row items-center justify-between">
                                    <div>
                                        <p class="font-medium">{ listing.title.clone() }</p>
                                        <p class="text-sm text-base-content/60">{ listing.location.clone() }</p>
                                    </div>
                                    <span class="text-primary font-semibold">{ listing.price.clone() }</span>
                                </div>
                            </div>
                        })
                    }
                </div>
            </div>

            <button class="btn btn-outline btn-error w-full" onclick={on_logout}>
                { "Log Out" }
            </button>
        </div>
    }
}
