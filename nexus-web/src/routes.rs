use crate::{containers::layout::Layout, pages::*};
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/ai-assistant")]
    Assistant,
    #[at("/news")]
    News,
    #[at("/news/:id")]
    NewsArticle { id: u32 },
    #[at("/community")]
    Community,
    #[at("/events")]
    Events,
    #[at("/marketplace")]
    Marketplace,
    #[at("/marketplace/:id")]
    MarketplaceDetail { id: u32 },
    #[at("/businesses")]
    Businesses,
    #[at("/business/:id")]
    BusinessDetail { id: u32 },
    #[at("/services")]
    Services,
    #[at("/deals")]
    Deals,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    let page = match route.clone() {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::Dashboard => html! { <DashboardPage /> },
        MainRoute::Assistant => html! { <AssistantPage /> },
        MainRoute::News => html! { <NewsPage /> },
        MainRoute::NewsArticle { id } => html! { <NewsArticlePage {id} /> },
        MainRoute::Community => html! { <CommunityPage /> },
        MainRoute::Events => html! { <EventsPage /> },
        MainRoute::Marketplace => html! { <MarketplacePage /> },
        MainRoute::MarketplaceDetail { id } => html! { <MarketplaceDetailPage {id} /> },
        MainRoute::Businesses => html! { <BusinessesPage /> },
        MainRoute::BusinessDetail { id } => html! { <BusinessDetailPage {id} /> },
        MainRoute::Services => html! { <ServicesPage /> },
        MainRoute::Deals => html! { <DealsPage /> },
        MainRoute::Profile => html! { <ProfilePage /> },
        MainRoute::NotFound => html! { <ErrorPage /> },
    };

    html! { <Layout current_route={route}>{ page }</Layout> }
}
