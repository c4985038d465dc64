use crate::routes::MainRoute;
use yew::{Html, function_component, html};
use yew_router::prelude::Link;

/// 404 page for unmatched routes.
#[function_component(ErrorPage)]
pub fn error_page() -> Html {
    html! {
        <div class="flex flex-col items-center justify-center p-16 text-center space-y-4">
            <h1 class="text-5xl font-bold">{ "404" }</h1>
            <p class="text-base-content/70">{ "That page doesn't exist in this community." }</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                { "Back to Home" }
            </Link<MainRoute>>
        </div>
    }
}
