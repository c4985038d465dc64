use crate::components::breaking_news_bar::BreakingNewsBar;
use crate::config::FrontendConfig;
use crate::containers::bottom_nav::BottomNav;
use crate::containers::header::Header;
use crate::routes::MainRoute;
use yew::{Children, Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub current_route: MainRoute,
}

/// Application chrome around every routed page: header, breaking-news
/// banner, page body, and the bottom navigation.
#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let config = FrontendConfig::new();

    html! {
        <div class="min-h-screen bg-base-100">
            <Header />
            <BreakingNewsBar />
            <main class="mx-auto max-w-4xl pb-24">
                { props.children.clone() }
            </main>
            <footer class="footer footer-center p-4 pb-24 text-base-content/60">
                <div>
                    <p>
                        { "© 2025 Community Nexus · Powered by Rust, Yew and DaisyUI · " }
                        <a
                            href={config.documentation_url().to_string()}
                            target="_blank"
                            class="link link-hover"
                        >
                            { "Docs" }
                        </a>
                    </p>
                </div>
            </footer>
            <BottomNav current_route={props.current_route.clone()} />
        </div>
    }
}
