use crate::content;
use crate::routes::MainRoute;
use shared::models::news::time_ago;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct NewsArticleProps {
    pub id: u32,
}

/// Single-article view looked up from the catalog by route id.
#[function_component(NewsArticlePage)]
pub fn news_article_page(props: &NewsArticleProps) -> Html {
    let Some(article) = content::news_articles()
        .into_iter()
        .find(|article| article.id == props.id)
    else {
        return html! {
            <div class="p-16 text-center space-y-4">
                <h1 class="text-2xl font-bold">{ "Article not found" }</h1>
                <Link<MainRoute> to={MainRoute::News} classes="btn btn-primary">
                    { "Back to News" }
                </Link<MainRoute>>
            </div>
        };
    };

    let age = time_ago(article.published_at, chrono::Utc::now());

    html! {
        <article class="p-4 space-y-4 max-w-2xl mx-auto">
            <Link<MainRoute> to={MainRoute::News} classes="btn btn-ghost btn-sm">
                <Icon icon_id={IconId::HeroiconsOutlineChevronLeft} class="w-4 h-4" />
                { "All News" }
            </Link<MainRoute>>

            <div class="flex items-center gap-2">
                if article.is_breaking {
                    <span class="badge badge-error">{ "Breaking" }</span>
                }
                <span class="badge badge-ghost">{ article.category.clone() }</span>
            </div>

            <h1 class="text-3xl font-bold">{ article.title.clone() }</h1>
            <div class="flex items-center gap-3 text-sm text-base-content/60">
                <span>{ article.author.clone() }</span>
                <span>{ age }</span>
                <span class="flex items-center gap-1">
                    <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-4 h-4" />
                    { format!("{} min read", article.read_minutes) }
                </span>
            </div>

            <p class="text-lg text-base-content/80">{ article.summary.clone() }</p>
            <div class="prose max-w-none text-base-content">
                <p>{ article.body.clone() }</p>
            </div>
        </article>
    }
}
