use crate::models::app_state::AppState;
use yew::{Callback, Html, function_component, html};
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

/// Dismissable banner for the session's breaking-news message.
///
/// Renders nothing while no message is set. Dismissing clears the message
/// via `set_breaking_news(None)`; the banner is session-local and never
/// persisted.
#[function_component(BreakingNewsBar)]
pub fn breaking_news_bar() -> Html {
    let (state, dispatch) = use_store::<AppState>();

    let Some(message) = state.session.breaking_news.clone() else {
        return html! {};
    };

    let on_dismiss = Callback::from(move |_: yew::MouseEvent| {
        dispatch.reduce_mut(|app| app.session.set_breaking_news(None));
    });

    html! {
        <div class="alert alert-error rounded-none flex items-center justify-between px-4 py-3">
            <div class="flex items-center gap-3 flex-1">
                <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="w-5 h-5 flex-shrink-0" />
                <div class="flex-1">
                    <span class="font-semibold text-sm">{ "BREAKING:" }</span>
                    <span class="ml-2 text-sm">{ message }</span>
                </div>
            </div>
            <button class="btn btn-ghost btn-xs" onclick={on_dismiss} aria-label="Dismiss">
                <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-4 h-4" />
            </button>
        </div>
    }
}
