use crate::api::CommunityClient;
use crate::models::app_state::AppState;
use chrono::DateTime;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

/// Quick questions offered above the history.
const QUICK_QUESTIONS: [(&str, &str, IconId); 4] = [
    (
        "What's the weather like today?",
        "Weather",
        IconId::HeroiconsOutlineClock,
    ),
    (
        "Where is the nearest hospital?",
        "Emergency",
        IconId::HeroiconsOutlineMapPin,
    ),
    (
        "What events are happening this weekend?",
        "Events",
        IconId::HeroiconsOutlineCalendarDays,
    ),
    (
        "How do I contact city hall?",
        "Government",
        IconId::HeroiconsOutlinePhone,
    ),
];

fn format_clock(timestamp_millis: i64) -> String {
    DateTime::from_timestamp_millis(timestamp_millis)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_default()
}

/// AI assistant page: query form, quick questions, and recent exchanges.
///
/// Submitting asks the simulated assistant (~2 s), then appends the
/// exchange via `add_ai_query` — the store assigns the timestamp, so the
/// history stays chronologically ordered no matter how replies race.
#[function_component(AssistantPage)]
pub fn assistant_page() -> Html {
    let (state, dispatch) = use_store::<AppState>();
    let city_name = state.session.city_name.clone();

    let query = use_state(String::new);
    let is_loading = use_state(|| false);

    let on_query_change = {
        let query = query.clone();
        move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        }
    };

    let on_submit = {
        let query = query.clone();
        let is_loading = is_loading.clone();
        let dispatch = dispatch.clone();
        let city_name = city_name.clone();

        move |e: SubmitEvent| {
            e.prevent_default();

            let question = query.trim().to_string();
            if question.is_empty() || *is_loading {
                return;
            }

            is_loading.set(true);

            let query = query.clone();
            let is_loading = is_loading.clone();
            let dispatch = dispatch.clone();
            let city_name = city_name.clone();
            spawn_local(async move {
                let client = CommunityClient::shared();
                match client.ask_assistant(&city_name, &question).await {
                    Ok(reply) => {
                        dispatch.reduce_mut(|app| app.session.add_ai_query(question, reply));
                        query.set(String::new());
                    }
                    Err(err) => log::error!("assistant query failed: {err}"),
                }
                is_loading.set(false);
            });
        }
    };

    // Latest five exchanges, newest first.
    let recent: Vec<_> = state
        .session
        .ai_history
        .iter()
        .rev()
        .take(5)
        .cloned()
        .collect();

    html! {
        <div class="p-4 space-y-6">
            <div class="text-center">
                <h1 class="text-2xl font-bold mb-2">{ "AI Assistant" }</h1>
                <p class="text-base-content/60">{ format!("Ask me anything about {city_name}") }</p>
            </div>

            <form onsubmit={on_submit}>
                <div class="join w-full">
                    <input
                        type="text"
                        class="input input-bordered join-item w-full"
                        placeholder="Ask about local businesses, events, weather..."
                        value={(*query).clone()}
                        onchange={on_query_change}
                        disabled={*is_loading}
                        data-testid="assistant-query-input"
                    />
                    <button type="button" class="btn join-item" aria-label="Voice input">
                        <Icon icon_id={IconId::HeroiconsOutlineMicrophone} class="w-5 h-5" />
                    </button>
                    <button
                        type="submit"
                        class="btn btn-primary join-item"
                        disabled={query.trim().is_empty() || *is_loading}
                        data-testid="assistant-submit-button"
                    >
                        if *is_loading {
                            <span class="loading loading-spinner loading-sm"></span>
                        } else {
                            <Icon icon_id={IconId::HeroiconsOutlinePaperAirplane} class="w-5 h-5" />
                        }
                    </button>
                </div>
            </form>

            <div>
                <h2 class="text-lg font-semibold mb-3">{ "Popular Questions" }</h2>
                <div class="grid grid-cols-1 gap-3">
                    {
                        for QUICK_QUESTIONS.into_iter().map(|(question, category, icon_id)| {
                            let onclick = {
                                let query = query.clone();
                                Callback::from(move |_: MouseEvent| query.set(question.to_string()))
                            };
                            html! {
                                <button key={question} class="card bg-base-200 shadow-sm text-left" {onclick}>
                                    <div class="card-body p-4 flex-row items-center gap-3">
                                        <div class="bg-primary/10 rounded-lg w-10 h-10 flex items-center justify-center">
                                            <Icon {icon_id} class="w-5 h-5 text-primary" />
                                        </div>
                                        <div class="flex-1">
                                            <p class="font-medium">{ question }</p>
                                            <p class="text-sm text-base-content/60">{ category }</p>
                                        </div>
                                    </div>
                                </button>
                            }
                        })
                    }
                </div>
            </div>

            if !recent.is_empty() {
                <div>
                    <h2 class="text-lg font-semibold mb-3">{ "Recent Conversations" }</h2>
                    <div class="space-y-4">
                        {
                            for recent.iter().map(|exchange| html! {
                                <div key={exchange.timestamp} class="card bg-base-200 shadow-sm">
                                    <div class="card-body p-4 space-y-2">
                                        <div>
                                            <p class="font-medium">{ format!("Q: {}", exchange.query) }</p>
                                            <p class="text-sm text-base-content/60">{ format_clock(exchange.timestamp) }</p>
                                        </div>
                                        <div class="bg-base-300 rounded-lg p-3 space-y-2">
                                            <p>{ exchange.response.answer.clone() }</p>
                                            <div class="flex items-center justify-between text-xs text-base-content/60">
                                                <span>{ format!("Confidence: {}%", (exchange.response.confidence * 100.0).round() as u32) }</span>
                                                <span>{ format!("Sources: {}", exchange.response.sources.join(", ")) }</span>
                                            </div>
                                        </div>
                                    </div>
                                </div>
                            })
                        }
                    </div>
                </div>
            }
        </div>
    }
}
