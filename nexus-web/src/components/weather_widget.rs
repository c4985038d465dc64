use crate::api::CommunityClient;
use crate::models::app_state::AppState;
use shared::models::WeatherReport;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yewdux::prelude::use_selector;

/// Weather card backed by the simulated weather capability.
///
/// Fetches once on mount (fixed ~1 s latency), showing a skeleton in the
/// meantime. The expanded view adds the daily and hourly forecasts.
#[function_component(WeatherWidget)]
pub fn weather_widget() -> Html {
    let city_name = use_selector(|state: &AppState| state.session.city_name.clone());
    let report = use_state(|| Option::<WeatherReport>::None);
    let expanded = use_state(|| false);

    {
        let report = report.clone();
        let city_name = city_name.clone();
        use_effect_with((), move |()| {
            spawn_local(async move {
                let client = CommunityClient::shared();
                match client.fetch_weather(&city_name).await {
                    Ok(fetched) => report.set(Some(fetched)),
                    Err(err) => log::error!("weather fetch failed: {err}"),
                }
            });
            || {}
        });
    }

    let Some(ref data) = *report else {
        return html! {
            <div class="card bg-base-200 shadow-sm animate-pulse">
                <div class="card-body">
                    <div class="h-6 bg-base-300 rounded w-1/3"></div>
                    <div class="h-8 bg-base-300 rounded w-1/4"></div>
                    <div class="h-4 bg-base-300 rounded w-2/3"></div>
                </div>
            </div>
        };
    };

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let current = &data.current;
    html! {
        <div class="card bg-base-200 shadow-sm">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h2 class="card-title">{ "Weather" }</h2>
                    <span class="text-3xl">{ current.icon.clone() }</span>
                </div>
                <div class="flex items-end gap-2">
                    <span class="text-4xl font-bold">{ format!("{}°", current.temp_f) }</span>
                    <span class="text-base-content/70 mb-1">{ current.condition.clone() }</span>
                </div>
                <div class="flex gap-4 text-sm text-base-content/70">
                    <span>{ format!("Feels like {}°", current.feels_like_f) }</span>
                    <span>{ format!("Humidity {}%", current.humidity) }</span>
                    <span>{ format!("Wind {} mph", current.wind_mph) }</span>
                </div>
                if *expanded {
                    <div class="divider my-1"></div>
                    <div class="grid grid-cols-5 gap-2 text-center text-sm">
                        {
                            for data.daily.iter().map(|day| html! {
                                <div key={day.day.clone()}>
                                    <div class="font-medium">{ day.day.clone() }</div>
                                    <div class="text-xl">{ day.icon.clone() }</div>
                                    <div>{ format!("{}°/{}°", day.high_f, day.low_f) }</div>
                                    <div class="text-base-content/60">{ format!("{}%", day.precipitation) }</div>
                                </div>
                            })
                        }
                    </div>
                    <div class="flex gap-3 overflow-x-auto text-center text-sm pt-2">
                        {
                            for data.hourly.iter().map(|hour| html! {
                                <div key={hour.time.clone()} class="min-w-14">
                                    <div class="text-base-content/60">{ hour.time.clone() }</div>
                                    <div class="text-lg">{ hour.icon.clone() }</div>
                                    <div>{ format!("{}°", hour.temp_f) }</div>
                                </div>
                            })
                        }
                    </div>
                }
                <div class="card-actions justify-end">
                    <button class="btn btn-ghost btn-xs" onclick={on_toggle}>
                        { if *expanded { "Less" } else { "Forecast" } }
                    </button>
                </div>
            </div>
        </div>
    }
}
