//! Setup container module for first-time platform configuration.
//!
//! Shown while the session is unconfigured. It collects the community
//! name, runs the simulated provisioning step, and flips the session into
//! its configured state — after which the router takes over.

use super::setup_validation::validate_city_name;
use crate::api::CommunityClient;
use crate::config::FrontendConfig;
use crate::models::app_state::AppState;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::{
    Html, TargetCast,
    events::{Event, SubmitEvent},
    function_component, html, use_state,
};
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

/// Component for first-time setup of the platform.
///
/// Presents a single-field form asking for the city or community name.
/// Submission is disabled while the trimmed name is empty (the store
/// itself imposes no validation) and while provisioning runs. On success
/// the community name is written to the session, which marks it
/// configured; no reload is needed.
#[function_component(Setup)]
pub fn setup() -> Html {
    let (_state, dispatch) = use_store::<AppState>();
    let config = FrontendConfig::new();

    let city_name = use_state(String::new);
    let is_submitting = use_state(|| false);

    let on_city_name_change = {
        let city_name = city_name.clone();
        move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            city_name.set(input.value());
        }
    };

    let on_submit = {
        let city_name = city_name.clone();
        let is_submitting = is_submitting.clone();
        let dispatch = dispatch.clone();

        move |e: SubmitEvent| {
            e.prevent_default();

            if *is_submitting {
                return;
            }

            let trimmed = city_name.trim().to_string();
            if validate_city_name(&trimmed).is_err() {
                return;
            }

            is_submitting.set(true);

            let is_submitting = is_submitting.clone();
            let dispatch = dispatch.clone();
            spawn_local(async move {
                let client = CommunityClient::shared();
                match client.provision_city(&trimmed).await {
                    Ok(()) => {
                        dispatch.reduce_mut(|app| app.session.set_city_name(trimmed));
                    }
                    Err(err) => {
                        log::error!("city provisioning failed: {err}");
                        is_submitting.set(false);
                    }
                }
            });
        }
    };

    let trimmed_preview = if city_name.trim().is_empty() {
        "[City Name]".to_string()
    } else {
        city_name.trim().to_string()
    };
    let submit_disabled = *is_submitting || validate_city_name(&city_name).is_err();

    html! {
      <div class="flex flex-col justify-center items-center min-h-screen p-6 bg-gradient-to-br from-primary to-secondary">
          <div class="card w-full max-w-md bg-base-100 shadow-2xl">
            <div class="card-body">
              <div class="text-center mb-4">
                <div class="bg-primary/10 rounded-full w-20 h-20 flex items-center justify-center mx-auto mb-4">
                  <Icon icon_id={IconId::HeroiconsOutlineGlobeAlt} class="w-10 h-10 text-primary" />
                </div>
                <h1 class="text-3xl font-bold">{ "Community Nexus" }</h1>
                <p class="text-base-content/70">{ "Let's set up your community platform" }</p>
              </div>

              <form onsubmit={on_submit}>
                <div class="form-control">
                  <label class="label">
                    <span class="label-text">{ "What's your city or community name?" }</span>
                  </label>
                  <label class="input input-bordered flex items-center gap-2 w-full">
                    <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-5 h-5 text-base-content/40" />
                    <input
                      type="text"
                      class="grow"
                      placeholder="e.g., San Francisco, Downtown District"
                      value={(*city_name).clone()}
                      onchange={on_city_name_change}
                      disabled={*is_submitting}
                      data-testid="setup-city-input"
                    />
                  </label>
                  <label class="label">
                    <span class="label-text-alt text-base-content/60">
                      { format!("This will customize your platform as \"{}\"", config.platform_title(&trimmed_preview)) }
                    </span>
                  </label>
                </div>

                <div class="form-control mt-4">
                  <button
                    type="submit"
                    class="btn btn-primary"
                    disabled={submit_disabled}
                    data-testid="setup-submit-button"
                  >
                    if *is_submitting {
                      <span class="loading loading-spinner loading-sm mr-2"></span>
                    } else {
                      <Icon icon_id={IconId::HeroiconsOutlineArrowRight} class="w-5 h-5 mr-2" />
                    }
                    { "Set Up Platform" }
                  </button>
                </div>
              </form>

              <div class="divider"></div>
              <div class="text-center">
                <h3 class="text-sm font-medium mb-3">{ "What you'll get:" }</h3>
                <ul class="space-y-2 text-sm text-base-content/70">
                  <li>{ "AI-powered community assistant" }</li>
                  <li>{ "Local news and business directory" }</li>
                  <li>{ "Community marketplace" }</li>
                </ul>
              </div>
            </div>
          </div>
      </div>
    }
}
