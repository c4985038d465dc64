use yew::prelude::*;
use yew_icons::{Icon, IconId};

struct Alert {
    id: u32,
    severity: &'static str,
    title: &'static str,
    detail: &'static str,
}

fn active_alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: 1,
            severity: "warning",
            title: "Winter Storm Warning",
            detail: "6-10 inches of snow expected Friday night through Saturday.",
        },
        Alert {
            id: 2,
            severity: "info",
            title: "Road Construction",
            detail: "Main Street reduced to one lane between 3rd and 5th through Friday.",
        },
    ]
}

/// Dashboard widget listing active emergency alerts.
///
/// Alerts are inert catalog data; dismissal is local to the widget and
/// does not touch the session.
#[function_component(EmergencyAlerts)]
pub fn emergency_alerts() -> Html {
    let dismissed = use_state(Vec::<u32>::new);

    let alerts: Vec<Alert> = active_alerts()
        .into_iter()
        .filter(|alert| !dismissed.contains(&alert.id))
        .collect();

    if alerts.is_empty() {
        return html! {
            <div class="card bg-base-200 shadow-sm">
                <div class="card-body items-center text-base-content/60">
                    <Icon icon_id={IconId::HeroiconsOutlineCheck} class="w-6 h-6" />
                    <p>{ "No active alerts" }</p>
                </div>
            </div>
        };
    }

    let rows = alerts.into_iter().map(|alert| {
        let on_dismiss = {
            let dismissed = dismissed.clone();
            Callback::from(move |_: MouseEvent| {
                let mut next = (*dismissed).clone();
                next.push(alert.id);
                dismissed.set(next);
            })
        };
        let badge = if alert.severity == "warning" {
            "badge badge-warning"
        } else {
            "badge badge-info"
        };
        html! {
            <div key={alert.id} class="flex items-start justify-between gap-3 py-2">
                <div>
                    <div class="flex items-center gap-2">
                        <span class={badge}>{ alert.severity }</span>
                        <span class="font-medium">{ alert.title }</span>
                    </div>
                    <p class="text-sm text-base-content/70">{ alert.detail }</p>
                </div>
                <button class="btn btn-ghost btn-xs" onclick={on_dismiss} aria-label="Dismiss alert">
                    <Icon icon_id={IconId::HeroiconsOutlineXMark} class="w-4 h-4" />
                </button>
            </div>
        }
    });

    html! {
        <div class="card bg-base-200 shadow-sm">
            <div class="card-body">
                <h2 class="card-title">
                    <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="w-6 h-6" />
                    { "Emergency Alerts" }
                </h2>
                { for rows }
            </div>
        </div>
    }
}
