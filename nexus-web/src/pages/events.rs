use crate::components::CategoryPills;
use crate::content;
use chrono::{Datelike, NaiveDate};
use shared::models::{CommunityEvent, filter_by_category};
use yew::prelude::*;
use yew_icons::{Icon, IconId};

const CATEGORIES: [(&str, &str); 6] = [
    ("all", "All Events"),
    ("community", "Community"),
    ("government", "Government"),
    ("arts", "Arts & Culture"),
    ("sports", "Sports"),
    ("education", "Education"),
];

/// Days of a month laid out on a Sunday-first grid; `None` pads the first
/// week.
fn month_grid(year: i32, month: u32) -> Vec<Option<u32>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid month");
    let days_in_month = match month {
        12 => NaiveDate::from_ymd_opt(year + 1, 1, 1),
        _ => NaiveDate::from_ymd_opt(year, month + 1, 1),
    }
    .expect("valid month")
    .pred_opt()
    .expect("previous day exists")
    .day();

    let offset = first.weekday().num_days_from_sunday();
    let mut cells: Vec<Option<u32>> = vec![None; offset as usize];
    cells.extend((1..=days_in_month).map(Some));
    cells
}

fn category_dot(category: &str) -> &'static str {
    match category {
        "government" => "bg-info",
        "arts" => "bg-secondary",
        "sports" => "bg-warning",
        "education" => "bg-accent",
        _ => "bg-success",
    }
}

/// Events calendar: category filter plus list and month views.
///
/// The month view shows the month of the catalog's first event; this page
/// has no concept of "today".
#[function_component(EventsPage)]
pub fn events_page() -> Html {
    let active_category = use_state(|| "all".to_string());
    let list_view = use_state(|| true);

    let events = content::events();
    let filtered: Vec<CommunityEvent> = filter_by_category(&events, &active_category)
        .into_iter()
        .cloned()
        .collect();

    let (year, month) = events
        .first()
        .map(|event| (event.date.year(), event.date.month()))
        .unwrap_or((2024, 6));

    let on_select = {
        let active_category = active_category.clone();
        Callback::from(move |slug: &'static str| active_category.set(slug.to_string()))
    };

    let toggle_view = {
        let list_view = list_view.clone();
        Callback::from(move |_: MouseEvent| list_view.set(!*list_view))
    };

    let month_name = NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_default();

    html! {
        <div class="p-4 space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-2xl font-bold mb-2">{ "Events Calendar" }</h1>
                    <p class="text-base-content/60">{ "What's happening around town" }</p>
                </div>
                <button class="btn btn-ghost btn-sm" onclick={toggle_view}>
                    <Icon
                        icon_id={if *list_view { IconId::HeroiconsOutlineCalendarDays } else { IconId::HeroiconsOutlineListBullet }}
                        class="w-5 h-5"
                    />
                    { if *list_view { "Calendar" } else { "List" } }
                </button>
            </div>

            <CategoryPills
                categories={CATEGORIES.to_vec()}
                active={(*active_category).clone()}
                {on_select}
            />

            if *list_view {
                <div class="space-y-4">
                    {
                        for filtered.iter().map(|event| html! {
                            <div key={event.id} class="card bg-base-200 shadow-sm">
                                <div class="card-body p-4">
                                    <div class="flex items-center gap-2">
                                        <span class={classes!("w-2", "h-2", "rounded-full", category_dot(&event.category))}></span>
                                        <span class="badge badge-ghost">{ event.category.clone() }</span>
                                    </div>
                                    <h2 class="card-title text-lg">{ event.title.clone() }</h2>
                                    <p class="text-base-content/70">{ event.description.clone() }</p>
                                    <div class="flex flex-wrap gap-4 text-sm text-base-content/60">
                                        <span class="flex items-center gap-1">
                                            <Icon icon_id={IconId::HeroiconsOutlineCalendarDays} class="w-4 h-4" />
                                            { event.date.format("%A, %B %-d").to_string() }
                                        </span>
                                        <span class="flex items-center gap-1">
                                            <Icon icon_id={IconId::HeroiconsOutlineClock} class="w-4 h-4" />
                                            { event.time.clone() }
                                        </span>
                                        <span class="flex items-center gap-1">
                                            <Icon icon_id={IconId::HeroiconsOutlineMapPin} class="w-4 h-4" />
                                            { event.location.clone() }
                                        </span>
                                        <span class="flex items-center gap-1">
                                            <Icon icon_id={IconId::HeroiconsOutlineUsers} class="w-4 h-4" />
                                            { format!("{} attending", event.attendees) }
                                        </span>
                                    </div>
                                </div>
                            </div>
                        })
                    }
                </div>
            } else {
                <div class="card bg-base-200 shadow-sm">
                    <div class="card-body p-4">
                        <h2 class="card-title justify-center">{ month_name }</h2>
                        <div class="grid grid-cols-7 gap-1 text-center text-sm">
                            {
                                for ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"].into_iter().map(|day| html! {
                                    <div key={day} class="font-medium text-base-content/60 py-1">{ day }</div>
                                })
                            }
                            {
                                for month_grid(year, month).into_iter().enumerate().map(|(i, cell)| {
                                    match cell {
                                        None => html! { <div key={i}></div> },
                                        Some(day) => {
                                            let day_events: Vec<&CommunityEvent> = filtered
                                                .iter()
                                                .filter(|event| event.date.day() == day)
                                                .collect();
                                            html! {
                                                <div key={i} class="rounded-lg py-2 min-h-12 bg-base-100">
                                                    <div>{ day }</div>
                                                    <div class="flex justify-center gap-0.5">
                                                        {
                                                            for day_events.iter().map(|event| html! {
                                                                <span
                                                                    key={event.id}
                                                                    class={classes!("w-1.5", "h-1.5", "rounded-full", category_dot(&event.category))}
                                                                    title={event.title.clone()}
                                                                ></span>
                                                            })
                                                        }
                                                    </div>
                                                </div>
                                            }
                                        }
                                    }
                                })
                            }
                        </div>
                    </div>
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_grid_june_2024() {
        // June 1, 2024 is a Saturday: six leading pads, thirty days.
        let grid = month_grid(2024, 6);
        assert_eq!(grid.iter().filter(|cell| cell.is_none()).count(), 6);
        assert_eq!(grid.iter().filter(|cell| cell.is_some()).count(), 30);
        assert_eq!(grid[6], Some(1));
        assert_eq!(*grid.last().unwrap(), Some(30));
    }

    #[test]
    fn test_month_grid_handles_december() {
        let grid = month_grid(2024, 12);
        assert_eq!(grid.iter().filter(|cell| cell.is_some()).count(), 31);
    }

    #[test]
    fn test_month_grid_handles_leap_february() {
        let grid = month_grid(2024, 2);
        assert_eq!(grid.iter().filter(|cell| cell.is_some()).count(), 29);
    }
}
