use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct StarRatingProps {
    /// Rating in `0.0..=5.0`.
    pub rating: f32,
    #[prop_or_default]
    pub review_count: Option<u32>,
}

/// Five-star rating row: filled stars for whole points, outlines for the
/// rest, with the numeric value alongside.
#[function_component(StarRating)]
pub fn star_rating(props: &StarRatingProps) -> Html {
    let full = props.rating.floor().clamp(0.0, 5.0) as u32;

    let stars = (0..5).map(|i| {
        let icon_id = if i < full {
            IconId::HeroiconsSolidStar
        } else {
            IconId::HeroiconsOutlineStar
        };
        let classes = if i < full {
            "w-4 h-4 text-warning"
        } else {
            "w-4 h-4 text-base-content/30"
        };
        html! { <Icon key={i} {icon_id} class={classes} /> }
    });

    html! {
        <div class="flex items-center gap-1">
            { for stars }
            <span class="text-sm font-medium ml-1">{ format!("{:.1}", props.rating) }</span>
            if let Some(count) = props.review_count {
                <span class="text-sm text-base-content/60">{ format!("({count})") }</span>
            }
        </div>
    }
}
