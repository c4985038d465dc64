use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryPillsProps {
    /// `(slug, label)` pairs, usually starting with `("all", ...)`.
    pub categories: Vec<(&'static str, &'static str)>,
    /// Slug of the selected category.
    pub active: String,
    pub on_select: Callback<&'static str>,
}

/// Horizontal pill row used by every category-filtered page.
#[function_component(CategoryPills)]
pub fn category_pills(props: &CategoryPillsProps) -> Html {
    let pills = props.categories.iter().map(|&(slug, label)| {
        let onclick = {
            let on_select = props.on_select.clone();
            Callback::from(move |_: MouseEvent| on_select.emit(slug))
        };
        let classes = if props.active == slug {
            "btn btn-sm btn-primary"
        } else {
            "btn btn-sm btn-ghost"
        };
        html! {
            <button key={slug} class={classes} {onclick}>{ label }</button>
        }
    });

    html! {
        <div class="flex flex-wrap gap-2">
            { for pills }
        </div>
    }
}
