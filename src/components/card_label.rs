//! Card Label Component

use leptos::prelude::*;

/// Coloured label swatch, optionally with text and a check mark
#[component]
pub fn CardLabel(
    #[prop(into)] color: String,
    #[prop(optional, into)] text: String,
    #[prop(optional)] checked: bool,
) -> impl IntoView {
    let class = if checked { "card-label checked" } else { "card-label" };

    view! {
        <span class=class style=format!("background-color: {};", color)>
            <span class="card-label-text">{text}</span>
            {checked.then(|| view! { <span class="card-label-check">"✓"</span> })}
        </span>
    }
}
