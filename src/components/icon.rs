//! Icon Component

use leptos::prelude::*;

/// Glyph from the icon font, e.g. `pencil` or `archive`
#[component]
pub fn Icon(
    #[prop(into)] kind: String,
    #[prop(optional)] size: u8,
) -> impl IntoView {
    view! {
        <span
            class=format!("icon icon-{} icon-size-{}", kind, size)
            aria-hidden="true"
        ></span>
    }
}
