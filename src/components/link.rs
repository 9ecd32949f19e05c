//! Link Component
//!
//! Anchor primitive used for in-page actions and navigation.

use leptos::prelude::*;

/// Anchor with an optional click callback
///
/// `marker` sets the `data-interactive` attribute so a surrounding card tile
/// leaves clicks on this link to its own handler.
#[component]
pub fn Link(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] marker: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<web_sys::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let role = href.is_none().then_some("button");

    view! {
        <a
            class=class
            href=href
            title=title
            role=role
            data-interactive=marker
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </a>
    }
}
