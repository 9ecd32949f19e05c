//! Card Member Component
//!
//! Member avatar with a popover to remove the member from the card.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::Link;
use crate::interaction::{MEMBER_AVATAR_MARKER, REMOVE_MEMBER_MARKER};
use crate::models::{Board, Card, User};

/// Up to two initials from a display name
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// The card without `user_id` among its members
pub fn without_member(card: &Card, user_id: u32) -> Card {
    let mut updated = card.clone();
    updated.user_ids.retain(|id| *id != user_id);
    updated
}

/// Member indicator on a card
///
/// The whole indicator is marked as a member avatar so clicks on it or its
/// popover never open the card.
#[component]
pub fn CardMember(
    board: Arc<Board>,
    card: Card,
    user: User,
    #[prop(optional_no_strip)] on_save: Option<Callback<Card>>,
) -> impl IntoView {
    let (popover_open, set_popover_open) = signal(false);

    let user_id = user.id;
    let name = user.name.clone();
    let email = user.email.clone();
    let board_name = board.name.clone();
    let card = StoredValue::new(card);

    let avatar = match user.avatar_url.clone() {
        Some(url) => view! { <img class="card-member-avatar-image" src=url alt=user.name.clone() /> }.into_any(),
        None => view! { <span class="card-member-initials">{initials(&user.name)}</span> }.into_any(),
    };

    view! {
        <span class="card-member" data-interactive=MEMBER_AVATAR_MARKER>
            <span
                class="card-member-avatar"
                title=user.name.clone()
                on:click=move |_| set_popover_open.update(|open| *open = !*open)
            >
                {avatar}
            </span>
            <Show when=move || popover_open.get()>
                <div class="card-member-popover">
                    <div class="card-member-popover-name">{name.clone()}</div>
                    {email.clone().map(|email| view! { <div class="card-member-popover-email">{email}</div> })}
                    <div class="card-member-popover-board">{format!("Member of {}", board_name)}</div>
                    {on_save.map(|on_save| view! {
                        <Link
                            class="card-member-remove"
                            marker=REMOVE_MEMBER_MARKER
                            on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                                ev.prevent_default();
                                set_popover_open.set(false);
                                on_save.run(without_member(&card.get_value(), user_id));
                            })
                        >
                            "Remove from card"
                        </Link>
                    })}
                </div>
            </Show>
        </span>
    }
}
