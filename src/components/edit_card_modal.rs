//! Edit Card Modal Component
//!
//! Edit form floating over the board at a card's on-screen position.

use leptos::prelude::*;

use crate::components::EditCardForm;
use crate::interaction::AnchorRect;
use crate::models::Card;

/// Shroud plus a window anchored at `rect`; clicking the shroud cancels
#[component]
pub fn EditCardModal(
    card: Card,
    rect: AnchorRect,
    on_cancel: Callback<()>,
    on_save: Callback<Card>,
) -> impl IntoView {
    view! {
        <div class="edit-card-modal">
            <div
                class="edit-card-modal-shroud"
                style="position: fixed; inset: 0;"
                on:mousedown=move |ev: web_sys::MouseEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                }
                on:click=move |_| on_cancel.run(())
            ></div>
            <div class="edit-card-modal-window" style=rect.window_style()>
                <EditCardForm
                    card=card
                    on_cancel=on_cancel
                    on_save=on_save
                    submit_label="Save"
                    hide_close_x=true
                />
            </div>
        </div>
    }
}
