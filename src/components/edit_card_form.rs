//! Edit Card Form Component
//!
//! Inline form for a card's content. Hands the edited card to `on_save`;
//! persisting it is up to whoever owns the board data.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::Link;
use crate::models::Card;

/// The card with new content, or an error for blank content
pub fn edited_card(card: &Card, content: &str) -> Result<Card, String> {
    let content = content.trim();
    if content.is_empty() {
        return Err("Card content can't be blank".to_string());
    }
    Ok(Card {
        content: content.to_string(),
        ..card.clone()
    })
}

#[component]
pub fn EditCardForm(
    card: Card,
    on_cancel: Callback<()>,
    on_save: Callback<Card>,
    #[prop(into)] submit_label: String,
    #[prop(optional)] hide_close_x: bool,
) -> impl IntoView {
    let (content, set_content) = signal(card.content.clone());
    let (error, set_error) = signal(None::<String>);
    let card = StoredValue::new(card);
    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();

    // Focus once mounted; the overlay is positioned on the same tick
    Effect::new(move |_| {
        if let Some(textarea) = textarea_ref.get() {
            Timeout::new(0, move || {
                let _ = textarea.focus();
                textarea.select();
            })
            .forget();
        }
    });

    let submit = move || {
        match edited_card(&card.get_value(), &content.get_untracked()) {
            Ok(updated) => {
                set_error.set(None);
                on_save.run(updated);
            }
            Err(message) => set_error.set(Some(message)),
        }
    };

    view! {
        <form
            class="edit-card-form"
            on:submit=move |ev: web_sys::SubmitEvent| {
                ev.prevent_default();
                submit();
            }
        >
            <textarea
                node_ref=textarea_ref
                class="edit-card-form-content"
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    match ev.key().as_str() {
                        "Enter" if !ev.shift_key() => {
                            ev.prevent_default();
                            submit();
                        }
                        "Escape" => {
                            ev.prevent_default();
                            on_cancel.run(());
                        }
                        _ => {}
                    }
                }
            ></textarea>

            {move || error.get().map(|message| view! { <div class="edit-card-form-error">{message}</div> })}

            <div class="edit-card-form-controls">
                <button type="submit" class="edit-card-form-submit">{submit_label}</button>
                <Link
                    class="edit-card-form-cancel"
                    on_click=Callback::new(move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        on_cancel.run(());
                    })
                >
                    "Cancel"
                </Link>
                {(!hide_close_x).then(|| view! {
                    <button type="button" class="close-btn" on:click=move |_| on_cancel.run(())>"×"</button>
                })}
            </div>
        </form>
    }
}
