//! Card Detail Component
//!
//! Full view of a card, shown when the route points at one.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::{BadgeDisplay, CardLabel, CardMember, DueDateBadge, Icon, Link};
use crate::composition::CardComposition;
use crate::markdown::render_markdown;
use crate::models::Card;
use crate::navigation::{board_path, Navigator};
use crate::store::{store_board_card, store_update_card, use_board_store, BoardStateStoreFields};

#[component]
pub fn CardDetail(
    board_id: u32,
    card_id: u32,
    navigator: Navigator,
) -> impl IntoView {
    let store = use_board_store();

    let close = Callback::new(move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        navigator.redirect_to(&board_path(board_id));
    });
    let on_save = Callback::new(move |card: Card| store_update_card(&store, card));

    move || {
        let Some(card) = store_board_card(&store, board_id, card_id) else {
            return view! {
                <div class="card-detail card-detail-missing">
                    <p>{format!("Card {} not found", card_id)}</p>
                    <Link href=board_path(board_id) on_click=close>"Back to board"</Link>
                </div>
            }
            .into_any();
        };

        let board = Arc::new(store.board().get());
        let composition = CardComposition::resolve(&card, Some(&board));

        let labels = composition.labels.iter().map(|label| {
            view! { <CardLabel color=label.color.clone() text=label.text.clone() checked=true /> }
        }).collect_view();

        let members = composition.members.iter().map(|user| {
            view! {
                <CardMember
                    board=board.clone()
                    card=card.clone()
                    user=user.clone()
                    on_save=Some(on_save)
                />
            }
        }).collect_view();

        view! {
            <div class="card-detail-shroud" on:click=move |ev| close.run(ev)>
                <div class="card-detail" on:click=|ev: web_sys::MouseEvent| ev.stop_propagation()>
                    <header class="card-detail-header">
                        <h2 class="card-detail-title">{format!("Card #{}", card.id)}</h2>
                        <Link class="close-btn" href=board_path(board_id) on_click=close>"×"</Link>
                    </header>
                    <div class="card-detail-labels">{labels}</div>
                    <DueDateBadge card=card.clone() shown_on=BadgeDisplay::Modal />
                    <div class="card-detail-content" inner_html=render_markdown(&card.content)></div>
                    <div class="card-detail-members">{members}</div>
                    {card.archived.then(|| view! {
                        <div class="card-detail-archived">
                            <Icon kind="archive" />
                            " This card is archived"
                        </div>
                    })}
                </div>
            </div>
        }
        .into_any()
    }
}
