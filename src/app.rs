//! Board Page App
//!
//! Loads the board, then lays out its lists and the routed card detail.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::bootstrap;
use crate::components::{BoardListColumn, CardDetail};
use crate::lists::sorted_lists;
use crate::navigation::{Navigator, Route};
use crate::store::{store_move_card, BoardState, BoardStateStoreFields};

use leptos_dragdrop::*;

#[component]
pub fn App() -> impl IntoView {
    let state = match bootstrap::load_board() {
        Ok(board) => {
            web_sys::console::log_1(&format!("[Board] Loaded board {} with {} cards", board.id, board.cards.len()).into());
            BoardState::new(board, bootstrap::load_editable())
        }
        Err(err) => {
            web_sys::console::error_1(&format!("[Board] Could not load board: {}", err).into());
            BoardState::failed(err)
        }
    };
    let store = Store::new(state);
    provide_context(store);

    let navigator = Navigator::browser();
    let dnd = create_dnd_signals();

    let on_drop = Callback::new(move |(card_id, target): (u32, DropTarget)| {
        let position = match target {
            DropTarget::Zone(_, position) => position,
            DropTarget::ListEnd(_) => usize::MAX,
        };
        web_sys::console::log_1(&format!("[DND] Drop card {} on {:?}", card_id, target).into());
        store_move_card(&store, card_id, target.list_id(), position);
    });

    let lists = move || sorted_lists(&store.board().read());

    view! {
        <div class="board-page">
            {move || store.load_error().get().map(|err| view! {
                <div class="board-error">{format!("Could not load board: {}", err)}</div>
            })}

            <h1 class="board-title">{move || store.board().read().name.clone()}</h1>

            <div class="board-lists">
                <For
                    each=lists
                    key=|list| (list.id, list.order, list.name.clone())
                    children=move |list| {
                        view! {
                            <BoardListColumn
                                list=list
                                navigator=navigator
                                dnd=dnd
                                on_drop=on_drop
                            />
                        }
                    }
                />
            </div>

            {move || match navigator.route() {
                Route::Card { board_id, card_id } => Some(view! {
                    <CardDetail board_id=board_id card_id=card_id navigator=navigator />
                }),
                _ => None,
            }}
        </div>
    }
}
