//! Board List Column Component
//!
//! One list of cards with drop zones between them.
//! Uses leptos-dragdrop; the zone under the pointer shows a ghost of the dragged card.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::BoardCard;
use crate::lists::cards_for_list;
use crate::models::{Board, BoardList, Card};
use crate::navigation::Navigator;
use crate::store::{store_card, store_update_card, use_board_store, BoardStateStoreFields};

use leptos_dragdrop::*;

/// Column for a single list
#[component]
pub fn BoardListColumn(
    list: BoardList,
    navigator: Navigator,
    dnd: DndSignals,
    on_drop: Callback<(u32, DropTarget)>,
) -> impl IntoView {
    let store = use_board_store();
    let list_id = list.id;

    let board = Memo::new(move |_| Arc::new(store.board().get()));
    let on_save = Callback::new(move |card: Card| store_update_card(&store, card));
    let cards = move || cards_for_list(&store.board().read().cards, list_id)
        .into_iter()
        .enumerate()
        .collect::<Vec<_>>();
    let card_count = move || store.board().read().cards.iter().filter(|c| c.list_id == list_id).count();

    view! {
        <section class="board-list" data-list-id=list_id.to_string()>
            <header class="board-list-header">
                <span class="board-list-name">{list.name.clone()}</span>
                <span class="board-list-count">{card_count}</span>
            </header>
            <div class="board-list-cards">
                <For
                    each=cards
                    key=|(position, card)| {
                        // Everything the tile shows, so edits re-render it
                        (
                            *position,
                            card.id,
                            card.order,
                            card.content.clone(),
                            card.due_date,
                            card.archived,
                            card.label_ids.clone(),
                            card.user_ids.clone(),
                        )
                    }
                    children=move |(position, card)| {
                        let id = card.id;
                        let being_dragged = Signal::derive(move || dnd.dragging_id_read.get() == Some(id));

                        view! {
                            <DropZone
                                dnd=dnd
                                target=DropTarget::Zone(list_id, position)
                                navigator=navigator
                                board=board
                                on_drop=on_drop
                            />
                            <div class="board-list-card" on:dragend=make_on_dragend(dnd)>
                                <BoardCard
                                    card=card
                                    navigator=navigator
                                    board=board.get_untracked()
                                    editable=store.editable().get_untracked()
                                    being_dragged=being_dragged
                                    on_drag_start=Callback::new(make_on_dragstart(dnd, id))
                                    on_save=on_save
                                />
                            </div>
                        }
                    }
                />
                <DropZone
                    dnd=dnd
                    target=DropTarget::ListEnd(list_id)
                    navigator=navigator
                    board=board
                    on_drop=on_drop
                />
            </div>
        </section>
    }
}

/// Drop zone between cards; shows a ghosted preview while targeted
#[component]
fn DropZone(
    dnd: DndSignals,
    target: DropTarget,
    navigator: Navigator,
    board: Memo<Arc<Board>>,
    on_drop: Callback<(u32, DropTarget)>,
) -> impl IntoView {
    let store = use_board_store();

    let on_dragover = make_on_dragover(dnd, target);
    let on_dragleave = make_on_dragleave(dnd, target);
    let on_drop_ev = make_on_drop(dnd, target, move |card_id, target| on_drop.run((card_id, target)));

    let is_active = move || dnd.drop_target_read.get() == Some(target);
    let is_dragging = move || dnd.dragging_id_read.get().is_some();

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if matches!(target, DropTarget::ListEnd(_)) { c.push_str(" list-end"); }
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    let ghost = move || {
        if !is_active() {
            return None;
        }
        let card = store_card(&store, dnd.dragging_id_read.get()?)?;
        Some(view! {
            <BoardCard
                card=card
                navigator=navigator
                board=board.get()
                ghosted=true
                style="pointer-events: none;"
            />
        })
    };

    view! {
        <div
            class=zone_class
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop_ev
        >
            {ghost}
        </div>
    }
}
