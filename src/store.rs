//! Board State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::lists;
use crate::models::{Board, Card};

/// Shared board state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct BoardState {
    /// The board being shown
    pub board: Board,
    /// Whether tiles offer the edit trigger
    pub editable: bool,
    /// Bootstrap failure shown instead of the board
    pub load_error: Option<String>,
}

impl BoardState {
    pub fn new(board: Board, editable: bool) -> Self {
        Self { board, editable, load_error: None }
    }

    pub fn failed(error: String) -> Self {
        Self { load_error: Some(error), ..Default::default() }
    }
}

/// Type alias for the store
pub type BoardStore = Store<BoardState>;

/// Get the board store from context
pub fn use_board_store() -> BoardStore {
    expect_context::<BoardStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace a card in the store by ID
pub fn store_update_card(store: &BoardStore, card: Card) {
    let id = card.id;
    if !lists::replace_card(&mut store.board().write().cards, card) {
        web_sys::console::error_1(&format!("[Board] update for unknown card {}", id).into());
    }
}

/// Move a card to a drop slot
pub fn store_move_card(store: &BoardStore, card_id: u32, list_id: u32, position: usize) {
    if !lists::move_card(&mut store.board().write().cards, card_id, list_id, position) {
        web_sys::console::error_1(&format!("[Board] move for unknown card {}", card_id).into());
    }
}

/// Look up a card by ID (tracked)
pub fn store_card(store: &BoardStore, card_id: u32) -> Option<Card> {
    store.board().read().card(card_id).cloned()
}

/// Look up a card by ID within a board (tracked)
pub fn store_board_card(store: &BoardStore, board_id: u32, card_id: u32) -> Option<Card> {
    store.board().read().board_card(board_id, card_id).cloned()
}
