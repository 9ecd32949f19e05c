//! Card Composition
//!
//! Resolves a card's relational ids into what its tile shows.

use chrono::NaiveDate;

use crate::models::{Board, Card, Label, User};

pub const TILE_CLASS: &str = "card-tile";
pub const GHOSTED_CLASS: &str = "card-tile-ghosted";
pub const DRAGGING_CLASS: &str = "card-tile-dragging";

/// Container class for a card tile
pub fn tile_class(ghosted: bool, being_dragged: bool) -> String {
    let mut c = String::from(TILE_CLASS);
    if ghosted { c.push(' '); c.push_str(GHOSTED_CLASS); }
    if being_dragged { c.push(' '); c.push_str(DRAGGING_CLASS); }
    c
}

/// Everything a tile renders besides its content
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardComposition {
    pub labels: Vec<Label>,
    pub members: Vec<User>,
    pub due_date: Option<NaiveDate>,
    pub archived: bool,
}

impl CardComposition {
    /// Ids without a matching record are skipped; no board means no labels or members
    pub fn resolve(card: &Card, board: Option<&Board>) -> Self {
        let labels = match board {
            Some(board) => card.label_ids.iter()
                .filter_map(|id| board.label(*id).cloned())
                .collect(),
            None => Vec::new(),
        };
        let members = match board {
            Some(board) if !card.user_ids.is_empty() => card.user_ids.iter()
                .filter_map(|id| board.user(*id).cloned())
                .collect(),
            _ => Vec::new(),
        };

        Self {
            labels,
            members,
            due_date: card.due_date,
            archived: card.archived,
        }
    }

    pub fn has_due_badge(&self) -> bool {
        self.due_date.is_some()
    }
}
