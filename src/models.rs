//! Frontend Models
//!
//! Board data structures as delivered by the host page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Card data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    pub board_id: u32,
    pub list_id: u32,
    pub order: i32,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub label_ids: Vec<u32>,
    #[serde(default)]
    pub user_ids: Vec<u32>,
}

/// Label data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub id: u32,
    pub color: String,
    #[serde(default)]
    pub text: String,
}

/// Board member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// List (column) data structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardList {
    pub id: u32,
    pub board_id: u32,
    pub name: String,
    pub order: i32,
}

/// Board dataset: lookup tables plus the board's lists and cards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub labels: Vec<Label>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub lists: Vec<BoardList>,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl Board {
    pub fn label(&self, id: u32) -> Option<&Label> {
        self.labels.iter().find(|label| label.id == id)
    }

    pub fn user(&self, id: u32) -> Option<&User> {
        self.users.iter().find(|user| user.id == id)
    }

    pub fn card(&self, id: u32) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Card `card_id` only if it belongs to board `board_id`
    pub fn board_card(&self, board_id: u32, card_id: u32) -> Option<&Card> {
        self.card(card_id).filter(|card| card.board_id == board_id)
    }
}
