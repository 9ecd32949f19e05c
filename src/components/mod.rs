//! UI Components
//!
//! Reusable Leptos components.

mod board_card;
mod board_list_column;
mod card_detail;
mod card_label;
mod card_member;
mod due_date_badge;
mod edit_card_form;
mod edit_card_modal;
mod icon;
mod link;

pub use board_card::BoardCard;
pub use board_list_column::BoardListColumn;
pub use card_detail::CardDetail;
pub use card_label::CardLabel;
pub use card_member::CardMember;
pub use due_date_badge::{BadgeDisplay, DueDateBadge};
pub use edit_card_form::EditCardForm;
pub use edit_card_modal::EditCardModal;
pub use icon::Icon;
pub use link::Link;
