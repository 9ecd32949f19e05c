//! Card Interaction
//!
//! Edit-overlay state and click classification for a card tile.
//! Everything here is plain data so it runs outside the browser too.

use wasm_bindgen::JsCast;

use crate::navigation::card_path;

/// Attribute that marks an interactive child of a card tile
pub const INTERACTIVE_ATTR: &str = "data-interactive";
/// Marker value for a member avatar
pub const MEMBER_AVATAR_MARKER: &str = "member-avatar";
/// Marker value for a member's remove link
pub const REMOVE_MEMBER_MARKER: &str = "remove-member";

/// Screen rectangle the edit overlay is anchored to (CSS pixels)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnchorRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
}

impl AnchorRect {
    pub fn from_dom_rect(rect: &web_sys::DomRect) -> Self {
        Self {
            top: rect.top(),
            left: rect.left(),
            width: rect.width(),
        }
    }

    /// Inline style for the overlay window; height follows the content.
    /// Bounding rects are viewport-relative, hence `fixed`.
    pub fn window_style(&self) -> String {
        format!("position: fixed; top: {}px; left: {}px; width: {}px;", self.top, self.left, self.width)
    }
}

/// Per-card edit overlay state
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum EditState {
    #[default]
    Closed,
    Editing(AnchorRect),
}

impl EditState {
    /// Open the overlay at `rect`. While already editing the anchor is re-measured.
    pub fn begin(&mut self, rect: AnchorRect) {
        *self = EditState::Editing(rect);
    }

    /// Close the overlay; no-op when closed
    pub fn close(&mut self) {
        *self = EditState::Closed;
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing(_))
    }

    pub fn anchor(&self) -> Option<AnchorRect> {
        match self {
            EditState::Editing(rect) => Some(*rect),
            EditState::Closed => None,
        }
    }
}

/// What a click inside the tile landed on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Tile,
    MemberAvatar,
    RemoveMember,
}

impl ClickTarget {
    /// Role for a `data-interactive` value; unmarked or unknown values are plain tile clicks
    pub fn from_marker(marker: Option<&str>) -> Self {
        match marker {
            Some(MEMBER_AVATAR_MARKER) => ClickTarget::MemberAvatar,
            Some(REMOVE_MEMBER_MARKER) => ClickTarget::RemoveMember,
            _ => ClickTarget::Tile,
        }
    }

    /// Role of the nearest marked element at or above `target`
    pub fn from_event_target(target: Option<web_sys::EventTarget>) -> Self {
        let marker = target
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(&format!("[{}]", INTERACTIVE_ATTR)).ok().flatten())
            .and_then(|el| el.get_attribute(INTERACTIVE_ATTR));
        Self::from_marker(marker.as_deref())
    }

    pub fn is_interactive_child(&self) -> bool {
        !matches!(self, ClickTarget::Tile)
    }
}

/// Modifier keys held during a click
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.ctrl || self.meta || self.shift
    }
}

/// A click on the tile, reduced to what the classifier needs
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileClick {
    pub target: ClickTarget,
    pub modifiers: Modifiers,
}

impl TileClick {
    pub fn from_event(ev: &web_sys::MouseEvent) -> Self {
        Self {
            target: ClickTarget::from_event_target(ev.target()),
            modifiers: Modifiers {
                ctrl: ev.ctrl_key(),
                meta: ev.meta_key(),
                shift: ev.shift_key(),
            },
        }
    }
}

/// Result of classifying a tile click
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Belongs to a nested control; its own handler runs
    InteractiveChild,
    /// Modifier click, left to the browser
    NewContext,
    /// Open the card detail at this path
    Navigate(String),
}

/// Decide what a tile click means. Child markers win over modifiers,
/// and modifiers win over navigation.
pub fn classify_click(click: &TileClick, board_id: u32, card_id: u32) -> ClickOutcome {
    if click.target.is_interactive_child() {
        ClickOutcome::InteractiveChild
    } else if click.modifiers.any() {
        ClickOutcome::NewContext
    } else {
        ClickOutcome::Navigate(card_path(board_id, card_id))
    }
}
