//! Leptos DragDrop Utilities
//!
//! HTML5 drag-and-drop for Leptos card boards.
//! The dragged card id travels in the `dataTransfer` payload and in a signal,
//! so drop zones can render a preview while the drag is in flight.

use leptos::prelude::*;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropTarget {
    /// Drop on a zone between cards (list_id, position)
    Zone(u32, usize),
    /// Drop on the empty tail of a list (append)
    ListEnd(u32),
}

impl DropTarget {
    pub fn list_id(&self) -> u32 {
        match *self {
            DropTarget::Zone(list_id, _) | DropTarget::ListEnd(list_id) => list_id,
        }
    }
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
}

/// Prefix of the `text/plain` payload written on dragstart
pub const PAYLOAD_PREFIX: &str = "card:";

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
    }
}

/// Encode a card id as a drag payload
pub fn encode_payload(card_id: u32) -> String {
    format!("{}{}", PAYLOAD_PREFIX, card_id)
}

/// Decode a drag payload written by [`encode_payload`]
pub fn parse_payload(payload: &str) -> Option<u32> {
    payload.trim().strip_prefix(PAYLOAD_PREFIX)?.parse().ok()
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
}

/// Create dragstart handler for a draggable card
pub fn make_on_dragstart(dnd: DndSignals, card_id: u32) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_effect_allowed("move");
            if let Err(err) = transfer.set_data("text/plain", &encode_payload(card_id)) {
                web_sys::console::error_1(&format!("[DND] Could not write drag payload: {:?}", err).into());
            }
        }
        dnd.dragging_id_write.set(Some(card_id));
    }
}

/// Create dragend handler (fires on the source whether or not a drop happened)
pub fn make_on_dragend(dnd: DndSignals) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| end_drag(&dnd)
}

/// Create dragover handler for a drop target.
/// Calling `prevent_default` is what marks the element as a valid drop target.
pub fn make_on_dragover(dnd: DndSignals, target: DropTarget) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |ev: web_sys::DragEvent| {
        if dnd.dragging_id_read.get_untracked().is_none() {
            return;
        }
        ev.prevent_default();
        if let Some(transfer) = ev.data_transfer() {
            transfer.set_drop_effect("move");
        }
        if dnd.drop_target_read.get_untracked() != Some(target) {
            dnd.drop_target_write.set(Some(target));
        }
    }
}

/// Create dragleave handler
pub fn make_on_dragleave(dnd: DndSignals, target: DropTarget) -> impl Fn(web_sys::DragEvent) + Copy + 'static {
    move |_ev: web_sys::DragEvent| {
        if dnd.drop_target_read.get_untracked() == Some(target) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Create drop handler for a drop target
pub fn make_on_drop<F>(dnd: DndSignals, target: DropTarget, on_drop: F) -> impl Fn(web_sys::DragEvent) + Clone + 'static
where
    F: Fn(u32, DropTarget) + Clone + 'static,
{
    move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();

        // Prefer the payload; fall back to the signal if the browser withheld it
        let from_payload = ev
            .data_transfer()
            .and_then(|transfer| transfer.get_data("text/plain").ok())
            .and_then(|payload| parse_payload(&payload));
        let dragged = from_payload.or_else(|| dnd.dragging_id_read.get_untracked());

        end_drag(&dnd);
        if let Some(card_id) = dragged {
            on_drop(card_id, target);
        }
    }
}
