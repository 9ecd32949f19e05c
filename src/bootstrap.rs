//! Board Bootstrap
//!
//! Reads the board dataset and settings the host page provides,
//! falling back to the bundled fixture.

use wasm_bindgen::JsValue;

use crate::models::Board;

/// Global the host page may set to a board object
pub const BOARD_GLOBAL: &str = "__KANBAN_BOARD__";
/// Global the host page may set to `false` to hide edit triggers
pub const EDITABLE_GLOBAL: &str = "__KANBAN_EDITABLE__";

const FIXTURE: &str = include_str!("../assets/board.json");

fn host_value(name: &str) -> Option<JsValue> {
    let win = web_sys::window()?;
    let value = js_sys::Reflect::get(&win, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

pub fn parse_board(json: &str) -> Result<Board, String> {
    serde_json::from_str(json).map_err(|e| e.to_string())
}

/// Board from the host page, or the bundled fixture
pub fn load_board() -> Result<Board, String> {
    match host_value(BOARD_GLOBAL) {
        Some(value) => {
            web_sys::console::log_1(&format!("[Board] Loading board from window.{}", BOARD_GLOBAL).into());
            serde_wasm_bindgen::from_value(value).map_err(|e| e.to_string())
        }
        None => {
            web_sys::console::log_1(&"[Board] Loading bundled board".into());
            parse_board(FIXTURE)
        }
    }
}

pub fn load_editable() -> bool {
    host_value(EDITABLE_GLOBAL)
        .and_then(|value| value.as_bool())
        .unwrap_or(true)
}
