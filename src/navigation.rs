//! Navigation
//!
//! Board/card paths and a small history-backed navigator.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Path of a board page
pub fn board_path(board_id: u32) -> String {
    format!("/boards/{}", board_id)
}

/// Path of a card detail view
pub fn card_path(board_id: u32, card_id: u32) -> String {
    format!("/boards/{}/cards/{}", board_id, card_id)
}

/// Parsed location
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Board { board_id: u32 },
    Card { board_id: u32, card_id: u32 },
    NotFound(String),
}

impl Route {
    pub fn board_id(&self) -> Option<u32> {
        match self {
            Route::Board { board_id } | Route::Card { board_id, .. } => Some(*board_id),
            _ => None,
        }
    }
}

pub fn parse_route(path: &str) -> Route {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    let id = |s: &str| s.parse::<u32>().ok();

    match segments.as_slice() {
        [] => Route::Home,
        ["boards", board] => match id(board) {
            Some(board_id) => Route::Board { board_id },
            None => Route::NotFound(path.to_string()),
        },
        ["boards", board, "cards", card] => match (id(board), id(card)) {
            (Some(board_id), Some(card_id)) => Route::Card { board_id, card_id },
            _ => Route::NotFound(path.to_string()),
        },
        _ => Route::NotFound(path.to_string()),
    }
}

fn current_pathname() -> Option<String> {
    web_sys::window()?.location().pathname().ok()
}

/// Navigation capability handed to cards by the page that owns them
#[derive(Clone, Copy)]
pub struct Navigator {
    path: ReadSignal<String>,
    set_path: WriteSignal<String>,
}

impl Navigator {
    /// Navigator bound to `window.history`, following back/forward
    pub fn browser() -> Self {
        let (path, set_path) = signal(current_pathname().unwrap_or_else(|| "/".to_string()));

        let on_popstate = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
            if let Some(current) = current_pathname() {
                set_path.set(current);
            }
        });
        if let Some(win) = web_sys::window() {
            let _ = win.add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
        }
        on_popstate.forget();

        Self { path, set_path }
    }

    /// Push `path` onto the history stack and route to it
    pub fn redirect_to(&self, path: &str) {
        web_sys::console::log_1(&format!("[Nav] redirect to {}", path).into());
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            if let Err(err) = history.push_state_with_url(&JsValue::NULL, "", Some(path)) {
                web_sys::console::error_1(&format!("[Nav] pushState failed: {:?}", err).into());
            }
        }
        self.set_path.set(path.to_string());
    }

    /// Current route (tracked)
    pub fn route(&self) -> Route {
        parse_route(&self.path.get())
    }
}
