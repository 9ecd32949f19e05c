#![allow(warnings)]
//! Board Card UI Entry Point

mod models;
mod interaction;
mod composition;
mod navigation;
mod lists;
mod store;
mod bootstrap;
mod markdown;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
