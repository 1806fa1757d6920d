//! Task Board Frontend Entry Point

mod app;
mod components;
mod context;
mod pages;
mod routes;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init_logger("TaskBoard", console_logger::level_from_env()) {
        web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(&format!("Logger init failed: {}", e)));
    }
    mount_to_body(App);
}
