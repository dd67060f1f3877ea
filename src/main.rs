//! Kanban Frontend Entry Point

mod app;
mod backend;
mod board_cache;
mod commands;
mod components;
mod context;
mod controller;
mod coordinator;
mod markdown;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

/// `log` records forwarded to the browser console
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.target(), record.args());
        let value = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            log::Level::Error => web_sys::console::error_1(&value),
            log::Level::Warn => web_sys::console::warn_1(&value),
            log::Level::Info => web_sys::console::info_1(&value),
            log::Level::Debug | log::Level::Trace => web_sys::console::debug_1(&value),
        }
    }

    fn flush(&self) {}
}

fn main() {
    console_error_panic_hook::set_once();
    if log::set_logger(&LOGGER).is_ok() {
        let level = if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        log::set_max_level(level);
    }
    mount_to_body(App);
}
