//! Storefront Frontend Entry Point

mod storage;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;
use storefront_core::config::LOG_CAPACITY;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(LevelFilter::Info, LOG_CAPACITY);
    mount_to_body(App);
}
