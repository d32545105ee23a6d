mod app;
mod components;
mod config;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::{LOG_LEVEL, MOUNT_ELEMENT_ID};

fn main() {
    console_error_panic_hook::set_once();
    utils::log::init(LOG_LEVEL);

    // A bad route table is a deployment error: refuse to start
    let router = app::build_router().unwrap_or_else(|err| {
        tracing::error!(%err, "route table rejected");
        panic!("route table rejected: {}", err)
    });

    let root = document()
        .get_element_by_id(MOUNT_ELEMENT_ID)
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App router=router /> }).forget();
}
