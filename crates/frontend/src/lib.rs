pub mod app;
pub mod app_shell;
pub mod layout;
pub mod shared;

use contracts::poster::SITE_TITLE;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(SITE_TITLE);
    }

    log::info!("mounting {}", SITE_TITLE);
    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
