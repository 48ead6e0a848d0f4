// services/web-dash/src/main.rs
//
// Pharmadash - Pharmacy inventory dashboard (browser SPA)
//

mod app;
mod auth;
mod components;
mod mock;
mod pages;
mod poll;
mod state;

use leptos::*;

fn main() {
    // Better panic messages in browser console
    console_error_panic_hook::set_once();

    // Initialize logging
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("Pharmadash starting...");

    // Mount Leptos app
    mount_to_body(|| {
        view! { <app::App /> }
    });
}
