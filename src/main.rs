//! Cookie Shop Frontend Entry Point

mod config;
mod api;
mod store;
mod dom;
mod dialogs;
mod actions;
mod components;
mod order_form;
mod boot;

use config::ShopConfig;

fn main() {
    console_error_panic_hook::set_once();
    let config = ShopConfig::from_document();
    _ = console_log::init_with_level(config.log_level);

    log::info!("[BOOT] Starting cookie shop client, api base {}", config.api_base);
    boot::start(config);
}
