//! Cart Actions
//!
//! User-triggered cart operations. Each applies its local edit
//! synchronously, then sends the request in the background and folds
//! the answer back into the store. Requests are never retried and local
//! edits are never rolled back.

use cart_core::{AddOutcome, CartAction, CartSession};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::config::ShopConfig;
use crate::dialogs::{alert, BrowserPrompt};
use crate::store::{store_clear_notice, store_push_notice, ShopStateStoreFields, ShopStore};

pub const ADDED_NOTICE: &str = "Item added to cart!";
pub const ADD_FAILED_ALERT: &str = "Failed to add item to cart. See console for details.";
const NOTICE_MILLIS: u32 = 3_000;

/// Validate and send an add; invalid input alerts and sends nothing
pub fn add_to_cart(store: ShopStore, config: ShopConfig, product_id: String, raw_quantity: String) {
    let action = match CartSession::plan_add(&product_id, &raw_quantity) {
        Ok(action) => action,
        Err(err) => {
            alert(&err.to_string());
            return;
        }
    };

    spawn_local(async move {
        match api::send_cart_action(&config, &action).await {
            Ok(response) => {
                let outcome = store.session().write().apply_add_response(&response);
                if outcome == AddOutcome::Added {
                    show_notice(store, ADDED_NOTICE);
                }
            }
            Err(err) => {
                log::error!("[CART] Error adding to cart: {}", err);
                alert(err.server_message().unwrap_or(ADD_FAILED_ALERT));
            }
        }
    });
}

/// Apply an edited quantity input, possibly turning into a removal
pub fn update_quantity(store: ShopStore, config: ShopConfig, product_id: String, raw_quantity: String) {
    let action = store
        .session()
        .write()
        .plan_update(&product_id, &raw_quantity, &BrowserPrompt);
    send_in_background(store, config, action);
}

pub fn remove_item(store: ShopStore, config: ShopConfig, product_id: String) {
    let action = store.session().write().plan_delete(&product_id);
    send_in_background(store, config, action);
}

/// Read the server's count into the badge. Failure keeps the markup value.
pub fn load_initial_count(store: ShopStore, config: ShopConfig) {
    spawn_local(async move {
        match api::get_cart_count(&config).await {
            Ok(count) => {
                log::debug!("[CART] initial cart count {}", count);
                store.session().write().set_badge(count);
            }
            Err(err) => {
                log::warn!("[CART] Initial cart count could not be loaded: {}", err);
            }
        }
    });
}

fn send_in_background(store: ShopStore, config: ShopConfig, action: CartAction) {
    spawn_local(async move {
        match api::send_cart_action(&config, &action).await {
            Ok(response) => store.session().write().apply_count(&response),
            Err(err) => log::error!("[CART] Error sending {} for {}: {}", action.name(), action.product_id(), err),
        }
    });
}

fn show_notice(store: ShopStore, text: &str) {
    let seq = store_push_notice(&store, text);
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_MILLIS).await;
        store_clear_notice(&store, seq);
    });
}
