//! Page Boot
//!
//! Hydrates the cart state from the served page and mounts one island
//! per hook that is present. Pages without a hook simply skip it.

use cart_core::{CartSession, CartView};
use leptos::mount::{mount_to, mount_to_body};
use leptos::prelude::*;
use reactive_stores::Store;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlFormElement};

use crate::actions;
use crate::components::{CartBadge, CartRows, Catalog, GrandTotal, NoticeToast};
use crate::config::ShopConfig;
use crate::dom;
use crate::order_form::attach_order_form;
use crate::store::{ShopState, ShopStore};

pub fn start(config: ShopConfig) {
    let badge_host = dom::element_by_id(dom::CART_COUNT_ID);
    let table_host = dom::element_by_id(dom::CART_TABLE_BODY_ID);

    let initial_badge = badge_host.as_ref().map(dom::read_count).unwrap_or(0);
    let view = table_host
        .as_ref()
        .map(|tbody| CartView::from_lines(dom::read_cart_rows(tbody)));
    let mut session = CartSession::new(view, initial_badge);
    session.refresh_summary();

    let store: ShopStore = Store::new(ShopState::new(session));

    if let Some(host) = badge_host {
        island(host, store, &config, CartBadge);
        actions::load_initial_count(store, config.clone());
    }
    // Summary hooks are left alone off the cart page
    if let Some(host) = table_host {
        island(host, store, &config, CartRows);
        if let Some(total_host) = dom::element_by_id(dom::CART_GRAND_TOTAL_ID) {
            island(total_host, store, &config, GrandTotal);
        }
    }
    if let Some(host) = dom::first_element_by_id(dom::PRODUCT_HOST_IDS) {
        island(host, store, &config, Catalog);
    }
    if let Some(form) = dom::element_by_id(dom::ORDER_FORM_ID).and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) {
        attach_order_form(form, config.clone());
    }

    mount_to_body(move || {
        provide_context(store);
        view! { <NoticeToast /> }
    });
    log::info!("[BOOT] Cookie shop client ready");
}

/// Replace the host's markup with a reactive view sharing the store
fn island<F, V>(host: HtmlElement, store: ShopStore, config: &ShopConfig, root: F)
where
    F: FnOnce() -> V + 'static,
    V: IntoView + 'static,
{
    let id = host.id();
    dom::clear(&host);
    let config = config.clone();
    mount_to(host, move || {
        provide_context(store);
        provide_context(config);
        root()
    })
    .forget();
    log::debug!("[BOOT] mounted island #{}", id);
}
