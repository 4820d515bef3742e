//! Page Hooks
//!
//! Element ids the served pages expose, and the one-time read of
//! server-rendered values into typed state.

use cart_core::{parse_int_prefix, CartLine, RowMarkup};
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement};

pub const CART_COUNT_ID: &str = "cart-count";
pub const CART_TABLE_BODY_ID: &str = "cart-table-body";
pub const CART_GRAND_TOTAL_ID: &str = "cart-grand-total";
pub const PRODUCT_HOST_IDS: &[&str] = &["product-container", "product-grid"];
pub const ORDER_FORM_ID: &str = "orderForm";

pub fn element_by_id(id: &str) -> Option<HtmlElement> {
    document().get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()
}

/// First of `ids` present on the page
pub fn first_element_by_id(ids: &[&str]) -> Option<HtmlElement> {
    ids.iter().find_map(|id| element_by_id(id))
}

/// Remove the markup placeholder before an island takes over
pub fn clear(host: &Element) {
    host.set_inner_html("");
}

/// Count shown by the badge markup, 0 if it is not a number
pub fn read_count(host: &HtmlElement) -> u32 {
    host.text_content()
        .as_deref()
        .and_then(parse_int_prefix)
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

/// Read the server-rendered cart rows in page order
pub fn read_cart_rows(tbody: &Element) -> Vec<CartLine> {
    let Ok(rows) = tbody.query_selector_all("tr") else {
        return Vec::new();
    };
    let lines: Vec<CartLine> = (0..rows.length())
        .filter_map(|i| rows.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .filter_map(|row| {
            let line = row_markup(&row).to_line();
            if line.is_none() {
                log::warn!("[CART] skipping cart row without a product id");
            }
            line
        })
        .collect();
    log::debug!("[CART] hydrated {} cart lines", lines.len());
    lines
}

fn row_markup(row: &Element) -> RowMarkup {
    let cells: Vec<Element> = row
        .query_selector_all("td")
        .ok()
        .map(|list| {
            (0..list.length())
                .filter_map(|i| list.item(i))
                .filter_map(|node| node.dyn_into::<Element>().ok())
                .collect()
        })
        .unwrap_or_default();
    let cell_text = |index: usize| cells.get(index).and_then(|cell| cell.text_content());

    let quantity = select(row, ".item-quantity-input")
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        .map(|input| input.value());

    RowMarkup {
        product_id: row.get_attribute("data-product-id"),
        remove_handler: select(row, "button[onclick]").and_then(|button| button.get_attribute("onclick")),
        name: select(row, ".item-name").and_then(|el| el.text_content()).or_else(|| cell_text(0)),
        quantity: quantity.or_else(|| cell_text(2)),
        price: select(row, ".item-price").and_then(|el| el.text_content()).or_else(|| cell_text(1)),
    }
}

fn select(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}
