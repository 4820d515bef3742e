//! Grand Total Component
//!
//! Formatted cart total, mounted into `#cart-grand-total`.

use cart_core::{format_money, CartTotals};
use leptos::prelude::*;

use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn GrandTotal() -> impl IntoView {
    let store = use_shop_store();

    move || {
        store
            .session()
            .read()
            .totals()
            .map(|totals: CartTotals| totals.formatted_total())
            .unwrap_or_else(|| format_money(0.0))
    }
}
