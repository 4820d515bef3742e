//! Cart Badge Component
//!
//! Header item count, mounted into `#cart-count`.

use leptos::prelude::*;

use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn CartBadge() -> impl IntoView {
    let store = use_shop_store();

    move || store.session().read().badge().to_string()
}
