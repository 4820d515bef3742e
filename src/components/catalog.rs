//! Catalog Component
//!
//! Product grid, mounted into `#product-container` or `#product-grid`.
//! Fetched once; a failed fetch leaves the area empty.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::ProductCard;
use crate::config::use_shop_config;
use crate::store::{use_shop_store, CatalogState, ShopStateStoreFields};

pub const EMPTY_CATALOG_TEXT: &str = "No cookies available yet!";

#[component]
pub fn Catalog() -> impl IntoView {
    let store = use_shop_store();
    let config = use_shop_config();

    // Load products on mount
    Effect::new(move |_| {
        let config = config.clone();
        spawn_local(async move {
            match api::list_products(&config).await {
                Ok(products) => {
                    log::info!("[CATALOG] Loaded {} products", products.len());
                    *store.catalog().write() = CatalogState::Loaded(products);
                }
                Err(err) => {
                    log::error!("[CATALOG] Error loading products: {}", err);
                    *store.catalog().write() = CatalogState::Failed;
                }
            }
        });
    });

    move || {
        let state = store.catalog().get();
        if state.is_empty_catalog() {
            return view! { <p class="catalog-empty">{EMPTY_CATALOG_TEXT}</p> }.into_any();
        }
        state
            .products()
            .iter()
            .cloned()
            .map(|product| view! { <ProductCard product=product /> })
            .collect_view()
            .into_any()
    }
}
