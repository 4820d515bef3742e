//! Global Shop State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. All islands
//! share the one store created at boot.

use cart_core::{CartSession, Product};
use leptos::prelude::*;
use reactive_stores::Store;

/// Catalog fetch progress
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CatalogState {
    #[default]
    Loading,
    Loaded(Vec<Product>),
    Failed,
}

impl CatalogState {
    /// Products to render; none while loading or after a failure
    pub fn products(&self) -> &[Product] {
        match self {
            CatalogState::Loaded(products) => products,
            CatalogState::Loading | CatalogState::Failed => &[],
        }
    }

    /// Loaded successfully with nothing in it
    pub fn is_empty_catalog(&self) -> bool {
        matches!(self, CatalogState::Loaded(products) if products.is_empty())
    }
}

/// Transient message shown by the toast
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub seq: u32,
    pub text: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ShopState {
    /// Cart-view model and badge
    pub session: CartSession,
    pub catalog: CatalogState,
    pub notice: Option<Notice>,
    /// Last notice sequence number handed out
    pub notice_seq: u32,
}

impl ShopState {
    pub fn new(session: CartSession) -> Self {
        Self {
            session,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type ShopStore = Store<ShopState>;

/// Get the shop store from context
pub fn use_shop_store() -> ShopStore {
    expect_context::<ShopStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the current notice; returns its sequence number
pub fn store_push_notice(store: &ShopStore, text: impl Into<String>) -> u32 {
    let seq = {
        let field = store.notice_seq();
        let mut next = field.write();
        *next = next.wrapping_add(1);
        *next
    };
    *store.notice().write() = Some(Notice { seq, text: text.into() });
    seq
}

/// Clear the notice only if it is still the one with `seq`
pub fn store_clear_notice(store: &ShopStore, seq: u32) {
    let current = store.notice().read_untracked().as_ref().map(|n| n.seq);
    if current == Some(seq) {
        *store.notice().write() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cookie(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Cookie {}", id),
            price: 5.0,
            stock: None,
            description: None,
            ingredients: None,
            allergens: None,
        }
    }

    #[test]
    fn test_empty_catalog_only_when_loaded() {
        assert!(CatalogState::Loaded(Vec::new()).is_empty_catalog());
        assert!(!CatalogState::Loading.is_empty_catalog());
        assert!(!CatalogState::Failed.is_empty_catalog());
        assert!(!CatalogState::Loaded(vec![cookie("c1")]).is_empty_catalog());
    }

    #[test]
    fn test_failed_catalog_renders_no_products() {
        assert!(CatalogState::Failed.products().is_empty());
        assert_eq!(CatalogState::Loaded(vec![cookie("c1"), cookie("c2")]).products().len(), 2);
    }

    #[test]
    fn test_notice_sequence_advances_and_guards_clear() {
        let store: ShopStore = Store::new(ShopState::new(CartSession::default()));

        let first = store_push_notice(&store, "Added to cart!");
        let second = store_push_notice(&store, "Added again");
        assert_eq!(second, first.wrapping_add(1));

        // a stale dismissal leaves the newer notice up
        store_clear_notice(&store, first);
        assert_eq!(store.notice().read_untracked().as_ref().map(|n| n.text.clone()), Some("Added again".to_string()));

        store_clear_notice(&store, second);
        assert!(store.notice().read_untracked().is_none());
    }
}
