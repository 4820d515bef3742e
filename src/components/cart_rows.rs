//! Cart Rows Component
//!
//! Body of the cart table, mounted into `#cart-table-body`. Keeps the
//! `.item-price`, `.item-quantity-input` and `.item-subtotal` hooks.

use cart_core::{format_money, CartLine};
use leptos::prelude::*;

use crate::actions;
use crate::config::use_shop_config;
use crate::store::{use_shop_store, ShopStateStoreFields, ShopStore};
use web_sys::HtmlInputElement;

/// One `<tr>` per cart line, keyed by product id
#[component]
pub fn CartRows() -> impl IntoView {
    let store = use_shop_store();

    let lines = move || {
        store
            .session()
            .read()
            .view()
            .map(|view| view.lines().to_vec())
            .unwrap_or_default()
    };

    view! {
        <For
            each=lines
            key=|line| line.product_id.clone()
            children=move |line| view! { <CartRow line=line /> }
        />
    }
}

#[component]
fn CartRow(line: CartLine) -> impl IntoView {
    let store = use_shop_store();
    let config = use_shop_config();

    let CartLine { product_id, name, unit_price, .. } = line;

    let id = product_id.clone();
    let quantity = Memo::new(move |_| {
        store
            .session()
            .read()
            .view()
            .and_then(|view| view.get(&id).map(|line| line.quantity))
            .unwrap_or(0)
    });
    let subtotal = move || format_money(quantity.get() as f64 * unit_price);

    let on_change = {
        let config = config.clone();
        let id = product_id.clone();
        move |ev: web_sys::Event| {
            let input = event_target::<HtmlInputElement>(&ev);
            actions::update_quantity(store, config.clone(), id.clone(), input.value());
            // The memo stays quiet when the edit ends on the starting value
            if let Some(quantity) = model_quantity(store, &id) {
                input.set_value(&quantity.to_string());
            }
        }
    };
    let on_remove = {
        let id = product_id.clone();
        move |_| actions::remove_item(store, config.clone(), id.clone())
    };

    view! {
        <tr data-product-id=product_id>
            <td class="item-name">{name}</td>
            <td>"RM " <span class="item-price">{format_money(unit_price)}</span></td>
            <td>
                <input
                    type="number"
                    min="0"
                    class="item-quantity-input"
                    prop:value=move || quantity.get().to_string()
                    on:change=on_change
                />
            </td>
            <td>"RM " <span class="item-subtotal">{subtotal}</span></td>
            <td>
                <button type="button" class="remove-btn" on:click=on_remove>"Remove"</button>
            </td>
        </tr>
    }
}

/// Quantity the model holds for `product_id`, None once the line is gone
fn model_quantity(store: ShopStore, product_id: &str) -> Option<u32> {
    store
        .session()
        .read_untracked()
        .view()
        .and_then(|view| view.get(product_id))
        .map(|line| line.quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_core::{CartSession, CartView, Prompt};
    use reactive_stores::Store;

    use crate::store::ShopState;

    struct Answer(bool);

    impl Prompt for Answer {
        fn confirm(&self, _message: &str) -> bool {
            self.0
        }
    }

    fn store_with(quantity: u32) -> ShopStore {
        let view = CartView::from_lines(vec![CartLine::new("c1", "Choc Chip", 5.00, quantity)]);
        Store::new(ShopState::new(CartSession::new(Some(view), quantity)))
    }

    #[test]
    fn test_declined_removal_from_one_writes_back_one() {
        let store = store_with(1);
        store.session().write().plan_update("c1", "0", &Answer(false));
        assert_eq!(model_quantity(store, "c1"), Some(1));
    }

    #[test]
    fn test_fractional_edit_writes_back_truncated_quantity() {
        let store = store_with(2);
        store.session().write().plan_update("c1", "2.5", &Answer(false));
        assert_eq!(model_quantity(store, "c1"), Some(2));
    }

    #[test]
    fn test_confirmed_removal_leaves_nothing_to_write_back() {
        let store = store_with(1);
        store.session().write().plan_update("c1", "0", &Answer(true));
        assert_eq!(model_quantity(store, "c1"), None);
    }
}
