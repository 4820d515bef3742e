//! Product Card Component
//!
//! One catalog entry with its stepper and "Add to Cart" button.

use cart_core::{format_money, Product};
use leptos::prelude::*;

use crate::actions;
use crate::components::QuantityStepper;
use crate::config::use_shop_config;
use crate::store::use_shop_store;

#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let store = use_shop_store();
    let config = use_shop_config();
    let (quantity, set_quantity) = signal(1u32);

    let sold_out = product.is_sold_out();
    let Product { id, name, price, stock, description, allergens, .. } = product;

    let card_class = if sold_out { "product-card sold-out" } else { "product-card" };
    let button_text = if sold_out { "Sold out" } else { "Add to Cart" };

    let on_add = {
        let id = id.clone();
        move |_| actions::add_to_cart(store, config.clone(), id.clone(), quantity.get_untracked().to_string())
    };

    view! {
        <div class=card_class data-product-id=id>
            <h3 class="product-name">{name}</h3>
            <p class="product-price">"RM " {format_money(price)}</p>
            {description.map(|text| view! { <p class="product-description">{text}</p> })}
            {allergens.map(|text| view! { <p class="product-allergens">"Allergens: " {text}</p> })}
            {stock.filter(|left| *left > 0).map(|left| view! { <p class="product-stock">{left} " left"</p> })}
            <QuantityStepper quantity=quantity set_quantity=set_quantity disabled=sold_out />
            <button type="button" class="add-to-cart-btn" disabled=sold_out on:click=on_add>
                {button_text}
            </button>
        </div>
    }
}
