//! Cart Core
//!
//! Domain layer of the cookie shop client: products, the cart-view
//! model, totals, quantity parsing and the `/api/cart` wire format.
//! This crate has NO DOM or network dependencies.

mod error;
mod product;
mod quantity;
mod line;
mod view;
mod wire;
mod session;
mod markup;

pub use error::{CartError, CartResult};
pub use product::Product;
pub use quantity::{clamp_stepper, parse_amount, parse_int_prefix, Quantity};
pub use line::CartLine;
pub use view::{CartTotals, CartView};
pub use wire::{encode_form, CartAction, CartCountResponse, CartMutationResponse};
pub use session::{AddOutcome, CartSession, Prompt, REMOVE_PROMPT};
pub use markup::{product_id_from_handler, RowMarkup};

/// Format a money amount the way every price on the shop is shown.
pub fn format_money(amount: f64) -> String {
    format!("{:.2}", amount)
}
