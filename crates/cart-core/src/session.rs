//! Cart Session
//!
//! Client-visible cart state: the cart-view model (present only on the
//! cart page) and the header badge. Mutations are split in two phases.
//! `plan_*` applies the optimistic local edit and returns the request to
//! send; `apply_*` folds the server's answer back in.

use crate::error::CartResult;
use crate::quantity::{parse_int_prefix, Quantity};
use crate::view::{CartTotals, CartView};
use crate::wire::{CartAction, CartMutationResponse};

/// Question asked when a quantity is edited down to zero
pub const REMOVE_PROMPT: &str = "Quantity is zero. Do you want to remove this item?";

/// Blocking yes/no question to the user
pub trait Prompt {
    fn confirm(&self, message: &str) -> bool;
}

/// What an add response means for the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Server accepted the item; notify the user
    Added,
    /// Response did not report success; nothing to show
    NotAdded,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartSession {
    /// None when the page has no cart table
    view: Option<CartView>,
    badge: u32,
}

impl CartSession {
    pub fn new(view: Option<CartView>, badge: u32) -> Self {
        Self { view, badge }
    }

    pub fn view(&self) -> Option<&CartView> {
        self.view.as_ref()
    }

    pub fn badge(&self) -> u32 {
        self.badge
    }

    pub fn set_badge(&mut self, count: u32) {
        self.badge = count;
    }

    pub fn totals(&self) -> Option<CartTotals> {
        self.view.as_ref().map(CartView::totals)
    }

    /// Grand total calculation. Mirrors the item count into the badge;
    /// does nothing off the cart page.
    pub fn refresh_summary(&mut self) -> Option<CartTotals> {
        let totals = self.totals()?;
        self.badge = totals.item_count;
        Some(totals)
    }

    /// Validate an add. No local state changes; an error means no
    /// request must be sent.
    pub fn plan_add(product_id: &str, raw_quantity: &str) -> CartResult<CartAction> {
        let quantity = Quantity::parse(raw_quantity)?;
        Ok(CartAction::Add {
            product_id: product_id.to_string(),
            quantity,
        })
    }

    pub fn apply_add_response(&mut self, response: &CartMutationResponse) -> AddOutcome {
        if !response.is_success() {
            return AddOutcome::NotAdded;
        }
        self.apply_count(response);
        AddOutcome::Added
    }

    /// Optimistically apply an edited quantity. Zero, negative or
    /// unparsable input asks to remove the line; declining falls back to a
    /// quantity of 1. Oversized input saturates like an add does.
    pub fn plan_update(&mut self, product_id: &str, raw_quantity: &str, prompt: &impl Prompt) -> CartAction {
        let parsed = parse_int_prefix(raw_quantity).unwrap_or(0);
        let Some(quantity) = Quantity::from_count(parsed) else {
            self.set_line_quantity(product_id, 0);
            if prompt.confirm(REMOVE_PROMPT) {
                return self.plan_delete(product_id);
            }
            return self.plan_update(product_id, "1", prompt);
        };

        self.set_line_quantity(product_id, quantity.get());
        CartAction::Update {
            product_id: product_id.to_string(),
            quantity,
        }
    }

    /// Optimistically drop the line; it is gone before the request is sent
    pub fn plan_delete(&mut self, product_id: &str) -> CartAction {
        if let Some(view) = self.view.as_mut() {
            view.remove(product_id);
        }
        self.refresh_summary();
        CartAction::Delete {
            product_id: product_id.to_string(),
        }
    }

    /// Overwrite the badge with the server's count, if it sent one
    pub fn apply_count(&mut self, response: &CartMutationResponse) {
        if let Some(count) = response.cart_count {
            self.badge = count;
        }
    }

    fn set_line_quantity(&mut self, product_id: &str, quantity: u32) {
        if let Some(view) = self.view.as_mut() {
            if !view.set_quantity(product_id, quantity) {
                log::debug!("[CART] no line for product {}", product_id);
            }
        }
        self.refresh_summary();
    }
}
