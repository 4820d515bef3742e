//! Cart Line
//!
//! One product row of the cart page.

#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    pub unit_price: f64,
    /// May be 0 while an edit awaits the removal prompt
    pub quantity: u32,
}

impl CartLine {
    pub fn new(product_id: impl Into<String>, name: impl Into<String>, unit_price: f64, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    pub fn subtotal(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}
