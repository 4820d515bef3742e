//! Server-Rendered Row Markup
//!
//! Raw text pulled out of one `<tr>` of `#cart-table-body`, and the
//! conversion into a [`CartLine`]. Runs once per page load.

use crate::line::CartLine;
use crate::quantity::{parse_amount, parse_int_prefix};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowMarkup {
    /// `data-product-id` of the row
    pub product_id: Option<String>,
    /// Inline click handler of the row's remove button
    pub remove_handler: Option<String>,
    pub name: Option<String>,
    /// `.item-quantity-input` value, or the quantity cell text
    pub quantity: Option<String>,
    /// `.item-price` text, or the price cell text
    pub price: Option<String>,
}

impl RowMarkup {
    /// None when the row carries no product id at all
    pub fn to_line(&self) -> Option<CartLine> {
        let product_id = self
            .product_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .or_else(|| self.remove_handler.as_deref().and_then(product_id_from_handler))?;

        let quantity = self
            .quantity
            .as_deref()
            .and_then(parse_int_prefix)
            .and_then(|q| u32::try_from(q).ok())
            .unwrap_or(0);
        let unit_price = self
            .price
            .as_deref()
            .and_then(parse_amount)
            .filter(|p| p.is_finite() && *p >= 0.0)
            .unwrap_or(0.0);
        let name = self.name.as_deref().map(str::trim).unwrap_or_default();

        Some(CartLine::new(product_id, name, unit_price, quantity))
    }
}

/// First single- or double-quoted argument of a handler such as
/// `removeItem('c1')`
pub fn product_id_from_handler(handler: &str) -> Option<&str> {
    let open = handler.find(['\'', '"'])?;
    let quote = handler[open..].chars().next()?;
    let rest = &handler[open + 1..];
    let close = rest.find(quote)?;
    let id = rest[..close].trim();
    (!id.is_empty()).then_some(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_rendered_row() {
        let row = RowMarkup {
            product_id: None,
            remove_handler: Some("removeItem('c7')".into()),
            name: Some(" Double Choc ".into()),
            quantity: Some("3".into()),
            price: Some("RM 5.00".into()),
        };
        let line = row.to_line().unwrap();
        assert_eq!(line, CartLine::new("c7", "Double Choc", 5.0, 3));
    }

    #[test]
    fn test_data_attribute_wins_over_handler() {
        let row = RowMarkup {
            product_id: Some("c1".into()),
            remove_handler: Some("removeItem('other')".into()),
            ..Default::default()
        };
        assert_eq!(row.to_line().unwrap().product_id, "c1");
    }

    #[test]
    fn test_unparsable_cells_default_to_zero() {
        let row = RowMarkup {
            product_id: Some("c1".into()),
            quantity: Some("lots".into()),
            price: Some("free".into()),
            ..Default::default()
        };
        let line = row.to_line().unwrap();
        assert_eq!(line.quantity, 0);
        assert_eq!(line.unit_price, 0.0);
    }

    #[test]
    fn test_row_without_id_is_skipped() {
        let row = RowMarkup { quantity: Some("2".into()), ..Default::default() };
        assert_eq!(row.to_line(), None);
    }

    #[test]
    fn test_product_id_from_handler() {
        assert_eq!(product_id_from_handler("removeItem('c1')"), Some("c1"));
        assert_eq!(product_id_from_handler(r#"removeItemFromCart("c2", this)"#), Some("c2"));
        assert_eq!(product_id_from_handler("removeItem()"), None);
        assert_eq!(product_id_from_handler("removeItem('')"), None);
    }
}
