//! Cart-View Model
//!
//! Ordered cart lines keyed by product id, plus the grand total
//! calculation over them.

use crate::line::CartLine;
use crate::format_money;

/// Result of the grand total calculation
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CartTotals {
    pub grand_total: f64,
    pub item_count: u32,
}

impl CartTotals {
    /// Grand total rounded to 2 decimals for display
    pub fn formatted_total(&self) -> String {
        format_money(self.grand_total)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartView {
    lines: Vec<CartLine>,
}

impl CartView {
    /// Build a view from rows in page order. A repeated product id keeps
    /// the first row.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut view = Self::default();
        for line in lines {
            if view.get(&line.product_id).is_none() {
                view.lines.push(line);
            }
        }
        view
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    /// Set a line's quantity; false when the product has no line
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) -> bool {
        match self.lines.iter_mut().find(|line| line.product_id == product_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, product_id: &str) -> Option<CartLine> {
        let index = self.lines.iter().position(|line| line.product_id == product_id)?;
        Some(self.lines.remove(index))
    }

    pub fn totals(&self) -> CartTotals {
        self.lines.iter().fold(CartTotals::default(), |acc, line| CartTotals {
            grand_total: acc.grand_total + line.subtotal(),
            item_count: acc.item_count.saturating_add(line.quantity),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_view() -> CartView {
        CartView::from_lines(vec![
            CartLine::new("c1", "Choc Chip", 5.00, 3),
            CartLine::new("c2", "Oat", 4.25, 2),
            CartLine::new("c3", "Ginger", 0.0, 4),
        ])
    }

    #[test]
    fn test_totals_sum_over_lines() {
        let totals = make_view().totals();
        assert!((totals.grand_total - 23.5).abs() < 1e-9);
        assert_eq!(totals.item_count, 9);
        assert_eq!(totals.formatted_total(), "23.50");
    }

    #[test]
    fn test_single_line_scenario() {
        let view = CartView::from_lines(vec![CartLine::new("c1", "Choc Chip", 5.00, 3)]);
        let totals = view.totals();
        assert_eq!(totals.formatted_total(), "15.00");
        assert_eq!(totals.item_count, 3);
    }

    #[test]
    fn test_empty_view_totals() {
        let totals = CartView::default().totals();
        assert_eq!(totals.formatted_total(), "0.00");
        assert_eq!(totals.item_count, 0);
    }

    #[test]
    fn test_rounding_to_cents() {
        let view = CartView::from_lines(vec![
            CartLine::new("a", "A", 0.1, 1),
            CartLine::new("b", "B", 0.2, 1),
        ]);
        assert_eq!(view.totals().formatted_total(), "0.30");
    }

    #[test]
    fn test_set_quantity_and_remove() {
        let mut view = make_view();
        assert!(view.set_quantity("c2", 5));
        assert_eq!(view.get("c2").unwrap().quantity, 5);
        assert!(!view.set_quantity("missing", 1));

        let removed = view.remove("c1").unwrap();
        assert_eq!(removed.name, "Choc Chip");
        assert!(view.get("c1").is_none());
        assert_eq!(view.lines().len(), 2);
        assert!(view.remove("c1").is_none());
    }

    #[test]
    fn test_duplicate_rows_keep_first() {
        let view = CartView::from_lines(vec![
            CartLine::new("c1", "First", 1.0, 1),
            CartLine::new("c1", "Second", 2.0, 2),
        ]);
        assert_eq!(view.lines().len(), 1);
        assert_eq!(view.get("c1").unwrap().name, "First");
    }
}
