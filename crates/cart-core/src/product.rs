//! Product
//!
//! Catalog entry as served by `/admin/products/api`.

use serde::{Deserialize, Serialize};

/// Product data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub stock: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ingredients: Option<String>,
    #[serde(default)]
    pub allergens: Option<String>,
}

impl Product {
    /// Only an explicit zero stock counts as sold out
    pub fn is_sold_out(&self) -> bool {
        self.stock == Some(0)
    }
}
