//! Product Catalog Endpoint

use cart_core::{CartResult, Product};

use super::{decode, get};
use crate::config::ShopConfig;

pub async fn list_products(config: &ShopConfig) -> CartResult<Vec<Product>> {
    let response = get(&config.products_url()).await?;
    decode(response).await
}
