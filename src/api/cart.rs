//! Cart Endpoint
//!
//! `GET /api/cart` for the badge, `POST /api/cart` for mutations.

use cart_core::{CartAction, CartCountResponse, CartMutationResponse, CartResult};

use super::{decode, get, post_form};
use crate::config::ShopConfig;

pub async fn get_cart_count(config: &ShopConfig) -> CartResult<u32> {
    let response = get(&config.cart_url()).await?;
    let body: CartCountResponse = decode(response).await?;
    Ok(body.cart_count)
}

pub async fn send_cart_action(config: &ShopConfig, action: &CartAction) -> CartResult<CartMutationResponse> {
    log::debug!("[CART] {} {}", action.name(), action.product_id());
    let response = post_form(&config.cart_url(), action.to_form_body()).await?;
    decode(response).await
}
