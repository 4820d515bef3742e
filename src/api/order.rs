//! Legacy Order Endpoint
//!
//! `POST /order` takes arbitrary form fields and answers in plain text.

use cart_core::{CartError, CartResult};

use super::post_form;
use crate::config::ShopConfig;

pub async fn submit_order(config: &ShopConfig, form_body: String) -> CartResult<String> {
    let response = post_form(&config.order_url(), form_body).await?;
    response.text().await.map_err(|e| CartError::Decode(e.to_string()))
}
