//! Shop API Wrappers
//!
//! Frontend bindings to the storefront HTTP endpoints, organized by domain.

mod cart;
mod products;
mod order;

use cart_core::{CartError, CartMutationResponse, CartResult};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

// Re-export all public items
pub use cart::*;
pub use products::*;
pub use order::*;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

// ========================
// Request Helpers
// ========================

async fn get(url: &str) -> CartResult<reqwest::Response> {
    let response = reqwest::Client::new().get(url).send().await.map_err(transport)?;
    checked(response).await
}

async fn post_form(url: &str, body: String) -> CartResult<reqwest::Response> {
    let response = reqwest::Client::new()
        .post(url)
        .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
        .body(body)
        .send()
        .await
        .map_err(transport)?;
    checked(response).await
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> CartResult<T> {
    response.json::<T>().await.map_err(|e| CartError::Decode(e.to_string()))
}

/// Non-2xx responses become `CartError::Status`, keeping the body's `message`
async fn checked(response: reqwest::Response) -> CartResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<CartMutationResponse>()
        .await
        .ok()
        .and_then(|body| body.message);
    Err(CartError::Status {
        status: status.as_u16(),
        message,
    })
}

fn transport(err: reqwest::Error) -> CartError {
    if err.is_decode() {
        CartError::Decode(err.to_string())
    } else {
        CartError::Network(err.to_string())
    }
}
