//! Cart API Wire Format
//!
//! Requests to `/api/cart` are `application/x-www-form-urlencoded`,
//! responses are JSON.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

use crate::quantity::Quantity;

/// Characters left unescaped by `application/x-www-form-urlencoded`
const FORM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Encode key/value pairs as a form body. Spaces become `+`.
pub fn encode_form<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| format!("{}={}", encode_component(key), encode_component(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode_component(s: &str) -> String {
    utf8_percent_encode(s, FORM).to_string().replace("%20", "+")
}

/// Mutation sent to `POST /api/cart`
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    Add { product_id: String, quantity: Quantity },
    Update { product_id: String, quantity: Quantity },
    Delete { product_id: String },
}

impl CartAction {
    /// Value of the `action` form field
    pub fn name(&self) -> &'static str {
        match self {
            CartAction::Add { .. } => "add",
            CartAction::Update { .. } => "update",
            CartAction::Delete { .. } => "delete",
        }
    }

    pub fn product_id(&self) -> &str {
        match self {
            CartAction::Add { product_id, .. }
            | CartAction::Update { product_id, .. }
            | CartAction::Delete { product_id } => product_id,
        }
    }

    pub fn quantity(&self) -> Option<Quantity> {
        match self {
            CartAction::Add { quantity, .. } | CartAction::Update { quantity, .. } => Some(*quantity),
            CartAction::Delete { .. } => None,
        }
    }

    pub fn to_form_body(&self) -> String {
        let quantity = self.quantity().map(|q| q.to_string());
        let mut pairs = vec![("action", self.name()), ("productId", self.product_id())];
        if let Some(q) = quantity.as_deref() {
            pairs.push(("quantity", q));
        }
        encode_form(pairs)
    }
}

/// Body of `GET /api/cart`
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CartCountResponse {
    #[serde(rename = "cartCount")]
    pub cart_count: u32,
}

/// Body of `POST /api/cart`. Every field may be missing.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct CartMutationResponse {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(rename = "cartCount", default)]
    pub cart_count: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

impl CartMutationResponse {
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_body_for_each_action() {
        let add = CartAction::Add { product_id: "c1".into(), quantity: Quantity::parse("2").unwrap() };
        assert_eq!(add.to_form_body(), "action=add&productId=c1&quantity=2");

        let update = CartAction::Update { product_id: "c1".into(), quantity: Quantity::ONE };
        assert_eq!(update.to_form_body(), "action=update&productId=c1&quantity=1");

        let delete = CartAction::Delete { product_id: "c1".into() };
        assert_eq!(delete.to_form_body(), "action=delete&productId=c1");
    }

    #[test]
    fn test_encode_form_escapes() {
        let body = encode_form([("name", "Ali Baba"), ("note", "a&b=c/é")]);
        assert_eq!(body, "name=Ali+Baba&note=a%26b%3Dc%2F%C3%A9");
        assert_eq!(encode_form([("id", "oat-raisin_2.0*")]), "id=oat-raisin_2.0*");
    }

    #[test]
    fn test_decode_mutation_responses() {
        let ok: CartMutationResponse =
            serde_json::from_str(r#"{"success":true, "cartCount":4, "message":"Added to cart!"}"#).unwrap();
        assert!(ok.is_success());
        assert_eq!(ok.cart_count, Some(4));

        let denied: CartMutationResponse =
            serde_json::from_str(r#"{"success":false, "message":"Please login first!"}"#).unwrap();
        assert!(!denied.is_success());
        assert_eq!(denied.cart_count, None);

        let bare: CartMutationResponse = serde_json::from_str(r#"{"cartCount":2}"#).unwrap();
        assert!(!bare.is_success());
        assert_eq!(bare.cart_count, Some(2));
    }

    #[test]
    fn test_decode_count_response() {
        let count: CartCountResponse = serde_json::from_str(r#"{"cartCount":7}"#).unwrap();
        assert_eq!(count.cart_count, 7);
        assert!(serde_json::from_str::<CartCountResponse>("{}").is_err());
    }
}
