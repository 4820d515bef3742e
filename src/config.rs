//! Client Configuration
//!
//! Endpoints and log level, read once at boot from the served page.
//! The API base defaults to the page origin; `<meta>` tags override it.

use leptos::prelude::*;

pub const CART_API_PATH: &str = "/api/cart";
pub const PRODUCTS_API_PATH: &str = "/admin/products/api";
pub const ORDER_PATH: &str = "/order";

const META_API_BASE: &str = "shop:api-base";
const META_PRODUCTS_PATH: &str = "shop:products-path";
const META_LOG_LEVEL: &str = "shop:log-level";

#[derive(Debug, Clone, PartialEq)]
pub struct ShopConfig {
    pub api_base: String,
    pub cart_path: String,
    pub products_path: String,
    pub order_path: String,
    pub log_level: log::Level,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            cart_path: CART_API_PATH.to_string(),
            products_path: PRODUCTS_API_PATH.to_string(),
            order_path: ORDER_PATH.to_string(),
            log_level: log::Level::Info,
        }
    }
}

impl ShopConfig {
    /// Build from `window.location.origin` and any `shop:*` meta tags
    pub fn from_document() -> Self {
        let mut config = Self::default();
        if let Ok(origin) = window().location().origin() {
            config.api_base = origin;
        }
        if let Some(base) = meta_content(META_API_BASE) {
            config.api_base = base;
        }
        if let Some(path) = meta_content(META_PRODUCTS_PATH) {
            config.products_path = path;
        }
        if let Some(level) = meta_content(META_LOG_LEVEL).and_then(|l| l.parse().ok()) {
            config.log_level = level;
        }
        config
    }

    pub fn cart_url(&self) -> String {
        join_url(&self.api_base, &self.cart_path)
    }

    pub fn products_url(&self) -> String {
        join_url(&self.api_base, &self.products_path)
    }

    pub fn order_url(&self) -> String {
        join_url(&self.api_base, &self.order_path)
    }
}

/// Get the config from context
pub fn use_shop_config() -> ShopConfig {
    expect_context::<ShopConfig>()
}

fn meta_content(name: &str) -> Option<String> {
    let selector = format!("meta[name=\"{}\"]", name);
    document()
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"))
        .map(|content| content.trim().to_string())
        .filter(|content| !content.is_empty())
}

/// Join an endpoint path onto the base. Absolute paths pass through.
fn join_url(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://localhost:8080", "/api/cart"), "http://localhost:8080/api/cart");
        assert_eq!(join_url("http://localhost:8080/", "api/cart"), "http://localhost:8080/api/cart");
        assert_eq!(join_url("http://shop.test", "https://cdn.test/p.json"), "https://cdn.test/p.json");
    }

    #[test]
    fn test_default_endpoints() {
        let config = ShopConfig {
            api_base: "http://localhost:8080".to_string(),
            ..Default::default()
        };
        assert_eq!(config.cart_url(), "http://localhost:8080/api/cart");
        assert_eq!(config.products_url(), "http://localhost:8080/admin/products/api");
        assert_eq!(config.order_url(), "http://localhost:8080/order");
        assert_eq!(config.log_level, log::Level::Info);
    }
}
