//! Legacy Order Form
//!
//! Intercepts `#orderForm` submits and posts the fields to `/order`;
//! the plain-text reply is shown in an alert.

use cart_core::encode_form;
use leptos::task::spawn_local;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{FormData, HtmlFormElement};

use crate::api;
use crate::config::ShopConfig;
use crate::dialogs::alert;

pub fn attach_order_form(form: HtmlFormElement, config: ShopConfig) {
    let target = form.clone();
    let on_submit = Closure::wrap(Box::new(move |ev: web_sys::Event| {
        ev.prevent_default();
        let Some(body) = form_body(&target) else {
            log::error!("[ORDER] could not read order form fields");
            return;
        };
        let form = target.clone();
        let config = config.clone();
        spawn_local(async move {
            match api::submit_order(&config, body).await {
                Ok(reply) => {
                    alert(&reply);
                    form.reset();
                }
                Err(err) => log::error!("[ORDER] Error submitting old order form: {}", err),
            }
        });
    }) as Box<dyn FnMut(_)>);

    if form
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("[ORDER] could not attach submit handler");
    }
    on_submit.forget();
}

/// Form-encode every text field; file inputs are skipped
fn form_body(form: &HtmlFormElement) -> Option<String> {
    let data = FormData::new_with_form(form).ok()?;
    let entries = js_sys::try_iter(&data).ok()??;

    let mut fields = Vec::new();
    for entry in entries {
        let pair: js_sys::Array = entry.ok()?.dyn_into().ok()?;
        if let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.push((key, value));
        }
    }
    Some(encode_form(fields.iter().map(|(key, value)| (key.as_str(), value.as_str()))))
}
