//! Quantity Stepper Component
//!
//! −/+ buttons around a numeric input. Purely local; the value never
//! drops below 1.

use cart_core::{clamp_stepper, parse_int_prefix};
use leptos::prelude::*;

#[component]
pub fn QuantityStepper(
    quantity: ReadSignal<u32>,
    set_quantity: WriteSignal<u32>,
    #[prop(optional)] disabled: bool,
) -> impl IntoView {
    let step = move |delta: i64| set_quantity.update(|q| *q = clamp_stepper(*q as i64 + delta));

    view! {
        <div class="quantity-stepper">
            <button type="button" class="stepper-btn" disabled=disabled on:click=move |_| step(-1)>"−"</button>
            <input
                type="number"
                min="1"
                class="stepper-input"
                disabled=disabled
                prop:value=move || quantity.get().to_string()
                on:change=move |ev| {
                    let value = parse_int_prefix(&event_target_value(&ev)).map(clamp_stepper).unwrap_or(1);
                    set_quantity.set(value);
                }
            />
            <button type="button" class="stepper-btn" disabled=disabled on:click=move |_| step(1)>"+"</button>
        </div>
    }
}
