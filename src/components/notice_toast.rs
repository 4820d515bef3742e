//! Notice Toast Component
//!
//! Non-blocking notice, appended to the body at boot.

use leptos::prelude::*;

use crate::store::{use_shop_store, ShopStateStoreFields};

#[component]
pub fn NoticeToast() -> impl IntoView {
    let store = use_shop_store();

    view! {
        <Show when=move || store.notice().read().is_some()>
            <div class="toast-notice" role="status">
                {move || store.notice().read().as_ref().map(|notice| notice.text.clone())}
            </div>
        </Show>
    }
}
