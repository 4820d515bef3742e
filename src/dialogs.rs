//! Browser Dialogs
//!
//! Blocking `alert`/`confirm` through the window object.

use cart_core::Prompt;
use leptos::prelude::*;

/// `window.confirm` backed prompt
pub struct BrowserPrompt;

impl Prompt for BrowserPrompt {
    fn confirm(&self, message: &str) -> bool {
        window().confirm_with_message(message).unwrap_or(false)
    }
}

pub fn alert(message: &str) {
    if window().alert_with_message(message).is_err() {
        log::warn!("[UI] alert could not be shown: {}", message);
    }
}
