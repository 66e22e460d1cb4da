//! Loading spinner component

use crate::grid::LOADING_MESSAGE;
use dioxus::prelude::*;

/// Loading spinner with optional message
#[component]
pub fn LoadingSpinner(
    /// Message to display below the spinner (default: "Loading bands...")
    #[props(default = LOADING_MESSAGE.to_string())]
    message: String,
) -> Element {
    rsx! {
        div {
            class: "loading",
            role: "status",
            "data-testid": "loading-indicator",
            div { class: "spinner" }
            p { class: "loading-message", "{message}" }
        }
    }
}
