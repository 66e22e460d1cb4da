//! Inline error alert with a retry action.

use crate::components::icons::AlertTriangleIcon;
use dioxus::prelude::*;

/// Error alert with icon, message, and a retry button.
#[component]
pub fn ErrorBanner(
    message: String,
    #[props(default = "Retry".to_string())] button_label: String,
    on_retry: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "error-banner", role: "alert", "data-testid": "error-banner",
            AlertTriangleIcon { class: "icon error-icon" }
            p { class: "error-message", "{message}" }
            button {
                class: "retry-button",
                r#type: "button",
                onclick: move |_| on_retry.call(()),
                "{button_label}"
            }
        }
    }
}
