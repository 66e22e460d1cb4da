//! Page container component

use dioxus::prelude::*;

/// Centered page container with consistent padding
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div { class: "container", {children} }
    }
}
