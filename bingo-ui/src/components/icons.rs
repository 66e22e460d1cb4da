//! Icon components using Lucide icon set (https://lucide.dev)
//!
//! Icons use stroke="currentColor" so they inherit text color.

use dioxus::prelude::*;

/// Alert triangle icon (warning/error)
#[component]
pub fn AlertTriangleIcon(#[props(default = "icon")] class: &'static str) -> Element {
    rsx! {
        svg {
            class: "{class}",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3" }
            path { d: "M12 9v4" }
            path { d: "M12 17h.01" }
        }
    }
}
