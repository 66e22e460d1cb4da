//! Band card component - one cell of the bingo card

use crate::grid::BandCard;
use dioxus::prelude::*;

/// Individual band card
#[component]
pub fn BandCardView(card: BandCard) -> Element {
    let name = card.name.as_str();
    // CSS grid lines are 1-based
    let style = format!("grid-row: {}; grid-column: {};", card.row + 1, card.column + 1);

    rsx! {
        div {
            class: "band-card",
            style: "{style}",
            "data-testid": "band-card",
            title: "{name}",
            span { class: "band-name", "{name}" }
        }
    }
}
