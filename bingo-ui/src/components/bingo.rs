//! Bingo view component - pure rendering, no data fetching
//!
//! Accepts `ReadStore<BingoState>` and renders the grid view model for the
//! current load state. Retrying is delegated to `on_retry`.

use crate::components::band_card::BandCardView;
use crate::components::error_banner::ErrorBanner;
use crate::components::helpers::{LoadingSpinner, PageContainer};
use crate::grid::{grid_view, BandCard, GridView, GRID_COLUMNS, HEADING};
use crate::stores::bingo::{BingoState, BingoStateStoreExt};
use dioxus::prelude::*;

/// Bingo page: heading plus loading indicator, error alert, or card grid
#[component]
pub fn BingoView(state: ReadStore<BingoState>, on_retry: EventHandler<()>) -> Element {
    let view = grid_view(&state.load_state().read());

    let body = match view {
        GridView::Loading { message } => rsx! {
            LoadingSpinner { message }
        },
        GridView::Failed { message } => rsx! {
            div { class: "error-container",
                ErrorBanner { message, on_retry }
            }
        },
        GridView::Grid { cards, rows } => rsx! {
            BingoGrid { cards, rows }
        },
    };

    rsx! {
        PageContainer {
            h1 { class: "heading", "{HEADING}" }
            {body}
        }
    }
}

#[component]
fn BingoGrid(cards: Vec<BandCard>, rows: usize) -> Element {
    let style = format!(
        "display: grid; grid-template-columns: repeat({GRID_COLUMNS}, 1fr); grid-template-rows: repeat({rows}, 1fr);"
    );

    rsx! {
        div { class: "bingo-grid", style: "{style}", "data-testid": "bingo-grid",
            for card in cards {
                BandCardView { key: "{card.index}", card }
            }
        }
    }
}
