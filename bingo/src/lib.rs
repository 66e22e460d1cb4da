//! Band Shirt Bingo - application root
//!
//! Builds the bands provider once and hands it, through `BingoService`, to
//! the view as explicit props.

pub mod service;

use bingo_core::{BandsProvider, Config, SimulatedFetch};
use bingo_ui::BingoView;
use dioxus::prelude::*;
use service::BingoService;
use std::sync::Arc;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let service = use_hook(|| {
        let config = Config::load();
        let provider = BandsProvider::new(Arc::new(SimulatedFetch::from_config(&config)));
        let service = BingoService::new(provider);
        service.start_subscriptions();
        service
    });
    let state = service.state;

    rsx! {
        document::Title { "Band Shirt Bingo" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "app",
            BingoView { state, on_retry: move |_| service.retry() }
        }
    }
}
