//! Bingo card state store

use bingo_common::LoadState;
use dioxus::prelude::*;

/// State for the bingo view
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct BingoState {
    /// Latest state published by the bands provider
    pub load_state: LoadState,
}
