//! bingo-ui - UI types and components for Band Shirt Bingo
//!
//! Contains the grid view model, the store, and pure view components.
//! Components never fetch data; state and actions come in as props.

pub mod components;
pub mod grid;
pub mod stores;

pub use components::*;
pub use grid::{grid_view, BandCard, GridView};
