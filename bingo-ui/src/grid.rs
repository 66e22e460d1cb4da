//! Grid view model - maps a load state to what the page shows
//!
//! Pure and synchronous so it can be tested without a renderer.

use bingo_common::{BandName, LoadState};

/// Page heading
pub const HEADING: &str = "Band Shirt Bingo";

/// Shown while bands are loading
pub const LOADING_MESSAGE: &str = "Loading bands...";

/// Columns on the bingo card
pub const GRID_COLUMNS: usize = 6;

/// One cell of the bingo card
#[derive(Clone, Debug, PartialEq)]
pub struct BandCard {
    /// Position in the band list
    pub index: usize,
    pub row: usize,
    pub column: usize,
    pub name: BandName,
}

/// What the bingo page renders below the heading
#[derive(Clone, Debug, PartialEq)]
pub enum GridView {
    Loading { message: String },
    Failed { message: String },
    Grid { cards: Vec<BandCard>, rows: usize },
}

impl GridView {
    pub fn cards(&self) -> &[BandCard] {
        match self {
            GridView::Grid { cards, .. } => cards,
            _ => &[],
        }
    }
}

/// Build the view for a load state.
///
/// `Idle` renders like `Loading`: the first load starts as soon as the page
/// mounts.
pub fn grid_view(state: &LoadState) -> GridView {
    match state {
        LoadState::Idle | LoadState::Loading => GridView::Loading {
            message: LOADING_MESSAGE.to_string(),
        },
        LoadState::Failure(e) => GridView::Failed {
            message: format!("Failed to load bands: {e}"),
        },
        LoadState::Success(bands) => {
            let cards: Vec<BandCard> = bands
                .iter()
                .enumerate()
                .map(|(index, name)| BandCard {
                    index,
                    row: index / GRID_COLUMNS,
                    column: index % GRID_COLUMNS,
                    name: name.clone(),
                })
                .collect();
            let rows = cards.len().div_ceil(GRID_COLUMNS);
            GridView::Grid { cards, rows }
        }
    }
}
