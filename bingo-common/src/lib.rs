mod band;
mod catalog;
mod load_state;

pub use band::{BandList, BandName, BandsResponse};
pub use catalog::{catalog, CATALOG};
pub use load_state::{FetchError, FetchOutcome, LoadMachine, LoadState, RequestId, Resolution};
