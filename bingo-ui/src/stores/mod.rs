//! Store types for UI state management

pub mod bingo;

pub use bingo::*;
