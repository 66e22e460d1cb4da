//! Shared UI components

pub mod band_card;
pub mod bingo;
pub mod error_banner;
pub mod helpers;
pub mod icons;

pub use band_card::BandCardView;
pub use bingo::BingoView;
pub use error_banner::ErrorBanner;
pub use helpers::{LoadingSpinner, PageContainer};
pub use icons::AlertTriangleIcon;
