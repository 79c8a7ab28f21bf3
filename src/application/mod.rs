//! Application services: loading, watchlist control and page composition.

pub mod catalogue;
pub mod loader;
pub mod settle;
pub mod view;
pub mod watchlist;

pub use catalogue::Catalogue;
pub use loader::{resolve, PropertyDataLoader, Resolution};
pub use settle::settle_all;
pub use view::{LoadToken, PropertyView};
pub use watchlist::{ConfirmOutcome, WatchlistController};
