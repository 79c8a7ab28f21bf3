//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the view logic and the trading API.
//! Outbound adapters implement them over HTTP; the testkit implements them
//! in memory.
//!
//! # Available Ports
//!
//! - [`PropertySource`] - Property records, order books and the catalogue
//! - [`WatchlistGateway`] - Watchlist mutations
//! - [`OrderGateway`] - Order submission

pub mod outbound;

pub use outbound::order::OrderGateway;
pub use outbound::property::PropertySource;
pub use outbound::watchlist::WatchlistGateway;
