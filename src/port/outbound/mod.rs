//! Outbound ports (driven side): interfaces implemented by outbound adapters.

pub mod order;
pub mod property;
pub mod watchlist;
