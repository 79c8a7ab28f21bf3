//! Proptrade - a terminal client for a fractional real-estate exchange.
//!
//! The crate lists properties, renders a property's detail view with its top
//! buy and sell bids, and lets a user place market or limit orders and manage
//! a watchlist behind a confirmation prompt.
//!
//! # Architecture
//!
//! - [`domain`] - Property records, bid lists and the bid table, view state,
//!   watchlist intents, order tickets
//! - [`port`] - Traits for the trading API (property data, watchlist, orders)
//! - [`application`] - The property loader with its all-or-nothing fallback,
//!   the watchlist controller, and the page-level [`PropertyView`]
//! - [`adapter`] - `reqwest` client for the REST API and the `clap` CLI
//! - [`config`] - TOML configuration and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use proptrade::adapter::outbound::http::HttpTradingApi;
//! use proptrade::application::PropertyView;
//! use proptrade::domain::{PropertyId, UserId};
//!
//! # async fn demo() -> proptrade::error::Result<()> {
//! let api = Arc::new(HttpTradingApi::new("http://localhost:8000")?);
//! let view = PropertyView::connect(api, UserId::new("1"), false);
//! view.navigate(PropertyId::parse(Some("42"))).await;
//! for row in view.table().unwrap_or_default().rows() {
//!     println!("{} | {}", row.buy_cell(), row.sell_cell());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`PropertyView`]: application::PropertyView

pub mod adapter;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
