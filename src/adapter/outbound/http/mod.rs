//! REST client for the property trading API.

mod client;
mod dto;

pub use client::HttpTradingApi;
