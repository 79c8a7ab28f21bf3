//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`api`] - [`ScriptedApi`](api::ScriptedApi), an in-memory implementation
//!   of every outbound port with per-property gates for ordering tests.
//! - [`domain`] - Builders for property records and order quotes.
//! - [`config`] - Canonical test configurations.

pub mod api;
pub mod config;
pub mod domain;
