//! Property data port.
//!
//! Read-only access to property records, the two sides of a property's
//! order book, and the catalogue listing.

use async_trait::async_trait;

use crate::domain::{OrderQuote, PropertyId, PropertyRecord, PropertySummary};
use crate::error::Result;

/// Source of property and order-book data.
///
/// # Errors
///
/// Every method fails on transport errors and non-success responses. Callers
/// on the detail page collapse all failures into the fallback view.
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Fetch a single property record.
    async fn property(&self, id: &PropertyId) -> Result<PropertyRecord>;

    /// Fetch the buy side of the book, best first.
    async fn buy_orders(&self, id: &PropertyId) -> Result<Vec<OrderQuote>>;

    /// Fetch the sell side of the book, best first.
    async fn sell_orders(&self, id: &PropertyId) -> Result<Vec<OrderQuote>>;

    /// Fetch the catalogue of listed properties.
    async fn catalogue(&self) -> Result<Vec<PropertySummary>>;
}
