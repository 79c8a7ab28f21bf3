//! Builders for domain primitives used across tests.

use rust_decimal::Decimal;

use crate::domain::{OrderQuote, PropertyId, PropertyRecord};

/// A fully populated property record with `ltp` of `250000`.
pub fn record(id: &str, name: &str) -> PropertyRecord {
    PropertyRecord {
        id: Some(PropertyId::new(id)),
        name: name.to_string(),
        category: "Apartment".to_string(),
        location: "New York".to_string(),
        ltp: "250000".to_string(),
        description: format!("{name}, freshly listed."),
        image: None,
    }
}

/// Order quotes with the given prices, in order.
pub fn quotes(prices: &[Decimal]) -> Vec<OrderQuote> {
    prices.iter().copied().map(OrderQuote::new).collect()
}
