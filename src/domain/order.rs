//! Order tickets handed to the order-submission collaborators.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::{PropertyId, UserId};

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

impl OrderSide {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Buy => "buy",
            Self::Sell => "sell",
        }
    }
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Market orders trade at the last traded price; limit orders name a price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    Market,
    Limit,
}

impl OrderKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Market => "market",
            Self::Limit => "limit",
        }
    }
}

impl fmt::Display for OrderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything an order button receives: `(userId, propertyId, bidAmount?)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderTicket {
    pub user_id: UserId,
    pub property_id: Option<PropertyId>,
    pub side: OrderSide,
    pub kind: OrderKind,
    pub bid_amount: Option<String>,
}

impl OrderTicket {
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} {}", self.kind, self.side)
    }
}

/// Reply from the order endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_label_reads_kind_then_side() {
        let ticket = OrderTicket {
            user_id: UserId::new("1"),
            property_id: Some(PropertyId::new("3")),
            side: OrderSide::Sell,
            kind: OrderKind::Limit,
            bid_amount: Some("410000".into()),
        };
        assert_eq!(ticket.label(), "limit sell");
    }
}
