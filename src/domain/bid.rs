//! Bid lists and the ranked two-column bid table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Depth of the placeholder bid lists used by the fallback view.
pub const FALLBACK_DEPTH: usize = 5;

/// Marker rendered for a missing sell bid.
pub const EMPTY_CELL: &str = "";

/// An order record as returned by the order-book endpoints.
///
/// Only the price is consumed; other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderQuote {
    pub price: Decimal,
}

impl OrderQuote {
    #[must_use]
    pub const fn new(price: Decimal) -> Self {
        Self { price }
    }
}

/// Prices for one side of a property's book, best first as delivered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BidList(Vec<Decimal>);

impl BidList {
    #[must_use]
    pub fn new(prices: Vec<Decimal>) -> Self {
        Self(prices)
    }

    /// Project order records to their prices, preserving source order.
    #[must_use]
    pub fn from_orders(orders: &[OrderQuote]) -> Self {
        Self(orders.iter().map(|order| order.price).collect())
    }

    /// Five zero prices.
    #[must_use]
    pub fn fallback() -> Self {
        Self(vec![Decimal::ZERO; FALLBACK_DEPTH])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<Decimal> {
        self.0.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Decimal] {
        &self.0
    }
}

impl From<Vec<Decimal>> for BidList {
    fn from(prices: Vec<Decimal>) -> Self {
        Self(prices)
    }
}

/// One row of the bid table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BidRow {
    /// 1-based rank.
    pub rank: usize,
    pub buy: Decimal,
    pub sell: Option<Decimal>,
}

impl BidRow {
    #[must_use]
    pub fn buy_cell(&self) -> String {
        self.buy.to_string()
    }

    #[must_use]
    pub fn sell_cell(&self) -> String {
        self.sell
            .map_or_else(|| EMPTY_CELL.to_string(), |price| price.to_string())
    }
}

/// Buy and sell lists paired by position.
///
/// The buy list drives iteration. No sorting happens here; both lists are
/// trusted to already be in ranked order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BidTable {
    rows: Vec<BidRow>,
}

impl BidTable {
    #[must_use]
    pub fn new(buy: &BidList, sell: &BidList) -> Self {
        let rows = buy
            .iter()
            .enumerate()
            .map(|(index, price)| BidRow {
                rank: index + 1,
                buy: price,
                sell: sell.get(index),
            })
            .collect();
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[BidRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
