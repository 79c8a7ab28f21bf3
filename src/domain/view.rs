//! Page-level view state for a property detail page.

use serde::Serialize;

use super::bid::{BidList, BidTable};
use super::property::PropertyRecord;

/// Exactly one of these holds for the page at a time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    Loading,
    /// All three resources were fetched successfully.
    Ready {
        property: PropertyRecord,
        buy: BidList,
        sell: BidList,
    },
    /// Live data could not be fully assembled.
    Fallback {
        property: PropertyRecord,
        buy: BidList,
        sell: BidList,
    },
}

impl ViewState {
    #[must_use]
    pub fn ready(property: PropertyRecord, buy: BidList, sell: BidList) -> Self {
        Self::Ready {
            property,
            buy,
            sell,
        }
    }

    #[must_use]
    pub fn fallback() -> Self {
        Self::Fallback {
            property: PropertyRecord::fallback(),
            buy: BidList::fallback(),
            sell: BidList::fallback(),
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready { .. })
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    #[must_use]
    pub const fn property(&self) -> Option<&PropertyRecord> {
        match self {
            Self::Loading => None,
            Self::Ready { property, .. } | Self::Fallback { property, .. } => Some(property),
        }
    }

    /// Buy and sell lists, in that order.
    #[must_use]
    pub const fn bids(&self) -> Option<(&BidList, &BidList)> {
        match self {
            Self::Loading => None,
            Self::Ready { buy, sell, .. } | Self::Fallback { buy, sell, .. } => Some((buy, sell)),
        }
    }

    /// Bid table for whichever lists this state carries.
    #[must_use]
    pub fn table(&self) -> Option<BidTable> {
        self.bids().map(|(buy, sell)| BidTable::new(buy, sell))
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready { .. } => "ready",
            Self::Fallback { .. } => "fallback",
        }
    }
}
