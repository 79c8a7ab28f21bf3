//! Core types: property records, bid lists, view state,
//! watchlist intents and order tickets.

pub mod bid;
pub mod id;
pub mod order;
pub mod property;
pub mod view;
pub mod watchlist;

pub use bid::{BidList, BidRow, BidTable, OrderQuote, EMPTY_CELL, FALLBACK_DEPTH};
pub use id::{PropertyId, UserId};
pub use order::{OrderKind, OrderReceipt, OrderSide, OrderTicket};
pub use property::{PropertyRecord, PropertySummary, PLACEHOLDER_IMAGE};
pub use view::ViewState;
pub use watchlist::{
    ConfirmationPrompt, WatchlistAction, WatchlistIntent, WatchlistReceipt, WatchlistUpdate,
};
