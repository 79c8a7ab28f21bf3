//! Watchlist mutation port.

use async_trait::async_trait;

use crate::domain::{UserId, WatchlistReceipt, WatchlistUpdate};
use crate::error::Result;

/// Applies add/remove mutations to a user's watchlist.
#[async_trait]
pub trait WatchlistGateway: Send + Sync {
    /// Send a single mutation. Implementations must not retry.
    async fn update(&self, user: &UserId, update: &WatchlistUpdate) -> Result<WatchlistReceipt>;
}
