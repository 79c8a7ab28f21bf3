//! Order submission port.

use async_trait::async_trait;

use crate::domain::{OrderReceipt, OrderTicket};
use crate::error::Result;

/// Submits market and limit orders.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn submit(&self, ticket: &OrderTicket) -> Result<OrderReceipt>;
}
