//! In-memory trading API for testing.
//!
//! [`ScriptedApi`] implements [`PropertySource`], [`WatchlistGateway`] and
//! [`OrderGateway`]. Responses are scripted per property; anything not
//! scripted answers with status 404. Every call is recorded in arrival order.
//!
//! Gates hold calls open until released, which lets tests interleave loads
//! deterministically:
//!
//! ```ignore
//! let gate = api.hold_property("A");
//! // ... fetches for "A" now wait ...
//! gate.open();
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::sync::watch;

use crate::domain::{
    OrderQuote, OrderReceipt, OrderTicket, PropertyId, PropertyRecord, PropertySummary, UserId,
    WatchlistReceipt, WatchlistUpdate,
};
use crate::error::{Error, Result};
use crate::port::{OrderGateway, PropertySource, WatchlistGateway};

const WATCHLIST_GATE: &str = "watchlist";

/// A recorded call against the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Property(PropertyId),
    BuyOrders(PropertyId),
    SellOrders(PropertyId),
    Catalogue,
    Watchlist(UserId, WatchlistUpdate),
    Order(OrderTicket),
}

/// Scripted response.
#[derive(Debug, Clone)]
enum Reply<T> {
    Ok(T),
    Status(u16),
    Disconnected,
}

impl<T: Clone> Reply<T> {
    fn to_result(&self, url: &str) -> Result<T> {
        match self {
            Self::Ok(value) => Ok(value.clone()),
            Self::Status(status) => Err(Error::Status {
                status: *status,
                url: url.to_string(),
            }),
            Self::Disconnected => Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "connection refused",
            ))),
        }
    }
}

fn scripted<T: Clone>(
    replies: &Mutex<HashMap<PropertyId, Reply<T>>>,
    id: &PropertyId,
    url: &str,
) -> Result<T> {
    replies
        .lock()
        .get(id)
        .cloned()
        .unwrap_or(Reply::Status(404))
        .to_result(url)
}

/// Releases calls held by [`ScriptedApi::hold_property`] or
/// [`ScriptedApi::hold_watchlist`]. Dropping the gate also releases them.
pub struct Gate(watch::Sender<bool>);

impl Gate {
    pub fn open(&self) {
        let _ = self.0.send(true);
    }
}

#[derive(Default)]
pub struct ScriptedApi {
    properties: Mutex<HashMap<PropertyId, Reply<PropertyRecord>>>,
    buy: Mutex<HashMap<PropertyId, Reply<Vec<OrderQuote>>>>,
    sell: Mutex<HashMap<PropertyId, Reply<Vec<OrderQuote>>>>,
    catalogue: Mutex<Option<Reply<Vec<PropertySummary>>>>,
    watchlist: Mutex<Option<Reply<WatchlistReceipt>>>,
    orders: Mutex<Option<Reply<OrderReceipt>>>,
    gates: Mutex<HashMap<String, watch::Receiver<bool>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(self, id: &str, record: PropertyRecord) -> Self {
        self.properties
            .lock()
            .insert(PropertyId::new(id), Reply::Ok(record));
        self
    }

    pub fn with_buy(self, id: &str, quotes: Vec<OrderQuote>) -> Self {
        self.buy.lock().insert(PropertyId::new(id), Reply::Ok(quotes));
        self
    }

    pub fn with_sell(self, id: &str, quotes: Vec<OrderQuote>) -> Self {
        self.sell.lock().insert(PropertyId::new(id), Reply::Ok(quotes));
        self
    }

    pub fn with_catalogue(self, listings: Vec<PropertySummary>) -> Self {
        *self.catalogue.lock() = Some(Reply::Ok(listings));
        self
    }

    pub fn fail_property(self, id: &str, status: u16) -> Self {
        self.properties
            .lock()
            .insert(PropertyId::new(id), Reply::Status(status));
        self
    }

    pub fn fail_buy(self, id: &str, status: u16) -> Self {
        self.buy
            .lock()
            .insert(PropertyId::new(id), Reply::Status(status));
        self
    }

    pub fn fail_sell(self, id: &str, status: u16) -> Self {
        self.sell
            .lock()
            .insert(PropertyId::new(id), Reply::Status(status));
        self
    }

    /// Make the sell-order fetch fail at the transport level.
    pub fn disconnect_sell(self, id: &str) -> Self {
        self.sell
            .lock()
            .insert(PropertyId::new(id), Reply::Disconnected);
        self
    }

    pub fn fail_catalogue(self, status: u16) -> Self {
        *self.catalogue.lock() = Some(Reply::Status(status));
        self
    }

    pub fn fail_watchlist(self, status: u16) -> Self {
        *self.watchlist.lock() = Some(Reply::Status(status));
        self
    }

    pub fn fail_orders(self, status: u16) -> Self {
        *self.orders.lock() = Some(Reply::Status(status));
        self
    }

    /// Hold every fetch for property `id` until the returned gate opens.
    pub fn hold_property(&self, id: &str) -> Gate {
        self.hold(format!("property:{id}"))
    }

    /// Hold watchlist updates until the returned gate opens.
    pub fn hold_watchlist(&self) -> Gate {
        self.hold(WATCHLIST_GATE.to_string())
    }

    fn hold(&self, key: String) -> Gate {
        let (tx, rx) = watch::channel(false);
        self.gates.lock().insert(key, rx);
        Gate(tx)
    }

    async fn pass(&self, key: &str) {
        let gate = self.gates.lock().get(key).cloned();
        if let Some(mut rx) = gate {
            // A dropped gate releases the call as well.
            let _ = rx.wait_for(|open| *open).await;
        }
    }

    /// Calls received so far, in arrival order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().push(call);
    }
}

#[async_trait]
impl PropertySource for ScriptedApi {
    async fn property(&self, id: &PropertyId) -> Result<PropertyRecord> {
        self.record(Call::Property(id.clone()));
        self.pass(&format!("property:{id}")).await;
        scripted(&self.properties, id, &format!("/api/properties/{id}"))
    }

    async fn buy_orders(&self, id: &PropertyId) -> Result<Vec<OrderQuote>> {
        self.record(Call::BuyOrders(id.clone()));
        self.pass(&format!("property:{id}")).await;
        scripted(&self.buy, id, &format!("/api/orders/buy/{id}"))
    }

    async fn sell_orders(&self, id: &PropertyId) -> Result<Vec<OrderQuote>> {
        self.record(Call::SellOrders(id.clone()));
        self.pass(&format!("property:{id}")).await;
        scripted(&self.sell, id, &format!("/api/orders/sell/{id}"))
    }

    async fn catalogue(&self) -> Result<Vec<PropertySummary>> {
        self.record(Call::Catalogue);
        self.catalogue
            .lock()
            .clone()
            .unwrap_or(Reply::Status(404))
            .to_result("/api/property")
    }
}

#[async_trait]
impl WatchlistGateway for ScriptedApi {
    async fn update(&self, user: &UserId, update: &WatchlistUpdate) -> Result<WatchlistReceipt> {
        self.record(Call::Watchlist(user.clone(), update.clone()));
        self.pass(WATCHLIST_GATE).await;
        self.watchlist
            .lock()
            .clone()
            .unwrap_or_else(|| {
                Reply::Ok(WatchlistReceipt {
                    message: format!("Watchlist updated: {}", update.action),
                })
            })
            .to_result(&format!("/api/watchlist/{user}"))
    }
}

#[async_trait]
impl OrderGateway for ScriptedApi {
    async fn submit(&self, ticket: &OrderTicket) -> Result<OrderReceipt> {
        self.record(Call::Order(ticket.clone()));
        self.orders
            .lock()
            .clone()
            .unwrap_or_else(|| {
                Reply::Ok(OrderReceipt {
                    message: format!("{} order placed", ticket.label()),
                })
            })
            .to_result(&format!("/api/orders/{}", ticket.side))
    }
}
