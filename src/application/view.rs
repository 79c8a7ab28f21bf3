//! The property detail page: load state, bid table, trading and watchlist
//! entry points.

use std::sync::Arc;

use parking_lot::Mutex;
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::application::loader::PropertyDataLoader;
use crate::application::watchlist::{ConfirmOutcome, WatchlistController};
use crate::domain::{
    BidTable, ConfirmationPrompt, OrderKind, OrderReceipt, OrderSide, OrderTicket, PropertyId,
    UserId, ViewState,
};
use crate::error::{Error, Result, WatchlistError};
use crate::port::{OrderGateway, PropertySource, WatchlistGateway};

/// Identifies one load so that superseded results can be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadToken {
    generation: u64,
    property_id: Option<PropertyId>,
}

impl LoadToken {
    #[must_use]
    pub fn property_id(&self) -> Option<&PropertyId> {
        self.property_id.as_ref()
    }
}

#[derive(Debug)]
struct Page {
    generation: u64,
    property_id: Option<PropertyId>,
    state: ViewState,
}

pub struct PropertyView {
    loader: PropertyDataLoader,
    watchlist: WatchlistController,
    orders: Arc<dyn OrderGateway>,
    page: Mutex<Page>,
}

impl PropertyView {
    #[must_use]
    pub fn new(
        loader: PropertyDataLoader,
        watchlist: WatchlistController,
        orders: Arc<dyn OrderGateway>,
    ) -> Self {
        Self {
            loader,
            watchlist,
            orders,
            page: Mutex::new(Page {
                generation: 0,
                property_id: None,
                state: ViewState::Loading,
            }),
        }
    }

    /// Wire a view against a single API implementing every port.
    #[must_use]
    pub fn connect<A>(api: Arc<A>, user: UserId, cache: bool) -> Self
    where
        A: PropertySource + WatchlistGateway + OrderGateway + 'static,
    {
        let mut loader = PropertyDataLoader::new(api.clone());
        if cache {
            loader = loader.with_cache();
        }
        let watchlist = WatchlistController::new(api.clone(), user);
        Self::new(loader, watchlist, api)
    }

    /// Reset to `Loading` for `property_id` and supersede any load in flight.
    pub fn begin(&self, property_id: Option<PropertyId>) -> LoadToken {
        let mut page = self.page.lock();
        page.generation += 1;
        page.property_id = property_id.clone();
        page.state = ViewState::Loading;
        LoadToken {
            generation: page.generation,
            property_id,
        }
    }

    /// Commit a load result if `token` is still the latest load.
    pub fn commit(&self, token: &LoadToken, state: ViewState) -> bool {
        let mut page = self.page.lock();
        if page.generation != token.generation {
            debug!(
                property_id = ?token.property_id,
                "Discarding result for superseded property"
            );
            return false;
        }
        info!(property_id = ?token.property_id, state = state.label(), "Property view updated");
        page.state = state;
        true
    }

    /// Show `property_id`, returning whether this load's result was kept.
    pub async fn navigate(&self, property_id: Option<PropertyId>) -> bool {
        let token = self.begin(property_id);
        let state = self.loader.load(token.property_id()).await;
        self.commit(&token, state)
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.page.lock().state.clone()
    }

    #[must_use]
    pub fn property_id(&self) -> Option<PropertyId> {
        self.page.lock().property_id.clone()
    }

    #[must_use]
    pub fn table(&self) -> Option<BidTable> {
        self.page.lock().state.table()
    }

    #[must_use]
    pub fn user(&self) -> &UserId {
        self.watchlist.user()
    }

    // ---------------------------------------------------------------------
    // Trading entry points
    // ---------------------------------------------------------------------

    fn ticket(&self, side: OrderSide, kind: OrderKind, bid_amount: Option<String>) -> OrderTicket {
        OrderTicket {
            user_id: self.user().clone(),
            property_id: self.property_id(),
            side,
            kind,
            bid_amount,
        }
    }

    fn last_traded(&self) -> Option<String> {
        let page = self.page.lock();
        page.state.property().map(|property| property.ltp.clone())
    }

    /// Buy at the last traded price.
    #[must_use]
    pub fn market_buy(&self) -> OrderTicket {
        self.ticket(OrderSide::Buy, OrderKind::Market, self.last_traded())
    }

    #[must_use]
    pub fn limit_buy(&self, amount: Decimal) -> OrderTicket {
        self.ticket(OrderSide::Buy, OrderKind::Limit, Some(amount.to_string()))
    }

    /// Sell at the last traded price.
    #[must_use]
    pub fn market_sell(&self) -> OrderTicket {
        self.ticket(OrderSide::Sell, OrderKind::Market, self.last_traded())
    }

    #[must_use]
    pub fn limit_sell(&self, amount: Decimal) -> OrderTicket {
        self.ticket(OrderSide::Sell, OrderKind::Limit, Some(amount.to_string()))
    }

    /// Hand a ticket to the order gateway.
    pub async fn submit(&self, ticket: &OrderTicket) -> Result<OrderReceipt> {
        if ticket.property_id.is_none() {
            return Err(Error::Input("no property selected".into()));
        }
        match ticket.bid_amount.as_deref() {
            Some(amount) if amount.parse::<Decimal>().is_ok() => {}
            Some(amount) => {
                return Err(Error::Input(format!("bid amount is not a price: {amount}")));
            }
            None => return Err(Error::Input("order has no bid amount".into())),
        }
        self.orders.submit(ticket).await
    }

    // ---------------------------------------------------------------------
    // Watchlist entry points
    // ---------------------------------------------------------------------

    fn current_id(&self) -> std::result::Result<PropertyId, WatchlistError> {
        self.property_id().ok_or(WatchlistError::MissingIdentifier)
    }

    pub fn add_to_watchlist(&self) -> std::result::Result<ConfirmationPrompt, WatchlistError> {
        self.watchlist.request_add(self.current_id()?)
    }

    pub fn remove_from_watchlist(
        &self,
    ) -> std::result::Result<ConfirmationPrompt, WatchlistError> {
        self.watchlist.request_remove(self.current_id()?)
    }

    pub async fn confirm_watchlist(&self) -> ConfirmOutcome {
        self.watchlist.confirm().await
    }

    pub fn cancel_watchlist(&self) -> bool {
        self.watchlist.cancel()
    }

    #[must_use]
    pub fn prompt(&self) -> ConfirmationPrompt {
        self.watchlist.prompt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WatchlistIntent;
    use crate::testkit::api::{Call, ScriptedApi};
    use crate::testkit::domain::{quotes, record};
    use rust_decimal_macros::dec;

    fn listing(api: ScriptedApi, id: &str, name: &str) -> ScriptedApi {
        api.with_property(id, record(id, name))
            .with_buy(id, quotes(&[dec!(100), dec!(95)]))
            .with_sell(id, quotes(&[dec!(110)]))
    }

    fn view(api: &Arc<ScriptedApi>) -> PropertyView {
        PropertyView::connect(api.clone(), UserId::new("1"), false)
    }

    #[test]
    fn starts_loading() {
        let api = Arc::new(ScriptedApi::new());
        let view = view(&api);
        assert!(view.state().is_loading());
        assert!(view.table().is_none());
    }

    #[tokio::test]
    async fn navigate_to_listed_property_renders_ready_table() {
        let api = Arc::new(listing(ScriptedApi::new(), "42", "Harbor Loft"));
        let view = view(&api);

        assert!(view.navigate(PropertyId::parse(Some("42"))).await);

        let state = view.state();
        assert!(state.is_ready());
        let table = view.table().unwrap();
        let cells: Vec<(String, String)> = table
            .rows()
            .iter()
            .map(|row| (row.buy_cell(), row.sell_cell()))
            .collect();
        assert_eq!(
            cells,
            vec![
                ("100".to_string(), "110".to_string()),
                ("95".to_string(), String::new()),
            ]
        );
    }

    #[tokio::test]
    async fn navigate_without_id_renders_fallback() {
        let api = Arc::new(ScriptedApi::new());
        let view = view(&api);

        assert!(view.navigate(None).await);

        let state = view.state();
        let property = state.property().unwrap();
        assert_eq!(property.name, "Property Title");
        assert_eq!(property.category, "Property Category");
        assert_eq!(property.location, "Property Location");
        assert_eq!(property.ltp, "Property LTP");
        let table = view.table().unwrap();
        assert_eq!(table.len(), 5);
        assert!(table
            .rows()
            .iter()
            .all(|row| row.buy.is_zero() && row.sell == Some(Decimal::ZERO)));
    }

    #[tokio::test]
    async fn later_identifier_wins_over_slow_earlier_load() {
        let api = Arc::new(listing(
            listing(ScriptedApi::new(), "A", "Slow Cottage"),
            "B",
            "Quick Condo",
        ));
        let gate = api.hold_property("A");
        let view = view(&api);

        let (a_committed, b_committed) = tokio::join!(
            view.navigate(PropertyId::parse(Some("A"))),
            async {
                tokio::task::yield_now().await;
                let committed = view.navigate(PropertyId::parse(Some("B"))).await;
                gate.open();
                committed
            }
        );

        assert!(!a_committed);
        assert!(b_committed);
        assert_eq!(view.state().property().unwrap().name, "Quick Condo");
        assert_eq!(view.property_id(), Some(PropertyId::new("B")));
    }

    #[tokio::test]
    async fn stale_fallback_does_not_overwrite_newer_ready_state() {
        let api = Arc::new(
            listing(ScriptedApi::new(), "B", "Quick Condo").fail_property("A", 500),
        );
        let gate = api.hold_property("A");
        let view = view(&api);

        let stale = view.begin(PropertyId::parse(Some("A")));
        let stale_load = view.loader.load(stale.property_id());
        assert!(view.navigate(PropertyId::parse(Some("B"))).await);
        gate.open();
        let stale_state = stale_load.await;

        assert!(stale_state.is_fallback());
        assert!(!view.commit(&stale, stale_state));
        assert!(view.state().is_ready());
    }

    #[tokio::test]
    async fn begin_resets_to_loading() {
        let api = Arc::new(listing(ScriptedApi::new(), "1", "One"));
        let view = view(&api);
        view.navigate(PropertyId::parse(Some("1"))).await;
        view.begin(PropertyId::parse(Some("2")));
        assert!(view.state().is_loading());
    }

    #[tokio::test]
    async fn market_tickets_carry_last_traded_price() {
        let api = Arc::new(listing(ScriptedApi::new(), "42", "Harbor Loft"));
        let view = view(&api);
        view.navigate(PropertyId::parse(Some("42"))).await;

        let buy = view.market_buy();
        assert_eq!(buy.side, OrderSide::Buy);
        assert_eq!(buy.kind, OrderKind::Market);
        assert_eq!(buy.bid_amount.as_deref(), Some("250000"));
        assert_eq!(buy.property_id, Some(PropertyId::new("42")));
        assert_eq!(buy.user_id, UserId::new("1"));

        let sell = view.limit_sell(dec!(260000.50));
        assert_eq!(sell.side, OrderSide::Sell);
        assert_eq!(sell.kind, OrderKind::Limit);
        assert_eq!(sell.bid_amount.as_deref(), Some("260000.50"));
    }

    #[tokio::test]
    async fn submit_forwards_valid_tickets() {
        let api = Arc::new(listing(ScriptedApi::new(), "42", "Harbor Loft"));
        let view = view(&api);
        view.navigate(PropertyId::parse(Some("42"))).await;

        let ticket = view.limit_buy(dec!(99));
        view.submit(&ticket).await.unwrap();

        assert!(api
            .calls()
            .iter()
            .any(|call| matches!(call, Call::Order(t) if *t == ticket)));
    }

    #[tokio::test]
    async fn submit_rejects_fallback_market_orders() {
        let api = Arc::new(ScriptedApi::new());
        let view = view(&api);
        view.navigate(None).await;

        let ticket = view.market_buy();
        assert_eq!(ticket.bid_amount.as_deref(), Some("Property LTP"));
        assert!(matches!(view.submit(&ticket).await, Err(Error::Input(_))));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn watchlist_requires_property_id() {
        let api = Arc::new(ScriptedApi::new());
        let view = view(&api);
        view.navigate(None).await;
        assert_eq!(
            view.add_to_watchlist(),
            Err(WatchlistError::MissingIdentifier)
        );
    }

    #[tokio::test]
    async fn watchlist_round_trip_through_view() {
        let api = Arc::new(listing(ScriptedApi::new(), "42", "Harbor Loft"));
        let view = view(&api);
        view.navigate(PropertyId::parse(Some("42"))).await;

        let prompt = view.add_to_watchlist().unwrap();
        assert_eq!(view.prompt(), prompt);
        assert!(view.cancel_watchlist());
        assert_eq!(view.confirm_watchlist().await, ConfirmOutcome::Ignored);

        view.remove_from_watchlist().unwrap();
        assert!(view.confirm_watchlist().await.is_committed());
        assert!(!view.prompt().open);
        assert_eq!(view.watchlist.intent(), WatchlistIntent::None);
    }
}
