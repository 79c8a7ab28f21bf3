//! HTTP implementation of the property, watchlist and order ports.
//!
//! Endpoints, all relative to the configured base URL:
//!
//! - `GET  /api/properties/{id}`
//! - `GET  /api/orders/buy/{id}` and `GET /api/orders/sell/{id}`
//! - `GET  /api/property` (catalogue)
//! - `PUT  /api/watchlist/{userId}`
//! - `POST /api/orders/{side}/{id}`
//!
//! Reads retry timeouts and connect errors; non-success statuses are never
//! retried. Writes are sent exactly once.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};
use url::Url;

use super::dto::{CatalogueResponse, OrderRequest};
use crate::config::ApiConfig;
use crate::domain::{
    OrderQuote, OrderReceipt, OrderTicket, PropertyId, PropertyRecord, PropertySummary, UserId,
    WatchlistReceipt, WatchlistUpdate,
};
use crate::error::{Error, Result};
use crate::port::{OrderGateway, PropertySource, WatchlistGateway};

/// HTTP client for the trading API.
pub struct HttpTradingApi {
    http: HttpClient,
    base_url: Url,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl HttpTradingApi {
    /// Create a client with default timeouts and no retries.
    #[allow(clippy::result_large_err)]
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: HttpClient::new(),
            base_url: Url::parse(base_url)?,
            retry_max_attempts: 1,
            retry_backoff_ms: 0,
        })
    }

    #[allow(clippy::result_large_err)]
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Ok(Self {
            http,
            base_url: Url::parse(&config.base_url)?,
            retry_max_attempts: config.retry_max_attempts,
            retry_backoff_ms: config.retry_backoff_ms,
        })
    }

    /// Resolve path segments against the base URL, percent-encoding each.
    #[allow(clippy::result_large_err)]
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| Error::Input(format!("base URL cannot take a path: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_with_retry<T>(&self, url: Url) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            let response = match self.http.get(url.clone()).send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            let response = Self::check_status(response)?;
            return Ok(response.json::<T>().await?);
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }

    #[allow(clippy::result_large_err)]
    fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(Error::Status {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }

    /// Turn a failed write into [`Error::Rejected`], keeping the error body.
    async fn rejection(response: Response) -> Error {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(json) => json.to_string(),
            Err(_) => body,
        };
        Error::Rejected(format!("{}: {}", status.as_u16(), detail))
    }
}

#[async_trait]
impl PropertySource for HttpTradingApi {
    async fn property(&self, id: &PropertyId) -> Result<PropertyRecord> {
        let url = self.endpoint(&["api", "properties", id.as_str()])?;
        debug!(url = %url, "Fetching property");
        self.get_with_retry(url).await
    }

    async fn buy_orders(&self, id: &PropertyId) -> Result<Vec<OrderQuote>> {
        let url = self.endpoint(&["api", "orders", "buy", id.as_str()])?;
        debug!(url = %url, "Fetching buy orders");
        self.get_with_retry(url).await
    }

    async fn sell_orders(&self, id: &PropertyId) -> Result<Vec<OrderQuote>> {
        let url = self.endpoint(&["api", "orders", "sell", id.as_str()])?;
        debug!(url = %url, "Fetching sell orders");
        self.get_with_retry(url).await
    }

    async fn catalogue(&self) -> Result<Vec<PropertySummary>> {
        let url = self.endpoint(&["api", "property"])?;
        info!(url = %url, "Fetching catalogue");
        let response: CatalogueResponse = self.get_with_retry(url).await?;
        Ok(response.properties)
    }
}

#[async_trait]
impl WatchlistGateway for HttpTradingApi {
    async fn update(&self, user: &UserId, update: &WatchlistUpdate) -> Result<WatchlistReceipt> {
        let url = self.endpoint(&["api", "watchlist", user.as_str()])?;
        info!(url = %url, action = %update.action, property_id = %update.property_id, "Updating watchlist");

        let response = self.http.put(url).json(update).send().await?;
        if !response.status().is_success() {
            let err = Self::rejection(response).await;
            error!(error = %err, "Watchlist update rejected");
            return Err(err);
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl OrderGateway for HttpTradingApi {
    async fn submit(&self, ticket: &OrderTicket) -> Result<OrderReceipt> {
        let property_id = ticket
            .property_id
            .as_ref()
            .ok_or_else(|| Error::Input("no property selected".into()))?;
        let price = ticket
            .bid_amount
            .as_deref()
            .ok_or_else(|| Error::Input("order has no bid amount".into()))?;
        let url = self.endpoint(&["api", "orders", ticket.side.as_str(), property_id.as_str()])?;
        info!(url = %url, order = %ticket.label(), price, "Submitting order");

        let body = OrderRequest {
            user_id: &ticket.user_id,
            order_type: ticket.kind,
            price,
        };
        let response = self.http.post(url).json(&body).send().await?;
        if !response.status().is_success() {
            let err = Self::rejection(response).await;
            error!(error = %err, "Order rejected");
            return Err(err);
        }
        Ok(response.json().await?)
    }
}
