//! Property data loading with an all-or-nothing fallback policy.
//!
//! A property page needs three resources: the property record and both sides
//! of its order book. They are fetched concurrently and joined; if any one of
//! them fails, the page falls back to fixed placeholder data instead of
//! showing a partial view.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::application::settle::settle_all;
use crate::domain::{BidList, PropertyId, ViewState};
use crate::error::{LoadError, Result};
use crate::port::PropertySource;

/// Decision taken before any network call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Show `view` without fetching.
    Fallback { view: ViewState, reason: LoadError },
    /// Fetch live data for this identifier.
    Fetch(PropertyId),
}

impl Resolution {
    /// The fallback decision for `reason`.
    #[must_use]
    pub fn fallback(reason: LoadError) -> Self {
        Self::Fallback {
            view: ViewState::fallback(),
            reason,
        }
    }
}

/// Decide how a property page should be populated.
#[must_use]
pub fn resolve(id: Option<&PropertyId>) -> Resolution {
    match id {
        Some(id) => Resolution::Fetch(id.clone()),
        None => Resolution::fallback(LoadError::MissingIdentifier),
    }
}

/// Loads the consolidated view model for a property page.
pub struct PropertyDataLoader {
    source: Arc<dyn PropertySource>,
    /// Ready views by property. Fallbacks are never stored.
    cache: Option<Mutex<HashMap<PropertyId, ViewState>>>,
}

impl PropertyDataLoader {
    #[must_use]
    pub fn new(source: Arc<dyn PropertySource>) -> Self {
        Self {
            source,
            cache: None,
        }
    }

    /// Reuse successfully loaded views for repeat visits to the same property.
    #[must_use]
    pub fn with_cache(mut self) -> Self {
        self.cache = Some(Mutex::new(HashMap::new()));
        self
    }

    /// Produce the terminal view state for `id`.
    ///
    /// Never fails: any error collapses into [`ViewState::fallback`].
    pub async fn load(&self, id: Option<&PropertyId>) -> ViewState {
        let id = match resolve(id) {
            Resolution::Fetch(id) => id,
            Resolution::Fallback { view, reason } => {
                debug!(reason = %reason, "Using fallback property view");
                return view;
            }
        };

        if let Some(cached) = self.cached(&id) {
            debug!(property_id = %id, "Serving property view from cache");
            return cached;
        }

        match self.fetch(&id).await {
            Ok(state) => {
                if let Some(cache) = &self.cache {
                    cache.lock().insert(id, state.clone());
                }
                state
            }
            Err(err) => {
                warn!(
                    property_id = %id,
                    error = %err.as_load_error(),
                    "Failed to load property, using fallback"
                );
                ViewState::fallback()
            }
        }
    }

    async fn fetch(&self, id: &PropertyId) -> Result<ViewState> {
        info!(property_id = %id, "Fetching property and order book");

        let (property, buy, sell) = settle_all(
            self.source.property(id),
            self.source.buy_orders(id),
            self.source.sell_orders(id),
        )
        .await?;

        let buy = BidList::from_orders(&buy);
        let sell = BidList::from_orders(&sell);
        debug!(
            property_id = %id,
            buy_depth = buy.len(),
            sell_depth = sell.len(),
            "Loaded property"
        );

        Ok(ViewState::ready(property, buy, sell))
    }

    fn cached(&self, id: &PropertyId) -> Option<ViewState> {
        self.cache.as_ref()?.lock().get(id).cloned()
    }
}
