//! Property catalogue for the listing page.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::PropertySummary;
use crate::port::PropertySource;

pub struct Catalogue {
    source: Arc<dyn PropertySource>,
}

impl Catalogue {
    #[must_use]
    pub fn new(source: Arc<dyn PropertySource>) -> Self {
        Self { source }
    }

    /// Listed properties, or the featured listings when none can be fetched.
    pub async fn listings(&self) -> Vec<PropertySummary> {
        match self.source.catalogue().await {
            Ok(listings) if !listings.is_empty() => {
                debug!(count = listings.len(), "Fetched catalogue");
                listings
            }
            Ok(_) => {
                debug!("Catalogue is empty, showing featured listings");
                PropertySummary::featured()
            }
            Err(err) => {
                warn!(error = %err, "Failed to fetch catalogue, showing featured listings");
                PropertySummary::featured()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PropertyId;
    use crate::testkit::api::ScriptedApi;

    fn summary(id: &str) -> PropertySummary {
        PropertySummary {
            id: PropertyId::new(id),
            image: None,
            category: "Townhouse".into(),
            location: "Denver".into(),
            ltp: "$610,000".into(),
        }
    }

    #[tokio::test]
    async fn returns_fetched_listings() {
        let api = Arc::new(ScriptedApi::new().with_catalogue(vec![summary("11")]));
        let listings = Catalogue::new(api).listings().await;
        assert_eq!(listings, vec![summary("11")]);
    }

    #[tokio::test]
    async fn failure_falls_back_to_featured() {
        let api = Arc::new(ScriptedApi::new().fail_catalogue(502));
        let listings = Catalogue::new(api).listings().await;
        assert_eq!(listings, PropertySummary::featured());
    }

    #[tokio::test]
    async fn empty_catalogue_falls_back_to_featured() {
        let api = Arc::new(ScriptedApi::new().with_catalogue(Vec::new()));
        let listings = Catalogue::new(api).listings().await;
        assert_eq!(listings.len(), 5);
    }
}
