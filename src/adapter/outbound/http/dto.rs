//! Wire types that have no domain counterpart.

use serde::{Deserialize, Serialize};

use crate::domain::{OrderKind, PropertySummary, UserId};

/// Body of `GET /api/property`.
#[derive(Debug, Deserialize)]
pub struct CatalogueResponse {
    #[serde(default)]
    pub properties: Vec<PropertySummary>,
}

/// Body of `POST /api/orders/{side}/{propertyId}`.
#[derive(Debug, Serialize)]
pub struct OrderRequest<'a> {
    pub user_id: &'a UserId,
    pub order_type: OrderKind,
    pub price: &'a str,
}
