//! Table rendering for the bid book and the catalogue.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::domain::{BidTable, PropertySummary};

#[derive(Tabled)]
struct BidTableRow {
    #[tabled(rename = "Top buy bids")]
    buy: String,
    #[tabled(rename = "Top sell bids")]
    sell: String,
}

#[derive(Tabled)]
struct ListingRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Details")]
    path: String,
}

/// Two-column table of paired buy/sell bids.
#[must_use]
pub fn bid_table(table: &BidTable) -> String {
    let rows = table.rows().iter().map(|row| BidTableRow {
        buy: row.buy_cell(),
        sell: row.sell_cell(),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

#[must_use]
pub fn catalogue_table(listings: &[PropertySummary]) -> String {
    let rows = listings.iter().map(|listing| ListingRow {
        id: listing.id.to_string(),
        category: listing.category.clone(),
        location: listing.location.clone(),
        price: listing.ltp.clone(),
        path: listing.detail_path(),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}
