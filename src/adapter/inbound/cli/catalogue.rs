//! Handler for the `list` command.

use serde_json::json;

use crate::adapter::inbound::cli::{output, render};
use crate::application::Catalogue;
use crate::config::Config;
use crate::error::Result;

pub async fn execute(config: &Config) -> Result<()> {
    let catalogue = Catalogue::new(super::api(config)?);

    let spinner = output::spinner("Fetching properties...");
    let listings = catalogue.listings().await;
    output::spinner_success(&spinner, &format!("{} properties", listings.len()));

    if output::is_json() {
        output::json_output(json!({
            "command": "list",
            "properties": listings,
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Properties");
    output::lines(&render::catalogue_table(&listings));
    output::hint(&format!(
        "run {} for bids and trading",
        output::highlight("proptrade show <id>")
    ));
    Ok(())
}
