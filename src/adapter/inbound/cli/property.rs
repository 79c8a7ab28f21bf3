//! Handler for the `show` command.

use serde_json::json;

use crate::adapter::inbound::cli::{output, render};
use crate::config::Config;
use crate::domain::{PropertyId, ViewState};
use crate::error::Result;

pub async fn execute(config: &Config, property_id: Option<&str>) -> Result<()> {
    let view = super::view(config)?;
    let property_id = PropertyId::parse(property_id);

    let spinner = output::spinner("Loading property...");
    view.navigate(property_id.clone()).await;
    let state = view.state();
    match (&state, &property_id) {
        (ViewState::Ready { .. }, Some(id)) => {
            output::spinner_success(&spinner, &format!("Loaded property {id}"));
        }
        (_, None) => output::spinner_warn(&spinner, "No property selected, showing placeholder"),
        _ => output::spinner_warn(&spinner, "Live data unavailable, showing placeholder"),
    }

    print_view(&state);
    Ok(())
}

/// Print the property details followed by its bid table.
pub fn print_view(state: &ViewState) {
    let (Some(property), Some(table)) = (state.property(), state.table()) else {
        output::note("Loading...");
        return;
    };

    if output::is_json() {
        output::json_output(json!({
            "command": "show",
            "view": state,
            "table": table,
        }));
        return;
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section(&property.name);
    output::field("Category:", &property.category);
    output::field("Location:", &property.location);
    output::field("Market Order Price:", &property.ltp);
    output::field("Image:", output::muted(property.image_or_default()));
    if !property.description.is_empty() {
        output::section("About");
        output::lines(&property.description);
    }

    output::section("Order book");
    output::lines(&render::bid_table(&table));
}
