//! Handler for the `order` command.

use dialoguer::{theme::ColorfulTheme, Confirm};
use serde_json::json;

use crate::adapter::inbound::cli::command::OrderArgs;
use crate::adapter::inbound::cli::output;
use crate::config::Config;
use crate::domain::{OrderSide, PropertyId};
use crate::error::{Error, Result};

pub async fn execute(config: &Config, args: &OrderArgs) -> Result<()> {
    let id = PropertyId::parse(Some(&args.property_id))
        .ok_or_else(|| Error::Input("property id is empty".into()))?;
    let view = super::view(config)?;

    let spinner = output::spinner("Loading property...");
    view.navigate(Some(id.clone())).await;
    if view.state().is_ready() {
        output::spinner_success(&spinner, &format!("Loaded property {id}"));
    } else {
        output::spinner_warn(&spinner, "Live data unavailable");
    }

    let ticket = match (OrderSide::from(args.side), args.limit) {
        (OrderSide::Buy, None) => view.market_buy(),
        (OrderSide::Buy, Some(amount)) => view.limit_buy(amount),
        (OrderSide::Sell, None) => view.market_sell(),
        (OrderSide::Sell, Some(amount)) => view.limit_sell(amount),
    };
    let amount = ticket.bid_amount.clone().unwrap_or_default();

    output::field("Order", ticket.label());
    output::field("Property", &id);
    output::field("Price", &amount);

    if !args.yes {
        if output::is_json() {
            return Err(Error::Input(
                "confirmation required; pass --yes in JSON mode".into(),
            ));
        }
        let proceed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("Place {} for property {id} at {amount}?", ticket.label()))
            .default(false)
            .interact()?;
        if !proceed {
            output::note("Order not placed.");
            return Ok(());
        }
    }

    let receipt = view.submit(&ticket).await?;
    if output::is_json() {
        output::json_output(json!({
            "command": "order",
            "ticket": ticket,
            "message": receipt.message,
        }));
    } else {
        output::success(&format!("{} placed: {}", ticket.label(), receipt.message));
    }
    Ok(())
}
