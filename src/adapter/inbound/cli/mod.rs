//! CLI module graph and command dispatch.

pub mod catalogue;
pub mod command;
pub mod diagnostic;
pub mod order;
pub mod output;
pub mod property;
pub mod render;
pub mod watchlist;

use std::sync::Arc;

use crate::adapter::outbound::http::HttpTradingApi;
use crate::application::PropertyView;
use crate::config::Config;
use crate::domain::UserId;
use crate::error::Result;
use command::Commands;

/// Execute a parsed command.
pub async fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::List => catalogue::execute(config).await,
        Commands::Show(args) => property::execute(config, args.property_id.as_deref()).await,
        Commands::Watch(watch) => {
            let args = watch.args();
            watchlist::execute(config, watch.action(), &args.property_id, args.yes).await
        }
        Commands::Order(args) => order::execute(config, &args).await,
    }
}

/// Build an HTTP-backed client from configuration.
#[allow(clippy::result_large_err)]
pub(crate) fn api(config: &Config) -> Result<Arc<HttpTradingApi>> {
    Ok(Arc::new(HttpTradingApi::from_config(&config.api)?))
}

/// Build a property view backed by the HTTP client.
#[allow(clippy::result_large_err)]
pub(crate) fn view(config: &Config) -> Result<PropertyView> {
    Ok(PropertyView::connect(
        api(config)?,
        UserId::new(config.api.user_id.clone()),
        config.api.cache,
    ))
}

/// Log level implied by repeated `-v` flags, if any.
#[must_use]
pub fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
