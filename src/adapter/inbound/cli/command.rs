//! Command-line interface definitions.
//!
//! Defines the CLI structure for proptrade using `clap`.

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::config::default_config_path;
use crate::domain::{OrderSide, WatchlistAction};

/// Browse properties, inspect their order books and trade from the terminal
#[derive(Parser, Debug)]
#[command(name = "proptrade")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to the configuration file.
    #[arg(short, long, global = true, default_value_os_t = default_config_path())]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List properties open for trading
    List,

    /// Show a property with its top buy and sell bids
    Show(ShowArgs),

    /// Add or remove a property from your watchlist
    #[command(subcommand)]
    Watch(WatchCommand),

    /// Place a market or limit order
    Order(OrderArgs),
}

/// Arguments for `proptrade show`.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Property to show. Without one, placeholder data is displayed.
    pub property_id: Option<String>,
}

/// Subcommands for `proptrade watch`.
#[derive(Subcommand, Debug)]
pub enum WatchCommand {
    /// Add a property to the watchlist.
    Add(WatchArgs),
    /// Remove a property from the watchlist.
    Remove(WatchArgs),
}

impl WatchCommand {
    #[must_use]
    pub fn action(&self) -> WatchlistAction {
        match self {
            Self::Add(_) => WatchlistAction::Add,
            Self::Remove(_) => WatchlistAction::Remove,
        }
    }

    #[must_use]
    pub fn args(&self) -> &WatchArgs {
        match self {
            Self::Add(args) | Self::Remove(args) => args,
        }
    }
}

#[derive(Parser, Debug)]
pub struct WatchArgs {
    pub property_id: String,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Order side as accepted on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum SideArg {
    Buy,
    Sell,
}

impl From<SideArg> for OrderSide {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Buy => Self::Buy,
            SideArg::Sell => Self::Sell,
        }
    }
}

/// Arguments for `proptrade order`.
#[derive(Parser, Debug)]
pub struct OrderArgs {
    pub side: SideArg,

    pub property_id: String,

    /// Limit price. Without it the order trades at the last traded price.
    #[arg(long)]
    pub limit: Option<Decimal>,

    /// Skip the confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn show_id_is_optional() {
        let cli = Cli::parse_from(["proptrade", "show"]);
        assert!(matches!(cli.command, Commands::Show(ShowArgs { property_id: None })));
    }

    #[test]
    fn parses_watch_remove_with_yes() {
        let cli = Cli::parse_from(["proptrade", "watch", "remove", "42", "--yes"]);
        let Commands::Watch(watch) = cli.command else {
            panic!("expected watch command");
        };
        assert_eq!(watch.action(), WatchlistAction::Remove);
        assert_eq!(watch.args().property_id, "42");
        assert!(watch.args().yes);
    }

    #[test]
    fn parses_limit_order() {
        let cli = Cli::parse_from(["proptrade", "--json", "order", "sell", "3", "--limit", "410000.5"]);
        assert!(cli.json);
        let Commands::Order(order) = cli.command else {
            panic!("expected order command");
        };
        assert!(matches!(order.side, SideArg::Sell));
        assert_eq!(order.limit, Some(dec!(410000.5)));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
