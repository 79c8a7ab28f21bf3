use std::process::ExitCode;

use clap::Parser;
use proptrade::adapter::inbound::cli::{self, command::Cli, diagnostic, output};
use proptrade::config::Config;
use tracing::{debug, error};

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(output::OutputConfig::new(cli.json, cli.quiet));

    let mut config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            match diagnostic::for_config_error(&cli.config, &err) {
                Some(report) => eprintln!("{:?}", miette::Report::new(report)),
                None => output::error(&format!("Failed to load config: {err}")),
            }
            return ExitCode::FAILURE;
        }
    };

    if let Some(level) = cli::verbosity_level(cli.verbose) {
        config.logging.level = level.to_string();
    }
    config.init_logging();
    debug!(config = %cli.config.display(), base_url = %config.api.base_url, "proptrade starting");

    match cli::run(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Command failed");
            output::error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}
