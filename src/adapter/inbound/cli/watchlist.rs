//! Handler for the `watch` command.
//!
//! Stages the action, puts the confirmation prompt to the user and commits
//! or cancels accordingly.

use dialoguer::{theme::ColorfulTheme, Confirm};
use serde_json::json;

use crate::adapter::inbound::cli::output;
use crate::application::ConfirmOutcome;
use crate::config::Config;
use crate::domain::{ConfirmationPrompt, PropertyId, WatchlistAction};
use crate::error::{Error, Result, WatchlistError};

pub async fn execute(
    config: &Config,
    action: WatchlistAction,
    property_id: &str,
    yes: bool,
) -> Result<()> {
    let id = PropertyId::parse(Some(property_id)).ok_or(WatchlistError::MissingIdentifier)?;
    let view = super::view(config)?;

    view.navigate(Some(id.clone())).await;
    let state = view.state();
    if let (true, Some(property)) = (state.is_ready(), state.property()) {
        output::field("Property", format!("{} ({id})", property.name));
    }

    let prompt = match action {
        WatchlistAction::Add => view.add_to_watchlist()?,
        WatchlistAction::Remove => view.remove_from_watchlist()?,
    };

    if !confirm(&prompt, yes)? {
        view.cancel_watchlist();
        output::note("Cancelled, watchlist unchanged.");
        return Ok(());
    }

    match view.confirm_watchlist().await {
        ConfirmOutcome::Committed(receipt) => {
            if output::is_json() {
                output::json_output(json!({
                    "command": "watch",
                    "action": action,
                    "property_id": id,
                    "message": receipt.message,
                }));
            } else {
                let message = if receipt.message.is_empty() {
                    format!("Watchlist {action} succeeded")
                } else {
                    receipt.message
                };
                output::success(&message);
            }
            Ok(())
        }
        ConfirmOutcome::Failed(reason) => {
            output::hint(&format!(
                "run {} again to retry",
                output::highlight(format!("proptrade watch {action} {id}"))
            ));
            Err(Error::Rejected(reason))
        }
        ConfirmOutcome::Ignored => {
            output::warning("Nothing to confirm.");
            Ok(())
        }
    }
}

/// Ask the user to confirm, unless `yes` pre-approves.
fn confirm(prompt: &ConfirmationPrompt, yes: bool) -> Result<bool> {
    if yes {
        return Ok(true);
    }
    if output::is_json() {
        return Err(Error::Input(
            "confirmation required; pass --yes in JSON mode".into(),
        ));
    }
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(&prompt.message)
        .default(false)
        .interact()?)
}
