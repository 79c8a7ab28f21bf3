//! Confirm-before-commit watchlist controller.
//!
//! ```text
//! Idle ──request──▶ Pending ──confirm──▶ Committing ──settled──▶ Idle
//!                     │
//!                     └──cancel──▶ Idle
//! ```
//!
//! The controller is the only writer of the staged intent. Its lock is never
//! held across the mutation request, so a second `confirm` issued while one
//! is in flight observes `Committing` and does nothing.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, error, info};

use crate::domain::{
    ConfirmationPrompt, PropertyId, UserId, WatchlistAction, WatchlistIntent, WatchlistReceipt,
};
use crate::error::WatchlistError;
use crate::port::WatchlistGateway;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Idle,
    Pending(WatchlistIntent),
    Committing(WatchlistIntent),
}

/// Result of [`WatchlistController::confirm`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The mutation was accepted.
    Committed(WatchlistReceipt),
    /// The mutation was sent and failed. It is not retried.
    Failed(String),
    /// Nothing was pending, or another confirmation is in flight.
    Ignored,
}

impl ConfirmOutcome {
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

/// Returns the controller to `Idle` when a commit ends, including when the
/// confirming future is dropped before the request settles.
struct CommitGuard<'a>(&'a Mutex<Phase>);

impl Drop for CommitGuard<'_> {
    fn drop(&mut self) {
        *self.0.lock() = Phase::Idle;
    }
}

pub struct WatchlistController {
    gateway: Arc<dyn WatchlistGateway>,
    user: UserId,
    phase: Mutex<Phase>,
}

impl WatchlistController {
    #[must_use]
    pub fn new(gateway: Arc<dyn WatchlistGateway>, user: UserId) -> Self {
        Self {
            gateway,
            user,
            phase: Mutex::new(Phase::Idle),
        }
    }

    #[must_use]
    pub fn user(&self) -> &UserId {
        &self.user
    }

    /// Stage adding `property_id` and open the confirmation prompt.
    pub fn request_add(
        &self,
        property_id: PropertyId,
    ) -> Result<ConfirmationPrompt, WatchlistError> {
        self.request(WatchlistAction::Add, property_id)
    }

    /// Stage removing `property_id` and open the confirmation prompt.
    pub fn request_remove(
        &self,
        property_id: PropertyId,
    ) -> Result<ConfirmationPrompt, WatchlistError> {
        self.request(WatchlistAction::Remove, property_id)
    }

    fn request(
        &self,
        action: WatchlistAction,
        property_id: PropertyId,
    ) -> Result<ConfirmationPrompt, WatchlistError> {
        let mut phase = self.phase.lock();
        if matches!(*phase, Phase::Committing(_)) {
            debug!(action = %action, property_id = %property_id, "Watchlist busy, request rejected");
            return Err(WatchlistError::Busy);
        }
        debug!(action = %action, property_id = %property_id, "Watchlist action staged");
        *phase = Phase::Pending(WatchlistIntent::pending(action, property_id));
        Ok(ConfirmationPrompt::for_action(action))
    }

    /// Discard the staged intent. Returns whether anything was pending.
    pub fn cancel(&self) -> bool {
        let mut phase = self.phase.lock();
        if let Phase::Pending(intent) = &*phase {
            debug!(action = ?intent.action(), "Watchlist action cancelled");
            *phase = Phase::Idle;
            return true;
        }
        false
    }

    /// Send the staged mutation.
    pub async fn confirm(&self) -> ConfirmOutcome {
        let update = {
            let mut phase = self.phase.lock();
            let Phase::Pending(intent) = &*phase else {
                return ConfirmOutcome::Ignored;
            };
            let intent = intent.clone();
            let Some(update) = intent.update() else {
                *phase = Phase::Idle;
                return ConfirmOutcome::Ignored;
            };
            *phase = Phase::Committing(intent);
            update
        };

        let guard = CommitGuard(&self.phase);
        let result = self.gateway.update(&self.user, &update).await;
        drop(guard);

        match result {
            Ok(receipt) => {
                info!(
                    user_id = %self.user,
                    action = %update.action,
                    property_id = %update.property_id,
                    message = %receipt.message,
                    "Watchlist updated"
                );
                ConfirmOutcome::Committed(receipt)
            }
            Err(err) => {
                error!(
                    user_id = %self.user,
                    action = %update.action,
                    property_id = %update.property_id,
                    error = %err,
                    "Watchlist update failed"
                );
                ConfirmOutcome::Failed(err.to_string())
            }
        }
    }

    /// Currently staged or in-flight intent.
    #[must_use]
    pub fn intent(&self) -> WatchlistIntent {
        match &*self.phase.lock() {
            Phase::Idle => WatchlistIntent::None,
            Phase::Pending(intent) | Phase::Committing(intent) => intent.clone(),
        }
    }

    /// Dialog contents: open only while an intent awaits confirmation.
    #[must_use]
    pub fn prompt(&self) -> ConfirmationPrompt {
        match &*self.phase.lock() {
            Phase::Pending(intent) => intent
                .action()
                .map_or_else(ConfirmationPrompt::closed, ConfirmationPrompt::for_action),
            Phase::Idle | Phase::Committing(_) => ConfirmationPrompt::closed(),
        }
    }

    #[must_use]
    pub fn is_committing(&self) -> bool {
        matches!(*self.phase.lock(), Phase::Committing(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WatchlistUpdate;
    use crate::testkit::api::{Call, ScriptedApi};
    use std::time::Duration;

    fn controller(api: &Arc<ScriptedApi>) -> WatchlistController {
        WatchlistController::new(api.clone(), UserId::new("1"))
    }

    fn watchlist_calls(api: &ScriptedApi) -> Vec<(UserId, WatchlistUpdate)> {
        api.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Watchlist(user, update) => Some((user, update)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn request_opens_prompt_without_network_call() {
        let api = Arc::new(ScriptedApi::new());
        let controller = controller(&api);

        let prompt = controller.request_add(PropertyId::new("42")).unwrap();

        assert!(prompt.open);
        assert_eq!(controller.prompt(), prompt);
        assert_eq!(
            controller.intent(),
            WatchlistIntent::PendingAdd(PropertyId::new("42"))
        );
        assert!(api.calls().is_empty());
    }

    #[test]
    fn cancel_discards_intent() {
        let api = Arc::new(ScriptedApi::new());
        let controller = controller(&api);
        controller.request_remove(PropertyId::new("42")).unwrap();

        assert!(controller.cancel());
        assert_eq!(controller.intent(), WatchlistIntent::None);
        assert!(!controller.prompt().open);
        assert!(!controller.cancel());
        assert!(api.calls().is_empty());
    }

    #[test]
    fn later_request_replaces_pending_one() {
        let api = Arc::new(ScriptedApi::new());
        let controller = controller(&api);
        controller.request_add(PropertyId::new("1")).unwrap();
        controller.request_remove(PropertyId::new("2")).unwrap();
        assert_eq!(
            controller.intent(),
            WatchlistIntent::PendingRemove(PropertyId::new("2"))
        );
    }

    #[tokio::test]
    async fn confirm_sends_single_update_and_returns_to_idle() {
        let api = Arc::new(ScriptedApi::new());
        let controller = controller(&api);
        controller.request_remove(PropertyId::new("42")).unwrap();

        let outcome = controller.confirm().await;

        assert!(outcome.is_committed());
        assert_eq!(controller.intent(), WatchlistIntent::None);
        assert_eq!(
            watchlist_calls(&api),
            vec![(
                UserId::new("1"),
                WatchlistUpdate {
                    action: WatchlistAction::Remove,
                    property_id: PropertyId::new("42"),
                }
            )]
        );
    }

    #[tokio::test]
    async fn confirm_when_idle_is_ignored() {
        let api = Arc::new(ScriptedApi::new());
        let controller = controller(&api);
        assert_eq!(controller.confirm().await, ConfirmOutcome::Ignored);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn failure_is_reported_and_not_retried() {
        let api = Arc::new(ScriptedApi::new().fail_watchlist(400));
        let controller = controller(&api);
        controller.request_add(PropertyId::new("42")).unwrap();

        let outcome = controller.confirm().await;

        assert!(matches!(outcome, ConfirmOutcome::Failed(_)));
        assert_eq!(controller.intent(), WatchlistIntent::None);
        assert_eq!(watchlist_calls(&api).len(), 1);
        // A second confirm has nothing left to send.
        assert_eq!(controller.confirm().await, ConfirmOutcome::Ignored);
        assert_eq!(watchlist_calls(&api).len(), 1);
    }

    #[tokio::test]
    async fn in_flight_commit_blocks_new_requests_and_double_confirm() {
        let api = Arc::new(ScriptedApi::new());
        let gate = api.hold_watchlist();
        let controller = controller(&api);
        controller.request_add(PropertyId::new("42")).unwrap();

        let (first, second) = tokio::join!(controller.confirm(), async {
            tokio::task::yield_now().await;
            assert!(controller.is_committing());
            assert!(!controller.prompt().open);
            assert_eq!(
                controller.request_remove(PropertyId::new("42")),
                Err(WatchlistError::Busy)
            );
            let second = controller.confirm().await;
            gate.open();
            second
        });

        assert!(first.is_committed());
        assert_eq!(second, ConfirmOutcome::Ignored);
        assert_eq!(watchlist_calls(&api).len(), 1);
        assert!(!controller.is_committing());
        assert!(controller.request_remove(PropertyId::new("42")).is_ok());
    }

    #[tokio::test]
    async fn abandoned_confirm_returns_to_idle() {
        let api = Arc::new(ScriptedApi::new());
        let _gate = api.hold_watchlist();
        let controller = controller(&api);
        controller.request_add(PropertyId::new("42")).unwrap();

        let abandoned =
            tokio::time::timeout(Duration::from_millis(20), controller.confirm()).await;

        assert!(abandoned.is_err());
        assert!(!controller.is_committing());
        assert_eq!(controller.intent(), WatchlistIntent::None);
        assert!(controller.request_remove(PropertyId::new("42")).is_ok());
        assert_eq!(watchlist_calls(&api).len(), 1);
    }
}
