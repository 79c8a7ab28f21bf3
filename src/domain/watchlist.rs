//! Watchlist actions and the staged intent awaiting confirmation.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::id::PropertyId;

/// Mutation applied to a user's watchlist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchlistAction {
    Add,
    Remove,
}

impl WatchlistAction {
    /// Question put to the user before the mutation is sent.
    #[must_use]
    pub const fn confirmation_message(self) -> &'static str {
        match self {
            Self::Add => "Are you sure you want to add this property to your wishlist?",
            Self::Remove => "Are you sure you want to remove this property from your wishlist?",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for WatchlistAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Staged, not-yet-committed watchlist action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum WatchlistIntent {
    #[default]
    None,
    PendingAdd(PropertyId),
    PendingRemove(PropertyId),
}

impl WatchlistIntent {
    #[must_use]
    pub fn pending(action: WatchlistAction, property_id: PropertyId) -> Self {
        match action {
            WatchlistAction::Add => Self::PendingAdd(property_id),
            WatchlistAction::Remove => Self::PendingRemove(property_id),
        }
    }

    #[must_use]
    pub const fn action(&self) -> Option<WatchlistAction> {
        match self {
            Self::None => None,
            Self::PendingAdd(_) => Some(WatchlistAction::Add),
            Self::PendingRemove(_) => Some(WatchlistAction::Remove),
        }
    }

    #[must_use]
    pub const fn property_id(&self) -> Option<&PropertyId> {
        match self {
            Self::None => None,
            Self::PendingAdd(id) | Self::PendingRemove(id) => Some(id),
        }
    }

    /// Request body for this intent, if one is staged.
    #[must_use]
    pub fn update(&self) -> Option<WatchlistUpdate> {
        let action = self.action()?;
        let property_id = self.property_id()?.clone();
        Some(WatchlistUpdate {
            action,
            property_id,
        })
    }
}

/// Body of `PUT /api/watchlist/{userId}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistUpdate {
    pub action: WatchlistAction,
    pub property_id: PropertyId,
}

/// Successful reply to a watchlist update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchlistReceipt {
    #[serde(default)]
    pub message: String,
}

/// What the confirmation dialog is asked to show.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConfirmationPrompt {
    pub open: bool,
    pub message: String,
}

impl ConfirmationPrompt {
    #[must_use]
    pub fn closed() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn for_action(action: WatchlistAction) -> Self {
        Self {
            open: true,
            message: action.confirmation_message().to_string(),
        }
    }
}
