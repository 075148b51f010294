//! Activation of game cards.
//!
//! A card is either live, in which case a click, `Enter` or `Space` opens the
//! game's URL in a fresh browsing context, or inert, in which case nothing
//! happens. All three inputs funnel into [`Activation::activate`].

use crate::game::GameRecord;
use thiserror::Error;
use tracing::{debug, error, info};

/// Window target used when opening a game.
pub const NEW_CONTEXT_TARGET: &str = "_blank";
/// Window features used when opening a game. The new context gets no handle
/// back to the hub and no referrer.
pub const NEW_CONTEXT_FEATURES: &str = "noopener,noreferrer";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpenError {
    #[error("No browser window is available")]
    NoWindow,
    #[error("Browser refused to open {url}: {reason}")]
    Rejected { url: String, reason: String },
    #[error("Opening new browsing contexts is not supported on this platform")]
    Unsupported,
}

/// Capability to open a URL in a new top-level browsing context using
/// [`NEW_CONTEXT_TARGET`] and [`NEW_CONTEXT_FEATURES`].
#[cfg_attr(test, mockall::automock)]
pub trait UrlOpener {
    fn open_in_new_context(&self, url: &str) -> Result<(), OpenError>;
}

/// User input that can activate a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Click,
    Enter,
    Space,
}

impl Trigger {
    /// Maps a DOM `KeyboardEvent.key` value to a trigger.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Trigger::Enter),
            " " | "Spacebar" => Some(Trigger::Space),
            _ => None,
        }
    }

    /// Maps a `keydown` event to a trigger. Auto-repeated events from a held
    /// key never trigger, so one press opens one context.
    pub fn from_keydown(key: &str, repeating: bool) -> Option<Self> {
        if repeating {
            return None;
        }
        Self::from_key(key)
    }

    /// Key triggers must cancel the browser default (Space scrolls the page).
    pub fn suppresses_default(self) -> bool {
        matches!(self, Trigger::Enter | Trigger::Space)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    Live { url: String },
    Inert,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Opened,
    Ignored,
    Failed(OpenError),
}

impl Activation {
    pub fn for_game(game: &GameRecord) -> Self {
        if game.is_live() {
            Activation::Live {
                url: game.url.clone(),
            }
        } else {
            Activation::Inert
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, Activation::Live { .. })
    }

    /// Opens the game exactly once if live. Never panics and never
    /// propagates the opener's error past the returned outcome.
    pub fn activate(&self, trigger: Trigger, opener: &dyn UrlOpener) -> Outcome {
        match self {
            Activation::Live { url } => match opener.open_in_new_context(url) {
                Ok(()) => {
                    info!(url = %url, ?trigger, "Opened game in new browsing context");
                    Outcome::Opened
                }
                Err(err) => {
                    error!(url = %url, ?trigger, %err, "Failed to open game");
                    Outcome::Failed(err)
                }
            },
            Activation::Inert => {
                debug!(?trigger, "Ignored activation of non-live game");
                Outcome::Ignored
            }
        }
    }
}
