//! The read model handed to external callers.
//!
//! A [`TableView`] is the only channel through which anything outside the
//! engine observes game state. It is rendered fresh per viewer: a bench slot
//! shows its literal card text only where the seen mask and the configured
//! [`RevealMode`] allow, and the mask placeholder everywhere else.

use serde::{Deserialize, Serialize};

use crate::core::{Player, RevealMode};

/// Placeholder rendered for a hidden bench slot.
pub const MASKED_SLOT: &str = "?";

/// Snapshot of the whole table as one viewer is allowed to see it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableView {
    /// Whether the round is underway.
    pub started: bool,

    /// One row per seated player, in join order.
    pub players: Vec<PlayerView>,

    /// Name of the player whose turn it is, once started.
    pub turn: Option<String>,

    /// Rendered top card of the discard pile, if any.
    pub top_discard: Option<String>,
}

/// One player's row in the projection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub is_bot: bool,
    pub score: i64,

    /// Rendered bench: card text where revealed to this viewer, `"?"`
    /// otherwise. Empty before the deal.
    pub bench: Vec<String>,
}

impl PlayerView {
    /// Render one player's row for a given viewer.
    pub(crate) fn render(player: &Player, viewer: Option<&str>, mode: RevealMode) -> Self {
        let owner_is_viewer = viewer == Some(player.name.as_str());

        let bench = player
            .hand
            .iter()
            .zip(&player.seen)
            .map(|(card, &seen)| {
                let revealed = seen && (owner_is_viewer || mode == RevealMode::Broadcast);
                if revealed {
                    card.to_string()
                } else {
                    MASKED_SLOT.to_string()
                }
            })
            .collect();

        Self {
            name: player.name.clone(),
            is_bot: player.is_bot,
            score: player.score,
            bench,
        }
    }
}
