//! Transport-agnostic action contract.
//!
//! External callers drive the engine through [`ActionRequest`] values and
//! read back [`ActionResponse`] values; the engine has no dependency on
//! whatever channel carries them. Requests use an `action` discriminator,
//! responses carry a success narrative or a rejection message plus a fresh
//! per-viewer projection.
//!
//! A response with `error` set means the action was rejected and nothing
//! mutated; consumers treat it as a no-op.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::round::{RoundEngine, TableView};

/// One action submitted to the engine.
///
/// The serialized form is a map with an `"action"` tag, e.g.
/// `{"action": "peek", "player": "Alice", "index": 0}`. The `join` tag also
/// answers to its legacy `create_player` spelling.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionRequest {
    /// Seat a player in the lobby.
    #[serde(alias = "create_player")]
    Join {
        name: String,
        #[serde(default)]
        is_bot: bool,
    },

    /// Deal and go live.
    StartGame,

    /// Draw the top card of the deck.
    Draw { player: String },

    /// Peek at one of your own bench slots.
    Peek { player: String, index: usize },

    /// Place the drawn card into a bench slot, discarding the old card.
    Swap { player: String, index: usize },

    /// Send the drawn card straight to the discard pile.
    DiscardDrawn { player: String },

    /// Call Gandalf and end the round.
    #[serde(alias = "gandalf")]
    EndRound { player: String },

    /// Fetch a fresh projection without acting.
    GetState {
        #[serde(default)]
        player: Option<String>,
    },

    /// Tear the table down to an empty lobby.
    Reset,
}

impl ActionRequest {
    /// The viewer a response projection should be rendered for.
    #[must_use]
    fn viewer(&self) -> Option<&str> {
        match self {
            ActionRequest::Join { name, .. } => Some(name),
            ActionRequest::Draw { player }
            | ActionRequest::Peek { player, .. }
            | ActionRequest::Swap { player, .. }
            | ActionRequest::DiscardDrawn { player }
            | ActionRequest::EndRound { player } => Some(player),
            ActionRequest::GetState { player } => player.as_deref(),
            ActionRequest::StartGame | ActionRequest::Reset => None,
        }
    }
}

/// The engine's answer to one request.
///
/// Exactly one of `status` and `error` is set. The projection fields flatten
/// into the response, so the serialized form reads
/// `{"status": "drawn", "card": "Q♥", "started": true, "players": [..], ..}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionResponse {
    /// Success narrative, e.g. `"player_added"` or `"drawn"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Rejection message; present means the action was a no-op.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// The card surfaced by a draw, peek, swap, or discard.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<String>,

    /// Fresh state projection for the requesting viewer.
    #[serde(flatten)]
    pub state: TableView,
}

impl ActionResponse {
    fn ok(status: impl Into<String>, card: Option<String>, state: TableView) -> Self {
        Self {
            status: Some(status.into()),
            error: None,
            card,
            state,
        }
    }

    fn rejected(message: String, state: TableView) -> Self {
        Self {
            status: None,
            error: Some(message),
            card: None,
            state,
        }
    }

    /// Whether the request was accepted.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl RoundEngine {
    /// Dispatch one request and render the response for its viewer.
    ///
    /// Every rejection surfaces as a structured `error` string; nothing
    /// here panics during normal operation.
    pub fn handle(&mut self, request: ActionRequest) -> ActionResponse {
        let viewer = request.viewer().map(str::to_owned);
        let viewer = viewer.as_deref();

        let outcome = match &request {
            ActionRequest::Join { name, is_bot } => self
                .join(name, *is_bot)
                .map(|_| ("player_added".to_string(), None)),

            ActionRequest::StartGame => self
                .start()
                .map(|opening| ("game_started".to_string(), Some(opening.to_string()))),

            ActionRequest::Draw { player } => self
                .draw(player)
                .map(|card| ("drawn".to_string(), Some(card.to_string()))),

            ActionRequest::Peek { player, index } => self
                .peek(player, *index)
                .map(|card| (format!("peeked at card {index}"), Some(card.to_string()))),

            ActionRequest::Swap { player, index } => self
                .swap(player, *index)
                .map(|card| ("swapped".to_string(), Some(card.to_string()))),

            ActionRequest::DiscardDrawn { player } => self
                .discard_drawn(player)
                .map(|card| ("discarded".to_string(), Some(card.to_string()))),

            ActionRequest::EndRound { player } => self.call_gandalf(player).map(|summary| {
                let status = format!("gandalf_called: {} wins", summary.winners.join(", "));
                self.reset();
                (status, None)
            }),

            ActionRequest::GetState { .. } => Ok(("state".to_string(), None)),

            ActionRequest::Reset => {
                self.reset();
                Ok(("reset".to_string(), None))
            }
        };

        match outcome {
            Ok((status, card)) => ActionResponse::ok(status, card, self.view_for(viewer)),
            Err(error) => {
                debug!(?request, %error, "action rejected");
                ActionResponse::rejected(error.to_string(), self.view_for(viewer))
            }
        }
    }
}
