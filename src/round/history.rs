//! Append-only record of accepted actions.
//!
//! Every action the engine accepts is appended here, giving a replayable
//! narrative of the round for debugging and bot training. Rejected actions
//! are never recorded.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::SeatId;

/// What kind of action was accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    /// A player took a seat in the lobby.
    Join,
    /// The deck was built, shuffled, and dealt.
    Start,
    /// The acting player drew the top card of the deck.
    Draw,
    /// A player peeked at one of their own slots.
    Peek { slot: usize },
    /// The drawn card replaced a bench slot; the old card was discarded.
    Swap { slot: usize },
    /// The drawn card went straight to the discard pile.
    DiscardDrawn,
    /// A player called Gandalf, ending the round.
    Gandalf,
}

/// One accepted action with enough metadata to replay it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The seat that acted. `None` for table-level actions (start).
    pub seat: Option<SeatId>,

    /// The action taken.
    pub kind: ActionKind,

    /// Turn number when the action was accepted (0 while in the lobby).
    pub turn_number: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(seat: Option<SeatId>, kind: ActionKind, turn_number: u32) -> Self {
        Self {
            seat,
            kind,
            turn_number,
        }
    }
}

/// The history container: a persistent vector, so snapshots are cheap.
pub type History = Vector<ActionRecord>;
