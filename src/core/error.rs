//! Rejection taxonomy for round actions.
//!
//! Every validation failure is a value, never a panic: the engine converts
//! each one into a structured error result and leaves the round untouched.
//! Display strings are the user-facing phrasing surfaced by transports.

use thiserror::Error;

/// Why an action was rejected.
///
/// A rejected action is a no-op: no deck, hand, discard, or lifecycle state
/// changes. Callers surface the message and keep playing.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Join with an empty display name.
    #[error("Player name must not be empty")]
    EmptyName,

    /// Join with a name already seated at this table.
    #[error("Player already exists")]
    DuplicateName,

    /// Join or start attempted once the round has left the lobby.
    #[error("Game already started")]
    RoundAlreadyStarted,

    /// Start with fewer players than the configured minimum.
    #[error("Need at least {min} players to start")]
    InsufficientPlayers { min: usize },

    /// Join once the deal could no longer serve every seat.
    #[error("Table is full")]
    TableFull,

    /// Draw, peek, swap, or round-end attempted before the deal.
    #[error("Game not started")]
    RoundNotStarted,

    /// Draw with no cards remaining.
    #[error("Deck is empty")]
    DeckEmpty,

    /// Action referencing a name not seated at this table.
    #[error("Player not found")]
    PlayerNotFound,

    /// Peek or swap with a slot index outside the bench.
    #[error("Invalid card index")]
    InvalidSlotIndex,

    /// Draw or swap by a player whose turn it is not.
    #[error("Not your turn")]
    NotYourTurn,

    /// Draw while a previously drawn card is still unplaced.
    #[error("A drawn card is already pending")]
    DrawPending,

    /// Swap or discard with no drawn card in hand.
    #[error("No drawn card to place")]
    NoDrawnCard,
}
