//! # gandalf-engine
//!
//! A turn-based, hidden-hand card game engine for Gandalf, a Kaboo/Golf
//! variant: players hold a hidden bench of four cards, peek at their own
//! slots, draw from a shared deck, and try to end the round with the lowest
//! score.
//!
//! ## Design Principles
//!
//! 1. **Engine only**: no transport, rendering, or persistence. Callers
//!    submit one action at a time and render the projections that come back.
//!
//! 2. **Single writer**: one [`round::RoundEngine`] instance owns one table
//!    outright. Every handler is synchronous `&mut self`; hosting many
//!    tables means many engine instances, never shared state.
//!
//! 3. **Hidden information stays hidden**: game state leaves the engine
//!    only as per-viewer [`round::TableView`] projections or an explicit
//!    showdown summary. No field access, no global broadcast of peeked
//!    cards unless configured.
//!
//! 4. **Configuration over convention**: hand size, seat limits, reveal
//!    rules, turn order, and scoring all arrive through [`core::RoundConfig`]
//!    and the [`policy`] traits.
//!
//! ## Modules
//!
//! - `cards`: ranks, suits, and the 52-card set
//! - `core`: seats, players, RNG, configuration, the error taxonomy
//! - `table`: the deck and the discard pile
//! - `round`: the lifecycle state machine, action handlers, projections
//! - `policy`: pluggable turn-order and scoring rules
//! - `protocol`: the transport-agnostic request/response contract

pub mod cards;
pub mod core;
pub mod policy;
pub mod protocol;
pub mod round;
pub mod table;

// Re-export commonly used types
pub use crate::cards::{Card, Rank, Suit};

pub use crate::core::{ActionError, EngineRng, RevealMode, RngState, RoundConfig, SeatId};

pub use crate::policy::{PointValueScoring, RotateInOrder, ScoringPolicy, TurnPolicy};

pub use crate::protocol::{ActionRequest, ActionResponse};

pub use crate::round::{
    ActionKind, ActionRecord, Phase, PlayerView, RoundEngine, RoundSummary, SeatSummary,
    TableView, MASKED_SLOT,
};

pub use crate::table::{Deck, DiscardPile, DECK_SIZE};
