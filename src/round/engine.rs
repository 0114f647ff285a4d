//! The round engine: lifecycle state machine, action handlers, projection.
//!
//! One [`RoundEngine`] instance owns exactly one table: its players, deck,
//! discard pile, turn pointer, and lifecycle phase. The engine is the sole
//! mutator of all of that state; callers submit one action at a time and
//! observe results only through [`TableView`] projections and the typed
//! return values of the action methods.
//!
//! ## Lifecycle
//!
//! `Lobby -> Playing -> Ended`, with [`RoundEngine::reset`] looping any
//! phase back to an empty lobby. Dealing happens inside [`RoundEngine::start`]
//! and is never externally observable as its own phase.
//!
//! ## Single-writer model
//!
//! All handlers take `&mut self` and run to completion; nothing suspends,
//! blocks, or shares mutable state. Hosting several tables means one engine
//! instance per table, with the embedding layer serializing actions per
//! instance.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};

use crate::cards::Card;
use crate::core::{ActionError, EngineRng, Player, RoundConfig, SeatId};
use crate::policy::{PointValueScoring, RotateInOrder, ScoringPolicy, TurnPolicy};
use crate::table::{Deck, DiscardPile};

use super::history::{ActionKind, ActionRecord, History};
use super::projection::{PlayerView, TableView};

/// Lifecycle phase of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Accepting joins; no cards dealt.
    Lobby,
    /// Dealt and live; actions flow.
    Playing,
    /// Showdown done, scores final. Loops back to `Lobby` via reset.
    Ended,
}

/// Scores and revealed hands produced by a round-ending Gandalf call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    /// The player who called Gandalf.
    pub caller: String,

    /// One row per seat, in join order, hands revealed.
    pub rows: Vec<SeatSummary>,

    /// Lowest round score wins; ties share the win.
    pub winners: Vec<String>,
}

/// One seat's showdown line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatSummary {
    pub name: String,

    /// The full bench, face-up.
    pub hand: Vec<Card>,

    /// This round's score per the scoring policy.
    pub round_score: i64,

    /// Cumulative score after this round.
    pub total_score: i64,
}

/// The engine for one round of one table.
///
/// ```
/// use gandalf_engine::round::RoundEngine;
///
/// let mut round = RoundEngine::seeded(42);
/// round.join("Alice", false).unwrap();
/// round.join("Bob", false).unwrap();
/// round.start().unwrap();
///
/// let view = round.view_for(Some("Alice"));
/// assert!(view.started);
/// assert_eq!(view.players.len(), 2);
/// ```
pub struct RoundEngine {
    config: RoundConfig,
    phase: Phase,
    players: Vec<Player>,
    seats_by_name: FxHashMap<String, SeatId>,
    deck: Deck,
    discard: DiscardPile,
    turn: SeatId,
    turn_number: u32,
    /// The drawn-but-unplaced card and the seat holding it.
    drawn: Option<(SeatId, Card)>,
    history: History,
    rng: EngineRng,
    turn_policy: Box<dyn TurnPolicy>,
    scoring: Box<dyn ScoringPolicy>,
}

impl RoundEngine {
    /// Create an engine with the default turn and scoring policies.
    #[must_use]
    pub fn new(config: RoundConfig, rng: EngineRng) -> Self {
        Self::with_policies(
            config,
            rng,
            Box::new(RotateInOrder),
            Box::new(PointValueScoring),
        )
    }

    /// Create an engine with custom rule policies.
    #[must_use]
    pub fn with_policies(
        config: RoundConfig,
        rng: EngineRng,
        turn_policy: Box<dyn TurnPolicy>,
        scoring: Box<dyn ScoringPolicy>,
    ) -> Self {
        Self {
            config,
            phase: Phase::Lobby,
            players: Vec::new(),
            seats_by_name: FxHashMap::default(),
            deck: Deck::empty(),
            discard: DiscardPile::new(),
            turn: SeatId::new(0),
            turn_number: 0,
            drawn: None,
            history: History::new(),
            rng,
            turn_policy,
            scoring,
        }
    }

    /// Convenience constructor for a deterministic table.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(RoundConfig::default(), EngineRng::new(seed))
    }

    // === Actions ===

    /// Seat a player in the lobby.
    pub fn join(&mut self, name: &str, is_bot: bool) -> Result<SeatId, ActionError> {
        if self.phase != Phase::Lobby {
            return Err(ActionError::RoundAlreadyStarted);
        }
        if name.is_empty() {
            return Err(ActionError::EmptyName);
        }
        if self.seats_by_name.contains_key(name) {
            return Err(ActionError::DuplicateName);
        }
        if self.players.len() >= self.config.dealable_seats() {
            return Err(ActionError::TableFull);
        }

        let seat = SeatId::new(self.players.len() as u8);
        self.players.push(Player::new(name, is_bot));
        self.seats_by_name.insert(name.to_string(), seat);

        debug!(player = name, is_bot, %seat, "player joined");
        self.record(Some(seat), ActionKind::Join);
        Ok(seat)
    }

    /// Build and shuffle a fresh deck, deal every bench, pop the opening
    /// discard, and go live. Returns the opening discard.
    pub fn start(&mut self) -> Result<Card, ActionError> {
        if self.phase != Phase::Lobby {
            return Err(ActionError::RoundAlreadyStarted);
        }
        if self.players.len() < self.config.min_players {
            return Err(ActionError::InsufficientPlayers {
                min: self.config.min_players,
            });
        }

        // join() caps seats at dealable_seats(), so a full deal always fits.
        let mut deck = Deck::standard();
        deck.shuffle(&mut self.rng);

        for player in &mut self.players {
            let mut hand = SmallVec::new();
            for _ in 0..self.config.hand_size {
                hand.push(deck.draw_top()?);
            }
            player.deal(hand);
        }

        let opening = deck.draw_top()?;
        self.deck = deck;
        self.discard = DiscardPile::new();
        self.discard.push(opening);
        self.drawn = None;
        self.turn = SeatId::new(0);
        self.turn_number = 1;
        self.phase = Phase::Playing;

        info!(
            players = self.players.len(),
            cards_left = self.deck.len(),
            top_discard = %opening,
            "round started"
        );
        self.record(None, ActionKind::Start);
        Ok(opening)
    }

    /// Draw the top card of the deck. The card stays in flight until the
    /// drawer resolves it with [`RoundEngine::swap`] or
    /// [`RoundEngine::discard_drawn`].
    pub fn draw(&mut self, name: &str) -> Result<Card, ActionError> {
        self.require_playing()?;
        let seat = self.seat_of(name)?;
        if seat != self.turn {
            return Err(ActionError::NotYourTurn);
        }
        if self.drawn.is_some() {
            return Err(ActionError::DrawPending);
        }

        let card = self.deck.draw_top()?;
        self.drawn = Some((seat, card));

        debug!(player = name, cards_left = self.deck.len(), "card drawn");
        self.record(Some(seat), ActionKind::Draw);
        Ok(card)
    }

    /// Peek at one of your own bench slots, setting its seen bit.
    ///
    /// A free information action: consumes no deck card, never advances the
    /// turn, and is allowed out of turn.
    pub fn peek(&mut self, name: &str, slot: usize) -> Result<Card, ActionError> {
        self.require_playing()?;
        let seat = self.seat_of(name)?;
        if slot >= self.config.hand_size {
            return Err(ActionError::InvalidSlotIndex);
        }

        let player = &mut self.players[seat.index()];
        player.mark_seen(slot);
        let card = player.hand[slot];

        debug!(player = name, slot, "slot peeked");
        self.record(Some(seat), ActionKind::Peek { slot });
        Ok(card)
    }

    /// Place the in-flight drawn card into a bench slot; the replaced card
    /// goes face-up onto the discard pile and the slot counts as seen.
    /// Ends the drawer's turn. Returns the replaced card.
    pub fn swap(&mut self, name: &str, slot: usize) -> Result<Card, ActionError> {
        self.require_playing()?;
        let seat = self.seat_of(name)?;
        if slot >= self.config.hand_size {
            return Err(ActionError::InvalidSlotIndex);
        }
        let incoming = match self.drawn {
            Some((holder, card)) if holder == seat => card,
            _ => return Err(ActionError::NoDrawnCard),
        };

        let player = &mut self.players[seat.index()];
        let outgoing = std::mem::replace(&mut player.hand[slot], incoming);
        player.mark_seen(slot);
        self.discard.push(outgoing);
        self.drawn = None;

        debug!(player = name, slot, discarded = %outgoing, "drawn card swapped in");
        self.record(Some(seat), ActionKind::Swap { slot });
        self.advance_turn(seat);
        Ok(outgoing)
    }

    /// Send the in-flight drawn card straight to the discard pile without
    /// placing it. Ends the drawer's turn.
    pub fn discard_drawn(&mut self, name: &str) -> Result<Card, ActionError> {
        self.require_playing()?;
        let seat = self.seat_of(name)?;
        let card = match self.drawn {
            Some((holder, card)) if holder == seat => card,
            _ => return Err(ActionError::NoDrawnCard),
        };

        self.discard.push(card);
        self.drawn = None;

        debug!(player = name, card = %card, "drawn card discarded");
        self.record(Some(seat), ActionKind::DiscardDrawn);
        self.advance_turn(seat);
        Ok(card)
    }

    /// Call Gandalf: end the round, finalize every score through the scoring
    /// policy, and reveal all hands in the returned summary.
    ///
    /// The engine lands in [`Phase::Ended`]; call [`RoundEngine::reset`] to
    /// reopen the lobby.
    pub fn call_gandalf(&mut self, name: &str) -> Result<RoundSummary, ActionError> {
        self.require_playing()?;
        let seat = self.seat_of(name)?;

        // An unresolved drawn card returns to the table face-up; the 52-card
        // set stays accounted for at showdown.
        if let Some((_, card)) = self.drawn.take() {
            self.discard.push(card);
        }

        self.record(Some(seat), ActionKind::Gandalf);

        let mut rows = Vec::with_capacity(self.players.len());
        for player in &mut self.players {
            let round_score = self.scoring.score_hand(&player.hand);
            player.score += round_score;
            rows.push(SeatSummary {
                name: player.name.clone(),
                hand: player.hand.to_vec(),
                round_score,
                total_score: player.score,
            });
        }

        let best = rows.iter().map(|row| row.round_score).min().unwrap_or(0);
        let winners: Vec<String> = rows
            .iter()
            .filter(|row| row.round_score == best)
            .map(|row| row.name.clone())
            .collect();

        self.phase = Phase::Ended;
        info!(caller = name, winners = ?winners, "round ended");

        Ok(RoundSummary {
            caller: name.to_string(),
            rows,
            winners,
        })
    }

    /// Tear the table down to an empty lobby: players, deck, discard, and
    /// history all cleared. Valid from any phase.
    pub fn reset(&mut self) {
        self.phase = Phase::Lobby;
        self.players.clear();
        self.seats_by_name.clear();
        self.deck = Deck::empty();
        self.discard = DiscardPile::new();
        self.drawn = None;
        self.turn = SeatId::new(0);
        self.turn_number = 0;
        self.history = History::new();
        info!("table reset to lobby");
    }

    // === Projection ===

    /// Render the table as `viewer` is allowed to see it.
    ///
    /// `None` renders the spectator view: every bench slot masked under
    /// per-viewer reveal. This is the only read channel for game state.
    #[must_use]
    pub fn view_for(&self, viewer: Option<&str>) -> TableView {
        let started = self.phase == Phase::Playing;
        TableView {
            started,
            players: self
                .players
                .iter()
                .map(|player| PlayerView::render(player, viewer, self.config.reveal))
                .collect(),
            turn: if started {
                Some(self.players[self.turn.index()].name.clone())
            } else {
                None
            },
            top_discard: self.discard.top().map(|card| card.to_string()),
        }
    }

    // === Read accessors ===

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The table configuration.
    #[must_use]
    pub fn config(&self) -> &RoundConfig {
        &self.config
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Cards left in the deck. Public knowledge at any real table.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Cards in the discard pile.
    #[must_use]
    pub fn discarded(&self) -> usize {
        self.discard.len()
    }

    /// The seat whose turn it is.
    #[must_use]
    pub fn turn_seat(&self) -> SeatId {
        self.turn
    }

    /// Whether a drawn card is waiting to be swapped in or discarded.
    #[must_use]
    pub fn has_pending_draw(&self) -> bool {
        self.drawn.is_some()
    }

    /// Accepted-action history for this round.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    // === Internals ===

    fn require_playing(&self) -> Result<(), ActionError> {
        if self.phase == Phase::Playing {
            Ok(())
        } else {
            Err(ActionError::RoundNotStarted)
        }
    }

    fn seat_of(&self, name: &str) -> Result<SeatId, ActionError> {
        self.seats_by_name
            .get(name)
            .copied()
            .ok_or(ActionError::PlayerNotFound)
    }

    fn advance_turn(&mut self, from: SeatId) {
        self.turn = self.turn_policy.next_seat(from, self.players.len());
        self.turn_number += 1;
    }

    fn record(&mut self, seat: Option<SeatId>, kind: ActionKind) {
        self.history
            .push_back(ActionRecord::new(seat, kind, self.turn_number));
    }
}
