//! Seat identification and per-seat player state.
//!
//! ## SeatId
//!
//! Type-safe seat index in join order. The turn pointer is a `SeatId`.
//!
//! ## Player
//!
//! One joined player: display name, bot flag, the hidden 4-card bench, the
//! seen mask tracking which slots the player has peeked at, and the running
//! score. Player state is owned by the round engine and never handed out
//! mutably; external observers only ever see a rendered projection.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;

/// Seat index in join order, supporting up to 255 seats.
///
/// Seat indices are 0-based: the first player to join sits at `SeatId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeatId(pub u8);

impl SeatId {
    /// Create a new seat ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seat IDs for a table with `seat_count` players.
    pub fn all(seat_count: usize) -> impl Iterator<Item = SeatId> {
        (0..seat_count as u8).map(SeatId)
    }
}

impl std::fmt::Display for SeatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seat {}", self.0)
    }
}

/// A joined player and their private state.
///
/// The bench is empty in the lobby and holds exactly the configured hand
/// size from deal to showdown. `seen` runs parallel to the bench; a slot's
/// bit flips to `true` the first time its owner peeks at it and stays set
/// until the next deal.
#[derive(Clone, Debug)]
pub struct Player {
    pub(crate) name: String,
    pub(crate) is_bot: bool,
    pub(crate) hand: SmallVec<[Card; 4]>,
    pub(crate) seen: SmallVec<[bool; 4]>,
    pub(crate) score: i64,
}

impl Player {
    /// Create a player with an empty bench and zero score.
    #[must_use]
    pub(crate) fn new(name: impl Into<String>, is_bot: bool) -> Self {
        Self {
            name: name.into(),
            is_bot,
            hand: SmallVec::new(),
            seen: SmallVec::new(),
            score: 0,
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this seat is driven by a bot.
    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.is_bot
    }

    /// The player's cumulative score across finished rounds.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Number of cards currently on the bench.
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand.len()
    }

    /// Replace the bench with a fresh deal and reset the seen mask.
    pub(crate) fn deal(&mut self, hand: SmallVec<[Card; 4]>) {
        let size = hand.len();
        self.hand = hand;
        self.seen = smallvec::smallvec![false; size];
    }

    /// Mark a slot as seen by its owner. Caller has bounds-checked `slot`.
    pub(crate) fn mark_seen(&mut self, slot: usize) {
        self.seen[slot] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use smallvec::smallvec;

    fn sample_hand() -> SmallVec<[Card; 4]> {
        smallvec![
            Card::new(Rank::Ace, Suit::Spades),
            Card::new(Rank::Two, Suit::Hearts),
            Card::new(Rank::Three, Suit::Diamonds),
            Card::new(Rank::Four, Suit::Clubs),
        ]
    }

    #[test]
    fn test_seat_id_basics() {
        let s0 = SeatId::new(0);
        let s1 = SeatId::new(1);

        assert_eq!(s0.index(), 0);
        assert_eq!(s1.index(), 1);
        assert_eq!(format!("{}", s0), "Seat 0");
    }

    #[test]
    fn test_seat_id_all() {
        let seats: Vec<_> = SeatId::all(4).collect();
        assert_eq!(seats.len(), 4);
        assert_eq!(seats[0], SeatId::new(0));
        assert_eq!(seats[3], SeatId::new(3));
    }

    #[test]
    fn test_player_starts_empty() {
        let player = Player::new("Alice", false);
        assert_eq!(player.name(), "Alice");
        assert!(!player.is_bot());
        assert_eq!(player.hand_size(), 0);
        assert_eq!(player.score(), 0);
        assert!(player.seen.is_empty());
    }

    #[test]
    fn test_deal_resets_seen_mask() {
        let mut player = Player::new("Alice", false);
        player.deal(sample_hand());
        player.mark_seen(2);
        assert!(player.seen[2]);

        player.deal(sample_hand());
        assert_eq!(player.seen.as_slice(), &[false, false, false, false]);
        assert_eq!(player.hand_size(), 4);
    }

    #[test]
    fn test_mark_seen_leaves_other_slots_masked() {
        let mut player = Player::new("Bob", true);
        player.deal(sample_hand());
        player.mark_seen(0);

        assert_eq!(player.seen.as_slice(), &[true, false, false, false]);
        assert!(player.is_bot());
    }
}
