//! Card primitives: ranks, suits, and the 52-card set.
//!
//! A [`Card`] is an immutable (rank, suit) pair. There are exactly 52
//! distinct cards, no jokers, no wildcards. Cards render in the compact
//! table form used everywhere a card becomes visible: rank glyph followed
//! by suit symbol, e.g. `A♠` or `10♥`.

use serde::{Deserialize, Serialize};

/// Card suit. Four symbols, no ordering significance in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All four suits in canonical order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// The display symbol for this suit.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card rank, ace low.
///
/// Declaration order is the canonical order (A, 2, .. 10, J, Q, K), so the
/// derived `Ord` agrees with [`Rank::point_value`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All thirteen ranks in canonical order.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Point value for scoring: ace counts 1, face cards 11-13.
    ///
    /// Lower totals are better; a hand of aces is the best possible hand.
    #[must_use]
    pub const fn point_value(self) -> i64 {
        self as i64 + 1
    }

    /// The display glyph for this rank (`"A"`, `"2"`, .. `"10"`, `"J"`, ..).
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// An immutable playing card.
///
/// ```
/// use gandalf_engine::cards::{Card, Rank, Suit};
///
/// let card = Card::new(Rank::Queen, Suit::Hearts);
/// assert_eq!(card.to_string(), "Q♥");
/// assert_eq!(card.rank.point_value(), 12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a new card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Iterate over all 52 cards in canonical (rank-major) order.
    pub fn canonical_order() -> impl Iterator<Item = Card> {
        Rank::ALL
            .into_iter()
            .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card::new(rank, suit)))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_point_values() {
        assert_eq!(Rank::Ace.point_value(), 1);
        assert_eq!(Rank::Two.point_value(), 2);
        assert_eq!(Rank::Ten.point_value(), 10);
        assert_eq!(Rank::Jack.point_value(), 11);
        assert_eq!(Rank::Queen.point_value(), 12);
        assert_eq!(Rank::King.point_value(), 13);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
        assert_eq!(Card::new(Rank::Ten, Suit::Diamonds).to_string(), "10♦");
        assert_eq!(Card::new(Rank::King, Suit::Clubs).to_string(), "K♣");
    }

    #[test]
    fn test_canonical_order_is_complete() {
        let cards: Vec<_> = Card::canonical_order().collect();
        assert_eq!(cards.len(), 52);

        let distinct: HashSet<_> = cards.iter().copied().collect();
        assert_eq!(distinct.len(), 52);
    }

    #[test]
    fn test_canonical_order_is_rank_major() {
        let cards: Vec<_> = Card::canonical_order().collect();
        assert_eq!(cards[0], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(cards[3], Card::new(Rank::Ace, Suit::Clubs));
        assert_eq!(cards[4], Card::new(Rank::Two, Suit::Spades));
        assert_eq!(cards[51], Card::new(Rank::King, Suit::Clubs));
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(Rank::Seven, Suit::Hearts);
        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }
}
