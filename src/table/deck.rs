//! The undrawn portion of the 52-card set.

use crate::cards::Card;
use crate::core::{ActionError, EngineRng};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// An ordered, face-down stack of cards.
///
/// The top of the deck is the last element; [`Deck::draw_top`] is the sole
/// way cards leave it. Only the round engine holds a deck instance.
///
/// ```
/// use gandalf_engine::core::EngineRng;
/// use gandalf_engine::table::{Deck, DECK_SIZE};
///
/// let mut deck = Deck::standard();
/// deck.shuffle(&mut EngineRng::new(7));
/// assert_eq!(deck.len(), DECK_SIZE);
///
/// let card = deck.draw_top().unwrap();
/// assert_eq!(deck.len(), DECK_SIZE - 1);
/// # let _ = card;
/// ```
#[derive(Clone, Debug, Default)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full deck of all 52 cards in canonical order, unshuffled.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            cards: Card::canonical_order().collect(),
        }
    }

    /// An empty deck, the state between rounds.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Apply an unbiased random permutation to the whole deck.
    ///
    /// Called once per round start. Every permutation of the 52 cards is
    /// equally likely given a uniform source.
    pub fn shuffle(&mut self, rng: &mut EngineRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card.
    pub fn draw_top(&mut self) -> Result<Card, ActionError> {
        self.cards.pop().ok_or(ActionError::DeckEmpty)
    }

    /// Number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has been drawn dry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn cards(&self) -> &[Card] {
        &self.cards
    }
}
