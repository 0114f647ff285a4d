//! Table fixtures: the deck and the discard pile.
//!
//! Both are owned exclusively by the round engine. Over the lifetime of one
//! round, the multiset of cards across deck, benches, discard pile, and the
//! in-flight drawn card is always exactly the full 52-card set.

pub mod deck;
pub mod discard;

pub use deck::{Deck, DECK_SIZE};
pub use discard::DiscardPile;
