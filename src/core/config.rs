//! Round configuration.
//!
//! The engine hardcodes no table shape: hand size, seat limits, and the
//! visibility rule for peeked cards all arrive through [`RoundConfig`].
//! Defaults match the classic four-card game.

use serde::{Deserialize, Serialize};

use crate::table::DECK_SIZE;

/// Who gets to see a peeked card in the state projection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealMode {
    /// A peeked slot renders face-up only in the owner's own view.
    /// Everyone else keeps seeing the mask.
    #[default]
    PerViewer,

    /// A peeked slot renders face-up to every viewer of the projection.
    /// Leaks hidden information; only useful for spectated or debug tables.
    Broadcast,
}

/// Configuration for one round of one table.
///
/// ```
/// use gandalf_engine::core::{RevealMode, RoundConfig};
///
/// let config = RoundConfig::default()
///     .with_min_players(3)
///     .with_reveal(RevealMode::Broadcast);
/// assert_eq!(config.hand_size, 4);
/// assert_eq!(config.min_players, 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundConfig {
    /// Cards dealt to each bench. The deal also pops one opening discard.
    pub hand_size: usize,

    /// Fewest players a round may start with.
    pub min_players: usize,

    /// Most players a table accepts. Joins are additionally capped so the
    /// deal can always serve every seat plus the opening discard.
    pub max_players: usize,

    /// Visibility rule applied when rendering peeked slots.
    pub reveal: RevealMode,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            hand_size: 4,
            min_players: 2,
            max_players: 12,
            reveal: RevealMode::PerViewer,
        }
    }
}

impl RoundConfig {
    /// Set the per-bench hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        assert!(hand_size > 0, "Hand size must be at least 1");
        assert!(
            hand_size < DECK_SIZE,
            "Hand size must leave room for the opening discard"
        );
        self.hand_size = hand_size;
        self
    }

    /// Set the minimum player count for starting.
    #[must_use]
    pub fn with_min_players(mut self, min_players: usize) -> Self {
        assert!(min_players >= 2, "A round needs at least 2 players");
        self.min_players = min_players;
        self
    }

    /// Set the maximum player count for joining.
    #[must_use]
    pub fn with_max_players(mut self, max_players: usize) -> Self {
        assert!(max_players >= self.min_players, "Max must not undercut min");
        assert!(max_players <= 255, "At most 255 seats supported");
        self.max_players = max_players;
        self
    }

    /// Set the reveal mode for peeked slots.
    #[must_use]
    pub fn with_reveal(mut self, reveal: RevealMode) -> Self {
        self.reveal = reveal;
        self
    }

    /// Most seats a single 52-card deal can serve under this configuration:
    /// every bench filled plus one opening discard.
    #[must_use]
    pub fn dealable_seats(&self) -> usize {
        ((DECK_SIZE - 1) / self.hand_size).min(self.max_players)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RoundConfig::default();
        assert_eq!(config.hand_size, 4);
        assert_eq!(config.min_players, 2);
        assert_eq!(config.max_players, 12);
        assert_eq!(config.reveal, RevealMode::PerViewer);
    }

    #[test]
    fn test_builder_chain() {
        let config = RoundConfig::default()
            .with_hand_size(3)
            .with_min_players(2)
            .with_max_players(6)
            .with_reveal(RevealMode::Broadcast);

        assert_eq!(config.hand_size, 3);
        assert_eq!(config.max_players, 6);
        assert_eq!(config.reveal, RevealMode::Broadcast);
    }

    #[test]
    fn test_dealable_seats() {
        // 4-card hands: 51 dealable cards / 4 = 12 seats, capped by max_players
        assert_eq!(RoundConfig::default().dealable_seats(), 12);
        assert_eq!(
            RoundConfig::default().with_max_players(4).dealable_seats(),
            4
        );
        // 5-card hands: 51 / 5 = 10 seats
        assert_eq!(
            RoundConfig::default().with_hand_size(5).dealable_seats(),
            10
        );
    }

    #[test]
    #[should_panic(expected = "A round needs at least 2 players")]
    fn test_min_players_floor() {
        let _ = RoundConfig::default().with_min_players(1);
    }
}
