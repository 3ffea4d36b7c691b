use crate::PhaseGoal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeckRule {
    /// Copies of every (color, number) pair.
    pub copies: u8,
    pub max_number: u8,
    pub wilds: u8,
    pub skips: u8,
}

impl DeckRule {
    pub fn total_cards(&self) -> usize {
        self.copies as usize * 4 * self.max_number as usize
            + self.wilds as usize
            + self.skips as usize
    }
}

impl Default for DeckRule {
    fn default() -> Self {
        Self {
            copies: 2,
            max_number: 12,
            wilds: 8,
            skips: 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub hand_size: usize,
    #[serde(default)]
    pub deck: DeckRule,
    pub phases: Vec<PhaseGoal>,
}

impl GameConfig {
    pub fn standard() -> Self {
        Self {
            hand_size: 10,
            deck: DeckRule::default(),
            phases: PhaseGoal::standard_phases(),
        }
    }

    pub fn phase(&self, index: usize) -> Option<&PhaseGoal> {
        self.phases.get(index)
    }

    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }

    /// Cards a fresh deal removes from the deck: two hands plus the discard seed.
    pub fn cards_per_deal(&self) -> usize {
        self.hand_size * 2 + 1
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_deck_has_108_cards() {
        assert_eq!(DeckRule::default().total_cards(), 108);
    }

    #[test]
    fn standard_config_has_ten_phases() {
        let config = GameConfig::standard();
        assert_eq!(config.phase_count(), 10);
        assert_eq!(config.hand_size, 10);
        assert!(config.phase(9).is_some());
        assert!(config.phase(10).is_none());
        assert_eq!(config.cards_per_deal(), 21);
    }
}
