//! Player state for one game.

use crate::achievement::{Achievement, Achievements};
use crate::config::{DEFAULT_INVENTORY_CAPACITY, DEFAULT_MAX_TURNS, QuestConfig};
use crate::inventory::Inventory;
use crate::stats::CharacterStats;

/// Everything the player accumulates during a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    /// Running score. May go negative.
    pub score: i64,
    /// Turn units consumed so far.
    pub turns_taken: u32,
    /// Turn units available before time runs out.
    pub max_turns: u32,
    /// Items collected.
    pub inventory: Inventory,
    /// Achievements unlocked.
    pub achievements: Achievements,
    /// Character attributes.
    pub stats: CharacterStats,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            score: 0,
            turns_taken: 0,
            max_turns: DEFAULT_MAX_TURNS,
            inventory: Inventory::with_capacity(DEFAULT_INVENTORY_CAPACITY),
            achievements: Achievements::new(),
            stats: CharacterStats::default(),
        }
    }
}

impl PlayerState {
    /// Fresh state for a new game.
    pub fn new(config: &QuestConfig) -> Self {
        Self {
            max_turns: config.max_turns,
            inventory: Inventory::with_capacity(config.inventory_capacity),
            ..Self::default()
        }
    }

    /// Spend one turn unit. Returns true if the budget is now exhausted.
    pub fn consume_turn(&mut self) -> bool {
        self.turns_taken = self.turns_taken.saturating_add(1);
        self.is_out_of_time()
    }

    /// Whether the turn budget has run out.
    pub fn is_out_of_time(&self) -> bool {
        self.turns_taken >= self.max_turns
    }

    /// Turn units left.
    pub fn turns_remaining(&self) -> u32 {
        self.max_turns.saturating_sub(self.turns_taken)
    }

    /// Unlock an achievement. Returns true if it was new.
    pub fn unlock(&mut self, achievement: Achievement) -> bool {
        self.achievements.unlock(achievement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_state() {
        let state = PlayerState::new(&QuestConfig::default());
        assert_eq!(state.score, 0);
        assert_eq!(state.turns_taken, 0);
        assert_eq!(state.max_turns, 10);
        assert!(state.inventory.is_empty());
        assert!(state.achievements.is_empty());
        assert_eq!(state.turns_remaining(), 10);
    }

    #[test]
    fn state_follows_config() {
        let cfg = QuestConfig::default()
            .with_max_turns(4)
            .with_inventory_capacity(2);
        let state = PlayerState::new(&cfg);
        assert_eq!(state.max_turns, 4);
        assert_eq!(state.inventory.capacity(), 2);
    }

    #[test]
    fn turn_budget_exhaustion() {
        let mut state = PlayerState {
            turns_taken: 8,
            ..PlayerState::default()
        };
        assert!(!state.consume_turn());
        assert_eq!(state.turns_remaining(), 1);
        assert!(state.consume_turn());
        assert_eq!(state.turns_taken, 10);
        assert_eq!(state.turns_remaining(), 0);
    }

    #[test]
    fn turn_count_saturates() {
        let mut state = PlayerState {
            turns_taken: u32::MAX,
            max_turns: u32::MAX,
            ..PlayerState::default()
        };
        assert!(state.consume_turn());
        assert_eq!(state.turns_taken, u32::MAX);
    }

    #[test]
    fn unlock_twice_keeps_one() {
        let mut state = PlayerState::default();
        assert!(state.unlock(Achievement::RiddleMaster));
        assert!(!state.unlock(Achievement::RiddleMaster));
        assert_eq!(state.achievements.len(), 1);
    }
}
