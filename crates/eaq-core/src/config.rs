//! Configuration for a quest session.

use std::path::PathBuf;
use std::time::Duration;

/// Default turn budget for one game.
pub const DEFAULT_MAX_TURNS: u32 = 10;

/// Default number of distinct item names the inventory can hold.
pub const DEFAULT_INVENTORY_CAPACITY: usize = 10;

/// Default save file, relative to the working directory.
pub const DEFAULT_SAVE_PATH: &str = "save_game.json";

/// Configuration for a quest session.
#[derive(Debug, Clone)]
pub struct QuestConfig {
    /// Turn units available before time runs out.
    pub max_turns: u32,
    /// Maximum number of distinct items in the inventory.
    pub inventory_capacity: usize,
    /// Where the game is saved and loaded from.
    pub save_path: PathBuf,
    /// Pause after every displayed line.
    pub pacing: Duration,
    /// RNG seed for reproducible draws. `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl Default for QuestConfig {
    fn default() -> Self {
        Self {
            max_turns: DEFAULT_MAX_TURNS,
            inventory_capacity: DEFAULT_INVENTORY_CAPACITY,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            pacing: Duration::from_millis(500),
            seed: None,
        }
    }
}

impl QuestConfig {
    /// Set the turn budget (at least one turn).
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns.max(1);
        self
    }

    /// Set the inventory capacity.
    pub fn with_inventory_capacity(mut self, capacity: usize) -> Self {
        self.inventory_capacity = capacity;
        self
    }

    /// Set the save file path.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Set the pause after each displayed line.
    pub fn with_pacing(mut self, pacing: Duration) -> Self {
        self.pacing = pacing;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = QuestConfig::default();
        assert_eq!(cfg.max_turns, 10);
        assert_eq!(cfg.inventory_capacity, 10);
        assert_eq!(cfg.save_path, PathBuf::from("save_game.json"));
        assert_eq!(cfg.pacing, Duration::from_millis(500));
        assert!(cfg.seed.is_none());
    }

    #[test]
    fn builder_methods() {
        let cfg = QuestConfig::default()
            .with_max_turns(3)
            .with_inventory_capacity(4)
            .with_save_path("elsewhere.json")
            .with_pacing(Duration::ZERO)
            .with_seed(7);
        assert_eq!(cfg.max_turns, 3);
        assert_eq!(cfg.inventory_capacity, 4);
        assert_eq!(cfg.save_path, PathBuf::from("elsewhere.json"));
        assert_eq!(cfg.pacing, Duration::ZERO);
        assert_eq!(cfg.seed, Some(7));
    }

    #[test]
    fn max_turns_floor() {
        let cfg = QuestConfig::default().with_max_turns(0);
        assert_eq!(cfg.max_turns, 1);
    }
}
