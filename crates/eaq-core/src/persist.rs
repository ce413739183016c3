//! Save files.
//!
//! A save is a full snapshot of the player state written as JSON. A missing
//! save is the normal "start fresh" case, and a save that cannot be read is
//! treated the same way.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::achievement::Achievements;
use crate::config::DEFAULT_INVENTORY_CAPACITY;
use crate::error::QuestResult;
use crate::inventory::Inventory;
use crate::state::PlayerState;
use crate::stats::CharacterStats;

/// On-disk shape of a saved game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveGame {
    /// Running score.
    pub score: i64,
    /// Turn units consumed.
    pub turns: u32,
    /// Turn budget.
    pub max_turns: u32,
    /// Item name to quantity.
    pub inventory: BTreeMap<String, u32>,
    /// Unlocked achievement labels.
    pub achievements: Vec<String>,
    /// Character attributes.
    pub character_stats: CharacterStats,
    /// When the save was written (RFC 3339).
    pub save_date: String,
}

impl SaveGame {
    /// Snapshot a player state, stamped with the current time.
    pub fn capture(state: &PlayerState) -> Self {
        Self {
            score: state.score,
            turns: state.turns_taken,
            max_turns: state.max_turns,
            inventory: state.inventory.to_map(),
            achievements: state.achievements.iter().map(str::to_string).collect(),
            character_stats: state.stats,
            save_date: Utc::now().to_rfc3339(),
        }
    }

    /// Rebuild the player state this save describes.
    pub fn into_state(self, inventory_capacity: usize) -> PlayerState {
        PlayerState {
            score: self.score,
            turns_taken: self.turns,
            max_turns: self.max_turns,
            inventory: Inventory::restore(self.inventory, inventory_capacity),
            achievements: Achievements::restore(self.achievements),
            stats: self.character_stats,
        }
    }
}

/// Somewhere a game can be saved to and loaded from.
pub trait SaveStore {
    /// Write a snapshot of `state`.
    fn save(&self, state: &PlayerState) -> QuestResult<()>;

    /// Read the saved state, if there is a usable one.
    fn load(&self) -> Option<PlayerState>;
}

/// A JSON save file at a fixed path.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    inventory_capacity: usize,
}

impl JsonFileStore {
    /// Create a store for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            inventory_capacity: DEFAULT_INVENTORY_CAPACITY,
        }
    }

    /// Set the capacity given to restored inventories.
    pub fn with_inventory_capacity(mut self, capacity: usize) -> Self {
        self.inventory_capacity = capacity;
        self
    }

    /// Path of the save file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the save file.
    fn read(&self) -> Option<SaveGame> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                log::warn!("could not read {}: {e}", self.path.display());
                return None;
            }
        };
        match serde_json::from_str(&text) {
            Ok(save) => Some(save),
            Err(e) => {
                log::warn!("ignoring corrupt save {}: {e}", self.path.display());
                None
            }
        }
    }
}

impl SaveStore for JsonFileStore {
    fn save(&self, state: &PlayerState) -> QuestResult<()> {
        let json = serde_json::to_string_pretty(&SaveGame::capture(state))?;
        fs::write(&self.path, json)?;
        log::info!("saved game to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> Option<PlayerState> {
        let save = self.read()?;
        let held = save.inventory.values().filter(|qty| **qty > 0).count();
        if held > self.inventory_capacity {
            log::warn!(
                "ignoring corrupt save {}: {held} items exceed capacity {}",
                self.path.display(),
                self.inventory_capacity
            );
            return None;
        }
        log::info!(
            "loaded save from {} written {}",
            self.path.display(),
            save.save_date
        );
        Some(save.into_state(self.inventory_capacity))
    }
}
