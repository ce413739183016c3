//! Character stats carried in save files.

use serde::{Deserialize, Serialize};

/// Fixed character attributes. The encounters never change them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterStats {
    /// Hit points.
    pub health: i32,
    /// Physical power.
    pub strength: i32,
    /// Arcane power.
    pub magic: i32,
    /// Fortune.
    pub luck: i32,
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self {
            health: 100,
            strength: 10,
            magic: 5,
            luck: 5,
        }
    }
}
