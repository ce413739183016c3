//! Achievements unlocked by specific outcomes.

use std::collections::BTreeSet;
use std::fmt;

/// The achievements the forest can award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Achievement {
    /// Answered the wizard's riddle.
    RiddleMaster,
    /// Survived the final path after the riddle.
    ForestExplorer,
    /// Won the squirrel encounter.
    FriendOfTheForest,
    /// Won the monster encounter.
    MonsterSlayer,
    /// Opened the treasure vault.
    TreasureHunter,
    /// Won the ghostly encounter.
    GhostWhisperer,
}

impl Achievement {
    /// The label shown to the player and written to save files.
    pub fn label(self) -> &'static str {
        match self {
            Self::RiddleMaster => "Riddle Master",
            Self::ForestExplorer => "Forest Explorer",
            Self::FriendOfTheForest => "Friend of the Forest",
            Self::MonsterSlayer => "Monster Slayer",
            Self::TreasureHunter => "Treasure Hunter",
            Self::GhostWhisperer => "Ghost Whisperer",
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Set of unlocked achievement labels. Insertion-only.
///
/// Labels are stored as strings so that anything read back from a save file
/// survives, even labels this build does not know about.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Achievements {
    labels: BTreeSet<String>,
}

impl Achievements {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from saved labels; duplicates collapse.
    pub fn restore<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Unlock an achievement. Returns true if it was not unlocked before.
    pub fn unlock(&mut self, achievement: Achievement) -> bool {
        self.labels.insert(achievement.label().to_string())
    }

    /// Whether an achievement has been unlocked.
    pub fn contains(&self, achievement: Achievement) -> bool {
        self.labels.contains(achievement.label())
    }

    /// Number of unlocked achievements.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether nothing has been unlocked yet.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over the unlocked labels in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlock_is_idempotent() {
        let mut set = Achievements::new();
        assert!(set.unlock(Achievement::RiddleMaster));
        assert!(!set.unlock(Achievement::RiddleMaster));
        assert_eq!(set.len(), 1);
        assert!(set.contains(Achievement::RiddleMaster));
    }

    #[test]
    fn labels_match_display() {
        assert_eq!(Achievement::FriendOfTheForest.to_string(), "Friend of the Forest");
        assert_eq!(Achievement::GhostWhisperer.label(), "Ghost Whisperer");
    }

    #[test]
    fn restore_keeps_unknown_labels() {
        let set = Achievements::restore(["Monster Slayer", "Old Label", "Monster Slayer"]);
        assert_eq!(set.len(), 2);
        assert!(set.contains(Achievement::MonsterSlayer));
        assert!(set.iter().any(|l| l == "Old Label"));
    }
}
