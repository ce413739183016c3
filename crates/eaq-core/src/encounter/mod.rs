//! Outcome resolvers for the six encounters.
//!
//! Each encounter is a static [`Scene`]: intro lines, numbered options and,
//! per option, either a fixed [`Outcome`] or a fair draw between two. A single
//! [`resolve`] routine plays any scene against the current score.

mod scenes;

use std::fmt;

use crate::achievement::Achievement;
use crate::error::QuestResult;
use crate::present::{Console, Tone};
use crate::rng::RandomSource;
use crate::validator::choose_numbered;

/// The encounters of the forest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EncounterKind {
    /// The wizard's riddle at the end of the glowing light.
    Riddle,
    /// The friendly squirrel in the bushes.
    Squirrel,
    /// The monster in the bushes.
    Monster,
    /// The fork after the riddle.
    FinalPath,
    /// The rune-locked vault on the trail.
    TreasureVault,
    /// The ghost on the trail.
    Ghostly,
}

impl EncounterKind {
    /// All encounters, in the order they appear in the forest.
    pub const ALL: [EncounterKind; 6] = [
        Self::Riddle,
        Self::Squirrel,
        Self::Monster,
        Self::FinalPath,
        Self::TreasureVault,
        Self::Ghostly,
    ];

    /// The static scene for this encounter.
    pub fn scene(self) -> &'static Scene {
        match self {
            Self::Riddle => &scenes::RIDDLE,
            Self::Squirrel => &scenes::SQUIRREL,
            Self::Monster => &scenes::MONSTER,
            Self::FinalPath => &scenes::FINAL_PATH,
            Self::TreasureVault => &scenes::TREASURE_VAULT,
            Self::Ghostly => &scenes::GHOSTLY,
        }
    }

    /// Achievement the dispatcher awards when this encounter is won.
    ///
    /// The riddle has none: its reward comes with the correct answer itself.
    pub fn victory_achievement(self) -> Option<Achievement> {
        match self {
            Self::Riddle => None,
            Self::Squirrel => Some(Achievement::FriendOfTheForest),
            Self::Monster => Some(Achievement::MonsterSlayer),
            Self::FinalPath => Some(Achievement::ForestExplorer),
            Self::TreasureVault => Some(Achievement::TreasureHunter),
            Self::Ghostly => Some(Achievement::GhostWhisperer),
        }
    }
}

impl fmt::Display for EncounterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Riddle => "Riddle",
            Self::Squirrel => "Squirrel",
            Self::Monster => "Monster",
            Self::FinalPath => "Final Path",
            Self::TreasureVault => "Treasure Vault",
            Self::Ghostly => "Ghostly",
        };
        f.write_str(name)
    }
}

/// Something an outcome hands to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    /// One unit of a named item.
    Item(&'static str),
    /// An achievement.
    Achievement(Achievement),
}

/// A resolved result: verdict, score change, narration and rewards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    /// Short name of the result (e.g. "trap").
    pub name: &'static str,
    /// Whether the player wins.
    pub won: bool,
    /// Score change.
    pub delta: i64,
    /// Narration shown when this outcome happens.
    pub lines: &'static [&'static str],
    /// Rewards granted.
    pub grants: &'static [Grant],
}

/// What picking an option leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Branch {
    /// Always the same outcome.
    Fixed(Outcome),
    /// A fair draw: `first` on heads, `second` on tails.
    Random {
        /// Outcome on heads.
        first: Outcome,
        /// Outcome on tails.
        second: Outcome,
    },
}

/// One numbered option of a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneOption {
    /// Text shown next to the number.
    pub label: &'static str,
    /// Where the option leads.
    pub branch: Branch,
}

/// A fixed decision point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    /// Narration before the options.
    pub intro: &'static [(Tone, &'static str)],
    /// Prompt shown when asking for a choice.
    pub prompt: &'static str,
    /// Options, numbered from 1.
    pub options: &'static [SceneOption],
}

/// The result of playing one encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Which encounter was played.
    pub kind: EncounterKind,
    /// The option picked (1-based).
    pub choice: usize,
    /// The outcome that happened.
    pub outcome: Outcome,
    /// Score after applying the outcome.
    pub score: i64,
}

impl Resolution {
    /// Whether the player won.
    pub fn won(&self) -> bool {
        self.outcome.won
    }
}

/// Play an encounter: narrate, ask, resolve and apply the score change.
pub fn resolve<C, R>(
    kind: EncounterKind,
    score: i64,
    console: &mut C,
    rng: &mut R,
) -> QuestResult<Resolution>
where
    C: Console + ?Sized,
    R: RandomSource,
{
    let scene = kind.scene();
    for (tone, line) in scene.intro {
        console.display(line, *tone);
    }
    for (number, option) in (1..).zip(scene.options) {
        console.display(&format!("{number}. {}", option.label), Tone::Choice);
    }

    let choice = choose_numbered(console, scene.prompt, scene.options.len())?;
    let outcome = match scene.options[choice - 1].branch {
        Branch::Fixed(outcome) => outcome,
        Branch::Random { first, second } => rng.draw(first, second),
    };
    log::debug!("{kind}: option {choice} resolved to {}", outcome.name);

    let tone = if outcome.won { Tone::Narrative } else { Tone::Danger };
    for line in outcome.lines {
        console.display(line, tone);
    }

    Ok(Resolution {
        kind,
        choice,
        outcome,
        score: score.saturating_add(outcome.delta),
    })
}
