//! Encounter engine for Epic Adventure Quest.
//!
//! Models the forest adventure as a small state machine: a choice validator,
//! one outcome resolver per encounter, a dispatcher that routes the player
//! through the branching graph under a turn budget, and the player state that
//! accumulates score, inventory and achievements. Rendering, input and save
//! files are reached through the [`Console`] and [`SaveStore`] traits.

pub mod achievement;
pub mod config;
pub mod dispatch;
pub mod encounter;
pub mod error;
pub mod inventory;
pub mod persist;
pub mod present;
pub mod rng;
pub mod session;
pub mod state;
pub mod stats;
pub mod validator;

pub use achievement::{Achievement, Achievements};
pub use config::QuestConfig;
pub use dispatch::{Dispatcher, Ending, RoundOutcome};
pub use encounter::EncounterKind;
pub use error::{QuestError, QuestResult};
pub use inventory::Inventory;
pub use persist::{JsonFileStore, SaveGame, SaveStore};
pub use present::{Console, ScriptedConsole, Tone};
pub use rng::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use session::{QuestSession, SessionSummary};
pub use state::PlayerState;
pub use stats::CharacterStats;
