//! Error types for the quest engine.

use thiserror::Error;

/// Result type for quest operations.
pub type QuestResult<T> = Result<T, QuestError>;

/// Errors that can occur while running a quest.
///
/// Invalid player input is never an error: the validator re-prompts instead.
#[derive(Debug, Error)]
pub enum QuestError {
    /// The input stream ended while a prompt was waiting for an answer.
    #[error("input closed while waiting for a choice")]
    InputClosed,

    /// Reading or writing a save file failed.
    #[error("save file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding a save file failed.
    #[error("could not encode save data: {0}")]
    Serialize(#[from] serde_json::Error),
}
