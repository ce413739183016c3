//! Presentation boundary.
//!
//! The engine never prints. It hands lines and prompts to a [`Console`],
//! tagging each line with a [`Tone`] the front-end is free to render however
//! it likes.

use std::collections::VecDeque;

use crate::error::{QuestError, QuestResult};

/// Style hint attached to every displayed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// Calm narration and good news.
    Narrative,
    /// Threats, failures and losses.
    Danger,
    /// Banners, headings and game-over lines.
    Notice,
    /// A selectable option.
    Choice,
    /// Supernatural narration.
    Eerie,
    /// Text asking for input.
    Prompt,
    /// The message shown after rejected input.
    Retry,
}

/// Where narrative text goes and player input comes from.
pub trait Console {
    /// Show a line of text. Fire-and-forget.
    fn display(&mut self, text: &str, tone: Tone);

    /// Show a prompt and block until the player answers.
    ///
    /// Returns [`QuestError::InputClosed`] once no more input will arrive.
    fn prompt(&mut self, text: &str) -> QuestResult<String>;
}

/// A console fed from a fixed script of answers.
///
/// Every displayed line and prompt is recorded so a run can be inspected
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    transcript: Vec<(Tone, String)>,
}

impl ScriptedConsole {
    /// Create a console that answers prompts with `inputs`, in order.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    /// Queue another answer.
    pub fn push_input(&mut self, input: impl Into<String>) {
        self.inputs.push_back(input.into());
    }

    /// Answers not consumed yet.
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }

    /// Every line shown so far, prompts included.
    pub fn transcript(&self) -> &[(Tone, String)] {
        &self.transcript
    }

    /// Lines shown with the given tone.
    pub fn lines_with(&self, tone: Tone) -> Vec<&str> {
        self.transcript
            .iter()
            .filter(|(t, _)| *t == tone)
            .map(|(_, text)| text.as_str())
            .collect()
    }

    /// Whether any shown line contains `needle`.
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|(_, text)| text.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn display(&mut self, text: &str, tone: Tone) {
        self.transcript.push((tone, text.to_string()));
    }

    fn prompt(&mut self, text: &str) -> QuestResult<String> {
        self.transcript.push((Tone::Prompt, text.to_string()));
        self.inputs.pop_front().ok_or(QuestError::InputClosed)
    }
}
