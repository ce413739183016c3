//! The game loop around the dispatcher.
//!
//! `QuestSession` offers to resume a saved game, plays rounds, reports the
//! result and then lets the player play again, save and leave, or quit.

use crate::config::QuestConfig;
use crate::dispatch::{Dispatcher, RoundOutcome};
use crate::error::{QuestError, QuestResult};
use crate::persist::SaveStore;
use crate::present::{Console, Tone};
use crate::rng::RandomSource;
use crate::state::PlayerState;
use crate::validator::{choose_numbered, confirm};

/// What happened over a whole session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    /// Rounds played to completion.
    pub rounds: u32,
    /// Result of the last completed round.
    pub last: Option<RoundOutcome>,
    /// Whether the game was saved before leaving.
    pub saved: bool,
}

/// Choices on the game-over menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    PlayAgain,
    Save,
    Quit,
}

/// An interactive session.
pub struct QuestSession<C: Console, R: RandomSource, S: SaveStore> {
    config: QuestConfig,
    console: C,
    rng: R,
    store: S,
    state: PlayerState,
}

impl<C: Console, R: RandomSource, S: SaveStore> QuestSession<C, R, S> {
    /// Create a session with a fresh player state.
    pub fn new(config: QuestConfig, console: C, rng: R, store: S) -> Self {
        let state = PlayerState::new(&config);
        Self {
            config,
            console,
            rng,
            store,
            state,
        }
    }

    /// The current player state.
    pub fn state(&self) -> &PlayerState {
        &self.state
    }

    /// The console, e.g. to inspect a scripted transcript.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Consume the session, returning the console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Run until the player quits or saves.
    ///
    /// Running out of input ends the session quietly.
    pub fn run(&mut self) -> QuestResult<SessionSummary> {
        let mut summary = SessionSummary::default();
        match self.run_inner(&mut summary) {
            Ok(()) => Ok(summary),
            Err(QuestError::InputClosed) => {
                log::info!("input closed, ending session");
                Ok(summary)
            }
            Err(e) => Err(e),
        }
    }

    fn run_inner(&mut self, summary: &mut SessionSummary) -> QuestResult<()> {
        self.console
            .display("Welcome to Epic Adventure Quest!", Tone::Notice);
        self.offer_saved_game()?;

        loop {
            let outcome = Dispatcher::new(&mut self.console, &mut self.rng)
                .play_round(&mut self.state)?;
            summary.rounds += 1;
            summary.last = Some(outcome.clone());
            self.report(&outcome);

            match self.menu()? {
                MenuChoice::PlayAgain => {
                    self.state = PlayerState::new(&self.config);
                    self.console.display("", Tone::Notice);
                    self.console.display("A new quest awaits you!", Tone::Notice);
                }
                MenuChoice::Save => {
                    self.store.save(&self.state)?;
                    summary.saved = true;
                    self.console
                        .display("Game saved successfully!", Tone::Narrative);
                    self.farewell();
                    return Ok(());
                }
                MenuChoice::Quit => {
                    self.farewell();
                    return Ok(());
                }
            }
        }
    }

    fn offer_saved_game(&mut self) -> QuestResult<()> {
        let Some(saved) = self.store.load() else {
            self.console.display("Starting a new game!", Tone::Narrative);
            return Ok(());
        };

        self.console.display("A saved game was found.", Tone::Notice);
        if confirm(&mut self.console, "Would you like to load it? (yes/no): ")? {
            self.state = saved;
            self.console
                .display("Game loaded successfully!", Tone::Narrative);
        } else {
            self.console.display("Starting a new game!", Tone::Narrative);
        }
        Ok(())
    }

    fn report(&mut self, outcome: &RoundOutcome) {
        let verdict = if outcome.won { "won" } else { "lost" };
        self.console.display(
            &format!(
                "Game Over! You {verdict}. Your score: {}, Turns taken: {}",
                outcome.score, outcome.turns_taken
            ),
            Tone::Notice,
        );

        if !self.state.inventory.is_empty() {
            self.console.display("Inventory:", Tone::Choice);
            for (item, quantity) in self.state.inventory.iter() {
                self.console
                    .display(&format!("- {item}: {quantity}"), Tone::Choice);
            }
        }

        if !self.state.achievements.is_empty() {
            self.console.display("Achievements:", Tone::Notice);
            for label in self.state.achievements.iter() {
                self.console.display(&format!("- {label}"), Tone::Notice);
            }
        }
    }

    fn menu(&mut self) -> QuestResult<MenuChoice> {
        self.console
            .display("What would you like to do?", Tone::Notice);
        self.console.display("1. Play again", Tone::Choice);
        self.console.display("2. Save game", Tone::Choice);
        self.console.display("3. Quit", Tone::Choice);
        Ok(match choose_numbered(&mut self.console, "Choose (1/2/3): ", 3)? {
            1 => MenuChoice::PlayAgain,
            2 => MenuChoice::Save,
            _ => MenuChoice::Quit,
        })
    }

    fn farewell(&mut self) {
        self.console.display(
            "Thanks for playing! Come back for another adventure!",
            Tone::Notice,
        );
    }
}
