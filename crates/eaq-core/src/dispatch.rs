//! The per-round state machine.
//!
//! A round starts at the forest clearing, costs a turn per decision stage and
//! ends in a verdict. The only chaining in the graph is the riddle leading on
//! to the final path.

use crate::encounter::{EncounterKind, Grant, resolve};
use crate::error::QuestResult;
use crate::present::{Console, Tone};
use crate::rng::RandomSource;
use crate::state::PlayerState;
use crate::validator::choose;

/// Score for committing to a path at the clearing.
pub const PATH_CHOICE_BONUS: i64 = 10;

/// Score for solving the riddle, on top of the riddle's own reward.
pub const RIDDLE_BONUS: i64 = 20;

/// A state of the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// The clearing where the three paths begin.
    Start,
    /// Rustling bushes: squirrel or monster.
    Bushes,
    /// Faint trail: vault or ghost.
    Trail,
    /// Inside an encounter.
    Encounter(EncounterKind),
}

/// What a stage leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Move on to another stage.
    Continue(Stage),
    /// The round is over.
    Finished(RoundOutcome),
}

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The last encounter played decided the round.
    Resolved(EncounterKind),
    /// The turn budget ran out.
    OutOfTime,
}

/// Final result of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    /// Whether the player won.
    pub won: bool,
    /// Score at the end of the round.
    pub score: i64,
    /// Turn units consumed, including earlier rounds of a loaded game.
    pub turns_taken: u32,
    /// How the round ended.
    pub ending: Ending,
}

/// Routes the player through the forest, one stage at a time.
pub struct Dispatcher<'a, C: Console + ?Sized, R: RandomSource> {
    console: &'a mut C,
    rng: &'a mut R,
}

impl<'a, C: Console + ?Sized, R: RandomSource> Dispatcher<'a, C, R> {
    /// Create a dispatcher over a console and a random source.
    pub fn new(console: &'a mut C, rng: &'a mut R) -> Self {
        Self { console, rng }
    }

    /// Play a full round from the clearing.
    pub fn play_round(&mut self, state: &mut PlayerState) -> QuestResult<RoundOutcome> {
        self.play_from(Stage::Start, state)
    }

    /// Play from an arbitrary stage until the round ends.
    pub fn play_from(
        &mut self,
        mut stage: Stage,
        state: &mut PlayerState,
    ) -> QuestResult<RoundOutcome> {
        loop {
            log::debug!("entering {stage:?}");
            match self.step(stage, state)? {
                Step::Continue(next) => stage = next,
                Step::Finished(outcome) => return Ok(outcome),
            }
        }
    }

    /// Run a single stage.
    pub fn step(&mut self, stage: Stage, state: &mut PlayerState) -> QuestResult<Step> {
        match stage {
            Stage::Start => self.start(state),
            Stage::Bushes => Ok(self.bushes()),
            Stage::Trail => Ok(self.trail()),
            Stage::Encounter(kind) => self.encounter(kind, state),
        }
    }

    fn start(&mut self, state: &mut PlayerState) -> QuestResult<Step> {
        self.say(Tone::Notice, "Welcome to the Epic Adventure Quest!");
        self.say(
            Tone::Narrative,
            "You wake up in a mystical forest, the air shimmering with magic.",
        );
        self.say(
            Tone::Narrative,
            "A glow in the distance catches your eye, but you hear rustling nearby.",
        );
        self.say(Tone::Notice, "Your adventure begins now. Choose wisely!");
        let remaining = format!("You have {} turns remaining.", state.turns_remaining());
        self.say(Tone::Notice, &remaining);
        self.say(Tone::Choice, "1. Follow the glowing light to the west.");
        self.say(
            Tone::Choice,
            "2. Investigate the rustling in the bushes to the east.",
        );
        self.say(Tone::Choice, "3. Explore a faint trail to the north.");

        let choice = choose(
            &mut *self.console,
            "What will you do? (1/2/3): ",
            &["1", "2", "3"],
        )?;
        if state.consume_turn() {
            return Ok(self.out_of_time(state));
        }

        state.score = state.score.saturating_add(PATH_CHOICE_BONUS);
        let next = match choice {
            "1" => {
                self.say(
                    Tone::Narrative,
                    "You head toward the glowing light, feeling drawn to it.",
                );
                Stage::Encounter(EncounterKind::Riddle)
            }
            "2" => {
                self.say(Tone::Narrative, "You cautiously approach the rustling bushes.");
                Stage::Bushes
            }
            _ => {
                self.say(
                    Tone::Narrative,
                    "You follow the faint trail, curious about its secrets.",
                );
                Stage::Trail
            }
        };
        Ok(Step::Continue(next))
    }

    fn bushes(&mut self) -> Step {
        let kind = self.rng.draw(EncounterKind::Squirrel, EncounterKind::Monster);
        match kind {
            EncounterKind::Squirrel => {
                self.say(Tone::Narrative, "The bushes part to reveal a friendly creature!");
            }
            _ => self.say(Tone::Danger, "A terrifying roar echoes from the bushes!"),
        }
        Step::Continue(Stage::Encounter(kind))
    }

    fn trail(&mut self) -> Step {
        let kind = self
            .rng
            .draw(EncounterKind::TreasureVault, EncounterKind::Ghostly);
        match kind {
            EncounterKind::TreasureVault => {
                self.say(Tone::Narrative, "The trail leads to a mysterious structure!");
            }
            _ => self.say(
                Tone::Eerie,
                "A chill runs down your spine as the air grows cold.",
            ),
        }
        Step::Continue(Stage::Encounter(kind))
    }

    fn encounter(&mut self, kind: EncounterKind, state: &mut PlayerState) -> QuestResult<Step> {
        let resolution = resolve(kind, state.score, &mut *self.console, &mut *self.rng)?;
        state.score = resolution.score;
        for grant in resolution.outcome.grants {
            apply_grant(state, *grant);
        }

        if !resolution.won() {
            return Ok(self.finish(state, false, kind));
        }

        if kind == EncounterKind::Riddle {
            state.score = state.score.saturating_add(RIDDLE_BONUS);
            self.say(Tone::Narrative, "The amulet guides you to a final challenge.");
            if state.consume_turn() {
                return Ok(self.out_of_time(state));
            }
            return Ok(Step::Continue(Stage::Encounter(EncounterKind::FinalPath)));
        }

        if let Some(achievement) = kind.victory_achievement() {
            state.unlock(achievement);
        }
        Ok(self.finish(state, true, kind))
    }

    fn out_of_time(&mut self, state: &PlayerState) -> Step {
        self.say(Tone::Danger, "Time runs out! The forest's magic fades.");
        self.say(Tone::Danger, "You're lost in the woods forever. You lose!");
        log::debug!("turn budget exhausted at {}", state.turns_taken);
        Step::Finished(RoundOutcome {
            won: false,
            score: state.score,
            turns_taken: state.turns_taken,
            ending: Ending::OutOfTime,
        })
    }

    fn finish(&self, state: &PlayerState, won: bool, kind: EncounterKind) -> Step {
        Step::Finished(RoundOutcome {
            won,
            score: state.score,
            turns_taken: state.turns_taken,
            ending: Ending::Resolved(kind),
        })
    }

    fn say(&mut self, tone: Tone, text: &str) {
        self.console.display(text, tone);
    }
}

fn apply_grant(state: &mut PlayerState, grant: Grant) {
    match grant {
        Grant::Item(name) => {
            if !state.inventory.add_item(name, 1) {
                log::debug!("inventory full, {name} left behind");
            }
        }
        Grant::Achievement(achievement) => {
            state.unlock(achievement);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievement::Achievement;
    use crate::present::ScriptedConsole;
    use crate::rng::ScriptedRandom;

    fn round(
        inputs: &[&str],
        flips: &[bool],
        state: &mut PlayerState,
    ) -> (RoundOutcome, ScriptedConsole) {
        let mut console = ScriptedConsole::new(inputs.iter().copied());
        let mut rng = ScriptedRandom::new(flips.iter().copied());
        let outcome = Dispatcher::new(&mut console, &mut rng)
            .play_round(state)
            .unwrap();
        (outcome, console)
    }

    #[test]
    fn riddle_then_mountain() {
        let mut state = PlayerState::default();
        let (outcome, _) = round(&["1", "2", "2"], &[], &mut state);
        assert!(outcome.won);
        assert_eq!(outcome.score, 140);
        assert_eq!(outcome.turns_taken, 2);
        assert_eq!(outcome.ending, Ending::Resolved(EncounterKind::FinalPath));
        assert!(state.achievements.contains(Achievement::RiddleMaster));
        assert!(state.achievements.contains(Achievement::ForestExplorer));
        assert_eq!(state.achievements.len(), 2);
        assert_eq!(state.inventory.quantity("amulet"), 1);
    }

    #[test]
    fn riddle_score_before_final_path() {
        let mut state = PlayerState::default();
        let mut console = ScriptedConsole::new(["1", "2"]);
        let mut rng = ScriptedRandom::default();
        let mut dispatcher = Dispatcher::new(&mut console, &mut rng);
        let step = dispatcher.step(Stage::Start, &mut state).unwrap();
        assert_eq!(step, Step::Continue(Stage::Encounter(EncounterKind::Riddle)));
        let step = dispatcher
            .step(Stage::Encounter(EncounterKind::Riddle), &mut state)
            .unwrap();
        assert_eq!(step, Step::Continue(Stage::Encounter(EncounterKind::FinalPath)));
        assert_eq!(state.score, 80);
    }

    #[test]
    fn riddle_wrong_answer_ends_round() {
        let mut state = PlayerState::default();
        let (outcome, console) = round(&["1", "3"], &[], &mut state);
        assert!(!outcome.won);
        assert_eq!(outcome.score, -10);
        assert_eq!(outcome.turns_taken, 1);
        assert!(state.achievements.is_empty());
        assert!(state.inventory.is_empty());
        assert!(!console.saw("final challenge"));
    }

    #[test]
    fn bridge_breaks_after_riddle() {
        let mut state = PlayerState::default();
        let (outcome, _) = round(&["1", "2", "1"], &[false], &mut state);
        assert!(!outcome.won);
        assert_eq!(outcome.score, 40);
        assert!(state.achievements.contains(Achievement::RiddleMaster));
        assert!(!state.achievements.contains(Achievement::ForestExplorer));
    }

    #[test]
    fn bushes_monster_run() {
        let mut state = PlayerState::default();
        let (outcome, console) = round(&["2", "2"], &[false], &mut state);
        assert!(outcome.won);
        assert_eq!(outcome.score, 40);
        assert_eq!(outcome.ending, Ending::Resolved(EncounterKind::Monster));
        assert_eq!(state.achievements.iter().collect::<Vec<_>>(), vec!["Monster Slayer"]);
        assert!(console.saw("terrifying roar"));
    }

    #[test]
    fn bushes_squirrel_meadow() {
        let mut state = PlayerState::default();
        let (outcome, _) = round(&["2", "1"], &[true], &mut state);
        assert!(outcome.won);
        assert_eq!(outcome.score, 60);
        assert!(state.achievements.contains(Achievement::FriendOfTheForest));
    }

    #[test]
    fn trail_vault_trap() {
        let mut state = PlayerState::default();
        let (outcome, _) = round(&["3", "1"], &[true, false], &mut state);
        assert!(!outcome.won);
        assert_eq!(outcome.score, -40);
        assert_eq!(outcome.ending, Ending::Resolved(EncounterKind::TreasureVault));
        assert!(state.achievements.is_empty());
    }

    #[test]
    fn trail_ghost_tribute() {
        let mut state = PlayerState::default();
        let (outcome, console) = round(&["3", "2"], &[false], &mut state);
        assert!(outcome.won);
        assert_eq!(outcome.score, 65);
        assert!(state.achievements.contains(Achievement::GhostWhisperer));
        assert!(!console.lines_with(Tone::Eerie).is_empty());
    }

    #[test]
    fn last_turn_forces_loss_for_every_path() {
        for choice in ["1", "2", "3"] {
            let mut state = PlayerState {
                turns_taken: 9,
                ..PlayerState::default()
            };
            let (outcome, console) = round(&[choice], &[], &mut state);
            assert!(!outcome.won);
            assert_eq!(outcome.ending, Ending::OutOfTime);
            assert_eq!(outcome.turns_taken, 10);
            assert_eq!(outcome.score, 0);
            assert!(console.saw("Time runs out!"));
            assert!(!console.saw("wizard"));
            assert!(!console.saw("bushes part"));
            assert!(!console.saw("faint trail, curious"));
        }
    }

    #[test]
    fn riddle_chain_can_run_out_of_time() {
        let mut state = PlayerState {
            turns_taken: 8,
            ..PlayerState::default()
        };
        let (outcome, console) = round(&["1", "2"], &[], &mut state);
        assert!(!outcome.won);
        assert_eq!(outcome.ending, Ending::OutOfTime);
        assert_eq!(outcome.turns_taken, 10);
        assert_eq!(outcome.score, 80);
        assert!(state.achievements.contains(Achievement::RiddleMaster));
        assert!(!console.saw("The path splits"));
    }

    #[test]
    fn turns_remaining_announced() {
        let mut state = PlayerState {
            turns_taken: 3,
            ..PlayerState::default()
        };
        let (_, console) = round(&["2", "2"], &[false], &mut state);
        assert!(console.saw("You have 7 turns remaining."));
    }

    #[test]
    fn invalid_start_input_does_not_spend_turns() {
        let mut state = PlayerState::default();
        let (outcome, console) = round(&["4", "", "yes", "2", "2"], &[false], &mut state);
        assert_eq!(outcome.turns_taken, 1);
        assert_eq!(console.lines_with(Tone::Retry).len(), 3);
    }

    #[test]
    fn full_inventory_leaves_amulet_behind() {
        let mut state = PlayerState::default();
        for i in 0..10 {
            state.inventory.add_item(&format!("trinket{i}"), 1);
        }
        let (outcome, _) = round(&["1", "2", "2"], &[], &mut state);
        assert!(outcome.won);
        assert!(!state.inventory.has_item("amulet"));
        assert_eq!(state.inventory.len(), 10);
    }

    #[test]
    fn extreme_saved_values_do_not_overflow() {
        let mut state = PlayerState {
            score: i64::MAX - 5,
            ..PlayerState::default()
        };
        state.inventory.add_item("amulet", u32::MAX);
        let (outcome, _) = round(&["1", "2", "2"], &[], &mut state);
        assert!(outcome.won);
        assert_eq!(outcome.score, i64::MAX);
        assert_eq!(state.inventory.quantity("amulet"), u32::MAX);
    }
}
