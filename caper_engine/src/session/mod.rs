//! The game loop.
//!
//! A session owns the world and the turn state for its whole lifetime and
//! processes one command at a time:
//!
//! 1. A quit keyword ends the session as `Quit`
//! 2. Too many missed catches ends it as `LostByTries`, before the command runs
//! 3. Otherwise the command is dispatched; a successful catch ends it as `Won`

mod turn;

pub use turn::*;

use caper_world::{GameConfig, World};
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use uuid::Uuid;

use crate::commands::dispatch;
use crate::error::SessionError;

const PROMPT: &str = "What would you like to do? ";
const REJECTION: &str = "This is not an acceptable action. Try Again.";

/// Unique identifier for a play session, used to correlate log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the session stands after a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    Playing,
    Won,
    LostByTries,
    Quit,
}

impl SessionState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionState::Playing)
    }
}

/// The result of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub state: SessionState,
    pub report: Vec<String>,
}

/// Summary of a finished session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOutcome {
    pub state: SessionState,
    /// Missed catch attempts.
    pub tries: u32,
    /// Commands read, including the one that ended the session.
    pub turns: u32,
}

impl SessionOutcome {
    /// Only a catch counts as a win.
    pub fn won(&self) -> bool {
        self.state == SessionState::Won
    }
}

/// A single play session.
pub struct GameLoop {
    id: SessionId,
    world: World,
    config: GameConfig,
    rules: CatchRules,
    turn: TurnState,
    state: SessionState,
    turns: u32,
}

impl GameLoop {
    /// Start a session at the world's starting location.
    pub fn new(world: World, config: GameConfig) -> Self {
        let rules = CatchRules::for_world(&world, &config);
        let turn = TurnState::new(world.starting_location.clone());
        Self {
            id: SessionId::new(),
            world,
            config,
            rules,
            turn,
            state: SessionState::Playing,
            turns: 0,
        }
    }

    pub fn turn_state(&self) -> &TurnState {
        &self.turn
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn outcome(&self) -> SessionOutcome {
        SessionOutcome {
            state: self.state,
            tries: self.turn.tries,
            turns: self.turns,
        }
    }

    fn win_message(&self) -> String {
        format!("You have caught {}! You win the game!", self.rules.target_name)
    }

    fn finish(&mut self, state: SessionState, line: String) -> Step {
        self.state = state;
        tracing::info!(?state, tries = self.turn.tries, turns = self.turns, "session over");
        Step {
            state,
            report: vec![line],
        }
    }

    /// Process one command.
    ///
    /// Calling this after the session has ended changes nothing.
    pub fn step(&mut self, command: &str) -> Step {
        if self.state.is_terminal() {
            return Step {
                state: self.state,
                report: Vec::new(),
            };
        }
        self.turns += 1;

        if self.config.is_quit(command) {
            return self.finish(SessionState::Quit, "end game".to_string());
        }
        if self.rules.is_out_of_tries(self.turn.tries) {
            return self.finish(
                SessionState::LostByTries,
                "You ran out of tries and lost the game.".to_string(),
            );
        }
        if self.turn.won {
            let line = self.win_message();
            return self.finish(SessionState::Won, line);
        }

        let outcome = dispatch(command, &mut self.world, &mut self.turn, &self.rules);
        let mut report = outcome.report;

        if self.turn.won {
            let line = self.win_message();
            let mut step = self.finish(SessionState::Won, line);
            report.append(&mut step.report);
            step.report = report;
            return step;
        }
        if !outcome.handled {
            report.push(REJECTION.to_string());
        }

        Step {
            state: SessionState::Playing,
            report,
        }
    }

    /// Drive the session over a line-oriented text surface until it ends.
    ///
    /// End of input ends the session as `Quit`.
    pub fn run<R, W>(&mut self, mut input: R, mut output: W) -> Result<SessionOutcome, SessionError>
    where
        R: BufRead,
        W: Write,
    {
        let span = tracing::info_span!("session", id = %self.id);
        let _enter = span.enter();
        tracing::info!(start = %self.turn.current_location, target = %self.rules.target_location, "session started");

        writeln!(output, "You are at {}", self.turn.current_location)?;

        let mut line = String::new();
        while !self.state.is_terminal() {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                self.state = SessionState::Quit;
                tracing::info!("input closed");
                break;
            }

            let step = self.step(line.trim_end_matches(['\r', '\n']));
            for report_line in &step.report {
                writeln!(output, "{report_line}")?;
            }
        }

        Ok(self.outcome())
    }
}
