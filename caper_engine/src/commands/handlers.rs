//! Command handlers - routes a parsed command against the world and turn state.

use caper_world::World;

use super::Command;
use crate::events::Trigger;
use crate::propagation::{apply_trigger, Propagation};
use crate::reachability::is_reachable;
use crate::session::{CatchRules, TurnState};

/// Result of dispatching one raw command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// `false` when the command matched no known keyword.
    pub handled: bool,
    /// Report lines for the player, in order.
    pub report: Vec<String>,
}

impl DispatchOutcome {
    fn handled(report: Vec<String>) -> Self {
        Self {
            handled: true,
            report,
        }
    }

    fn unhandled() -> Self {
        Self::default()
    }
}

/// Parse and run one command.
///
/// Unhandled commands leave both the world and the turn state untouched.
pub fn dispatch(
    raw: &str,
    world: &mut World,
    turn: &mut TurnState,
    rules: &CatchRules,
) -> DispatchOutcome {
    let Some(command) = Command::parse(raw) else {
        tracing::debug!(command = raw, "unrecognized command");
        return DispatchOutcome::unhandled();
    };
    tracing::debug!(?command, location = %turn.current_location, "dispatching");

    let report = match command {
        Command::DisplayPeople => display_people(world, turn),
        Command::TalkTo(name) => talk_to(world, turn, name),
        Command::DisplayLocations => display_locations(world),
        Command::TravelTo(name) => travel_to(world, turn, name),
        Command::DisplayClue => display_clue(world, turn),
        Command::Investigate(name) => investigate(world, turn, name),
        Command::Catch => catch(turn, rules),
    };
    DispatchOutcome::handled(report)
}

fn display_people(world: &World, turn: &TurnState) -> Vec<String> {
    world
        .people_at(turn.current_location.as_str())
        .filter(|p| !p.is_hidden())
        .map(|p| {
            let status = if turn.has_spoken_to(p.id.as_str()) {
                p.conversation.as_str()
            } else {
                "Not Spoken To Yet"
            };
            format!("{}     {}", p.id, status)
        })
        .collect()
}

fn talk_to(world: &mut World, turn: &mut TurnState, name: &str) -> Vec<String> {
    let Some(person) = world.person(name) else {
        return vec![format!("There is no one named {name} here.")];
    };
    if !person.is_at(turn.current_location.as_str()) {
        return vec![format!("{name} is not in {}", turn.current_location)];
    }

    let report = vec![person.conversation.clone()];
    turn.record_spoken(person.id.clone());
    let changed = apply_trigger(world, Trigger::talk(name));
    log_propagation(world, &changed);
    report
}

fn log_propagation(world: &World, changed: &Propagation) {
    if changed.is_empty() {
        return;
    }
    tracing::debug!(
        unlocked = ?changed.unlocked,
        revealed = ?changed.revealed,
        open_locations = world.unlocked_locations().count(),
        "trigger changed the world"
    );
}

fn display_locations(world: &World) -> Vec<String> {
    world
        .locations
        .values()
        .map(|loc| format!("{}     {}", loc.id, loc.lock_state()))
        .collect()
}

fn travel_to(world: &World, turn: &mut TurnState, name: &str) -> Vec<String> {
    let Some(destination) = world.location(name) else {
        return vec![format!("The location {name} does not exist.")];
    };

    if is_reachable(world, turn.current_location.as_str(), name) {
        turn.current_location = destination.id.clone();
        tracing::debug!(location = %turn.current_location, "travelled");
        vec![format!("You have traveled to {name}")]
    } else {
        vec![format!("You are unable to travel to {name}")]
    }
}

fn display_clue(world: &World, turn: &TurnState) -> Vec<String> {
    match world.clue_at(turn.current_location.as_str()) {
        Some(clue) if clue.is_hidden() => vec![format!("{} Clue", clue.id)],
        Some(clue) => vec![format!("{} Clue: {}", clue.id, clue.text)],
        None => vec!["There is no clue here.".to_string()],
    }
}

fn investigate(world: &mut World, turn: &TurnState, name: &str) -> Vec<String> {
    let Some(clue) = world.clue(name) else {
        return vec!["An investigation can not be made here.".to_string()];
    };
    if !clue.is_at(turn.current_location.as_str()) {
        return vec!["This place does not exist in your current location.".to_string()];
    }

    let report = vec![clue.text.clone()];
    let changed = apply_trigger(world, Trigger::investigate(name));
    log_propagation(world, &changed);
    report
}

fn catch(turn: &mut TurnState, rules: &CatchRules) -> Vec<String> {
    let (won, tries) = rules.attempt_catch(turn.current_location.as_str(), turn.tries);
    turn.tries = tries;
    turn.won = won;

    if won {
        Vec::new()
    } else {
        vec![format!(
            "Nice try but {} is not here! You have {} tries left.",
            rules.target_name,
            rules.remaining(tries)
        )]
    }
}
