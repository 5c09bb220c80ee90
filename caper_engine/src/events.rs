//! Narrative triggers the propagator reacts to.

use serde::{Deserialize, Serialize};

/// The kind of action that fires a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerKind {
    Talk,
    Investigate,
}

/// A narrative action against a named target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trigger<'a> {
    pub kind: TriggerKind,
    pub target: &'a str,
}

impl<'a> Trigger<'a> {
    /// Talking to a person.
    pub fn talk(person: &'a str) -> Self {
        Self {
            kind: TriggerKind::Talk,
            target: person,
        }
    }

    /// Investigating a clue.
    pub fn investigate(clue: &'a str) -> Self {
        Self {
            kind: TriggerKind::Investigate,
            target: clue,
        }
    }
}
