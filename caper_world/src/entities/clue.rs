//! Clue definitions.

use serde::{Deserialize, Serialize};

use super::{ClueId, LocationId, Unlocks};

/// A clue the player can investigate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clue {
    pub id: ClueId,
    /// The location hosting the clue. `None` means the clue is unreachable.
    pub location: Option<LocationId>,
    hidden: bool,
    pub text: String,
    /// Fired when the player investigates this clue.
    pub unlocks: Unlocks,
}

impl Clue {
    pub fn new(id: impl Into<ClueId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            location: None,
            hidden: false,
            text: text.into(),
            unlocks: Unlocks::default(),
        }
    }

    pub fn at(mut self, location: impl Into<LocationId>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_unlocks(mut self, unlocks: Unlocks) -> Self {
        self.unlocks = unlocks;
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_at(&self, location: &str) -> bool {
        self.location.as_ref().is_some_and(|loc| loc.as_str() == location)
    }
}
