//! Person definitions.

use serde::{Deserialize, Serialize};

use super::{LocationId, PersonId, Unlocks};

/// A person the player can talk to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    /// Where the person can be found. Never changes.
    pub location: LocationId,
    hidden: bool,
    pub conversation: String,
    /// Fired when the player talks to this person.
    pub unlocks: Unlocks,
}

impl Person {
    /// Create a visible person with nothing to say and nothing to unlock.
    pub fn new(id: impl Into<PersonId>, location: impl Into<LocationId>) -> Self {
        Self {
            id: id.into(),
            location: location.into(),
            hidden: false,
            conversation: String::new(),
            unlocks: Unlocks::default(),
        }
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn with_conversation(mut self, conversation: impl Into<String>) -> Self {
        self.conversation = conversation.into();
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
        self.location.as_str() == location
    }

    /// Make the person visible. There is no way back to hidden.
    ///
    /// Returns `true` if the state changed.
    pub fn reveal(&mut self) -> bool {
        std::mem::replace(&mut self.hidden, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_one_way() {
        let mut person = Person::new("Ivan", "Moscow").with_hidden(true);
        assert!(person.is_hidden());

        assert!(person.reveal());
        assert!(!person.is_hidden());
        assert!(!person.reveal());
    }

    #[test]
    fn test_is_at() {
        let person = Person::new("Ivan", "Moscow");
        assert!(person.is_at("Moscow"));
        assert!(!person.is_at("Paris"));
    }
}
