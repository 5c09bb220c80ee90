//! Entity definitions for the game world.

mod clue;
mod location;
mod person;

pub use clue::*;
pub use location::*;
pub use person::*;

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Declares a string-backed identifier. Identifiers are the names authored in
/// the world description, so they double as display names.
macro_rules! name_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self::new(name)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

name_id!(
    /// Identifier of a location.
    LocationId
);
name_id!(
    /// Identifier of a person.
    PersonId
);
name_id!(
    /// Identifier of a clue.
    ClueId
);

/// Side effects fired when a trigger (a conversation or an investigation)
/// succeeds. Missing lists in the world description decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Unlocks {
    #[serde(default)]
    pub unlock_locations: Vec<LocationId>,
    #[serde(default)]
    pub unlock_people: Vec<PersonId>,
}

impl Unlocks {
    pub fn is_empty(&self) -> bool {
        self.unlock_locations.is_empty() && self.unlock_people.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_id_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(LocationId::new("Paris"), 1);

        assert_eq!(map.get("Paris"), Some(&1));
        assert_eq!(map.get("Rome"), None);
    }

    #[test]
    fn test_id_display() {
        assert_eq!(PersonId::from("Ivan").to_string(), "Ivan");
    }

    #[test]
    fn test_unlocks_default_empty() {
        let unlocks: Unlocks = serde_json::from_str("{}").unwrap();
        assert!(unlocks.is_empty());
    }
}
