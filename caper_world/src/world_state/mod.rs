//! World state - the central structure holding all game data.
//!
//! The world is built once from a world description and never replaced.
//! Only the lock flags of locations and the hidden flags of people change,
//! and only in one direction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::entities::{Clue, ClueId, Location, LocationId, Person, PersonId};

/// The complete state of the game world.
///
/// Tables are ordered by identifier so listings are deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    pub locations: BTreeMap<LocationId, Location>,
    pub people: BTreeMap<PersonId, Person>,
    pub clues: BTreeMap<ClueId, Clue>,
    pub starting_location: LocationId,
    /// Where the target really is, if the world description names it.
    pub target_location: Option<LocationId>,
}

impl World {
    /// Create an empty world that starts at `starting_location`.
    pub fn new(starting_location: impl Into<LocationId>) -> Self {
        Self {
            locations: BTreeMap::new(),
            people: BTreeMap::new(),
            clues: BTreeMap::new(),
            starting_location: starting_location.into(),
            target_location: None,
        }
    }

    pub fn with_target_location(mut self, location: impl Into<LocationId>) -> Self {
        self.target_location = Some(location.into());
        self
    }

    /// Add a location to the world.
    pub fn add_location(&mut self, location: Location) -> LocationId {
        let id = location.id.clone();
        self.locations.insert(id.clone(), location);
        id
    }

    /// Add a person to the world.
    pub fn add_person(&mut self, person: Person) -> PersonId {
        let id = person.id.clone();
        self.people.insert(id.clone(), person);
        id
    }

    /// Add a clue to the world.
    pub fn add_clue(&mut self, clue: Clue) -> ClueId {
        let id = clue.id.clone();
        self.clues.insert(id.clone(), clue);
        id
    }

    pub fn location(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn clue(&self, id: &str) -> Option<&Clue> {
        self.clues.get(id)
    }

    pub fn has_location(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    /// Whether `id` names a known, unlocked location.
    pub fn is_unlocked(&self, id: &str) -> bool {
        self.location(id).is_some_and(|loc| !loc.is_locked())
    }

    /// Unlock a location. Unknown identifiers are ignored.
    ///
    /// Returns `true` if a location changed state.
    pub fn unlock_location(&mut self, id: &str) -> bool {
        self.locations
            .get_mut(id)
            .map(Location::unlock)
            .unwrap_or(false)
    }

    /// Reveal a person. Unknown identifiers are ignored.
    ///
    /// Returns `true` if a person changed state.
    pub fn reveal_person(&mut self, id: &str) -> bool {
        self.people
            .get_mut(id)
            .map(Person::reveal)
            .unwrap_or(false)
    }

    /// Get every person at a location, hidden or not.
    pub fn people_at<'a>(&'a self, location: &'a str) -> impl Iterator<Item = &'a Person> + 'a {
        self.people.values().filter(move |p| p.is_at(location))
    }

    /// Get the clue hosted by a location, if any.
    ///
    /// A location hosts at most one clue in practice; if several claim the
    /// same location the first by identifier wins.
    pub fn clue_at(&self, location: &str) -> Option<&Clue> {
        self.clues.values().find(|c| c.is_at(location))
    }

    /// Identifiers of locations currently unlocked.
    pub fn unlocked_locations(&self) -> impl Iterator<Item = &LocationId> {
        self.locations
            .values()
            .filter(|loc| !loc.is_locked())
            .map(|loc| &loc.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_world() -> World {
        let mut world = World::new("Paris");
        world.add_location(Location::new("Paris").with_connection("Berlin"));
        world.add_location(Location::new("Berlin").with_locked(true));
        world.add_person(Person::new("Amelie", "Paris"));
        world.add_person(Person::new("Hans", "Berlin").with_hidden(true));
        world.add_clue(Clue::new("Brandenburg-Gate", "East.").at("Berlin"));
        world
    }

    #[test]
    fn test_unlock_location() {
        let mut world = sample_world();
        assert!(!world.is_unlocked("Berlin"));

        assert!(world.unlock_location("Berlin"));
        assert!(world.is_unlocked("Berlin"));
        assert!(!world.unlock_location("Berlin"));
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut world = sample_world();
        assert!(!world.unlock_location("Atlantis"));
        assert!(!world.reveal_person("Ghost"));
        assert!(!world.is_unlocked("Atlantis"));
    }

    #[test]
    fn test_reveal_person() {
        let mut world = sample_world();
        assert!(world.person("Hans").unwrap().is_hidden());

        assert!(world.reveal_person("Hans"));
        assert!(!world.person("Hans").unwrap().is_hidden());
    }

    #[test]
    fn test_people_at() {
        let world = sample_world();
        let names: Vec<_> = world.people_at("Berlin").map(|p| p.id.as_str()).collect();
        assert_eq!(names, vec!["Hans"]);
        assert_eq!(world.people_at("Rome").count(), 0);
    }

    #[test]
    fn test_clue_at() {
        let world = sample_world();
        assert_eq!(
            world.clue_at("Berlin").map(|c| c.id.as_str()),
            Some("Brandenburg-Gate")
        );
        assert!(world.clue_at("Paris").is_none());
    }

    #[test]
    fn test_unlocked_locations() {
        let world = sample_world();
        let open: Vec<_> = world.unlocked_locations().map(LocationId::as_str).collect();
        assert_eq!(open, vec!["Paris"]);
    }
}
