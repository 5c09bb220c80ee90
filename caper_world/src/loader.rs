//! World description loader.
//!
//! A world description is a JSON document keyed by identifier:
//!
//! ```json
//! {
//!   "starting-location": "Paris",
//!   "locations": { "Paris": { "starts-locked": false, "connections": ["Berlin"] } },
//!   "people": { "Amelie": { "location": "Paris", "conversation": "..." } },
//!   "clues": { "Brandenburg-Gate": { "location": "Berlin", "clue-text": "..." } }
//! }
//! ```

use serde::Deserialize;
use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::entities::{Clue, ClueId, Location, LocationId, Person, PersonId, Unlocks};
use crate::world_state::World;

/// Errors that prevent a session from starting.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("That file does not exist.")]
    NotFound(PathBuf),

    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed world description: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("starting location {0} is not one of the world's locations")]
    UnknownStartingLocation(LocationId),
}

fn locked_by_default() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct LocationDescription {
    #[serde(default = "locked_by_default")]
    starts_locked: bool,
    #[serde(default)]
    connections: Vec<LocationId>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct PersonDescription {
    location: LocationId,
    #[serde(default)]
    starts_hidden: bool,
    #[serde(default)]
    conversation: String,
    #[serde(flatten)]
    unlocks: Unlocks,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ClueDescription {
    #[serde(default)]
    location: Option<LocationId>,
    #[serde(default)]
    starts_hidden: bool,
    #[serde(default)]
    clue_text: String,
    #[serde(flatten)]
    unlocks: Unlocks,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct WorldDescription {
    starting_location: LocationId,
    #[serde(default)]
    target_location: Option<LocationId>,
    #[serde(default)]
    locations: BTreeMap<LocationId, LocationDescription>,
    #[serde(default)]
    people: BTreeMap<PersonId, PersonDescription>,
    #[serde(default)]
    clues: BTreeMap<ClueId, ClueDescription>,
}

impl WorldDescription {
    fn into_world(self) -> Result<World, LoadError> {
        if !self.locations.contains_key(&self.starting_location) {
            return Err(LoadError::UnknownStartingLocation(self.starting_location));
        }

        let mut world = World::new(self.starting_location);
        world.target_location = self.target_location;

        for (id, desc) in self.locations {
            world.add_location(
                Location::new(id)
                    .with_locked(desc.starts_locked)
                    .with_connections(desc.connections),
            );
        }

        for (id, desc) in self.people {
            world.add_person(
                Person::new(id, desc.location)
                    .with_hidden(desc.starts_hidden)
                    .with_conversation(desc.conversation)
                    .with_unlocks(desc.unlocks),
            );
        }

        for (id, desc) in self.clues {
            let mut clue = Clue::new(id, desc.clue_text)
                .with_hidden(desc.starts_hidden)
                .with_unlocks(desc.unlocks);
            clue.location = desc.location;
            world.add_clue(clue);
        }

        warn_dangling_references(&world);
        Ok(world)
    }
}

/// Log references to ids the world does not define. They are tolerated:
/// the engine ignores unknown targets at runtime.
fn warn_dangling_references(world: &World) {
    let check_unlocks = |owner: &str, unlocks: &Unlocks| {
        for loc in &unlocks.unlock_locations {
            if !world.has_location(loc.as_str()) {
                tracing::warn!(%owner, location = %loc, "unlock target is not a known location");
            }
        }
        for person in &unlocks.unlock_people {
            if world.person(person.as_str()).is_none() {
                tracing::warn!(%owner, person = %person, "reveal target is not a known person");
            }
        }
    };

    for loc in world.locations.values() {
        for next in loc.connections() {
            if !world.has_location(next.as_str()) {
                tracing::warn!(from = %loc.id, to = %next, "connection to unknown location");
            }
        }
    }
    for person in world.people.values() {
        if !world.has_location(person.location.as_str()) {
            tracing::warn!(person = %person.id, location = %person.location, "person placed at unknown location");
        }
        check_unlocks(person.id.as_str(), &person.unlocks);
    }
    for clue in world.clues.values() {
        match &clue.location {
            Some(loc) if !world.has_location(loc.as_str()) => {
                tracing::warn!(clue = %clue.id, location = %loc, "clue placed at unknown location");
            }
            None => tracing::warn!(clue = %clue.id, "clue has no location and cannot be found"),
            _ => {}
        }
        check_unlocks(clue.id.as_str(), &clue.unlocks);
    }
    if let Some(target) = &world.target_location {
        if !world.has_location(target.as_str()) {
            tracing::warn!(location = %target, "target location is not a known location");
        }
    }
}

/// Decode a world from its JSON description.
pub fn parse_world(json: &str) -> Result<World, LoadError> {
    let description: WorldDescription = serde_json::from_str(json)?;
    description.into_world()
}

/// Load a world from a JSON file.
pub fn load_world(path: impl AsRef<Path>) -> Result<World, LoadError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let world = parse_world(&json)?;
    tracing::info!(
        path = %path.display(),
        locations = world.locations.len(),
        people = world.people.len(),
        clues = world.clues.len(),
        "loaded world"
    );
    Ok(world)
}
