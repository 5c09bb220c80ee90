//! Unlock propagation - the world-side effects of narrative triggers.

use caper_world::{LocationId, PersonId, Unlocks, World};

use crate::events::{Trigger, TriggerKind};

/// What a trigger actually changed. Targets that were already unlocked or
/// visible are not listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Propagation {
    pub unlocked: Vec<LocationId>,
    pub revealed: Vec<PersonId>,
}

impl Propagation {
    pub fn is_empty(&self) -> bool {
        self.unlocked.is_empty() && self.revealed.is_empty()
    }
}

fn unlocks_for(world: &World, trigger: Trigger<'_>) -> Option<Unlocks> {
    match trigger.kind {
        TriggerKind::Talk => world.person(trigger.target).map(|p| p.unlocks.clone()),
        TriggerKind::Investigate => world.clue(trigger.target).map(|c| c.unlocks.clone()),
    }
}

/// Apply a trigger's side effects to the world.
///
/// Unknown targets, and unknown ids in the unlock lists, are ignored.
/// Applying the same trigger again changes nothing.
pub fn apply_trigger(world: &mut World, trigger: Trigger<'_>) -> Propagation {
    let Some(unlocks) = unlocks_for(world, trigger) else {
        tracing::debug!(kind = ?trigger.kind, target = trigger.target, "trigger target unknown");
        return Propagation::default();
    };

    let mut result = Propagation::default();
    for loc in unlocks.unlock_locations {
        if world.unlock_location(loc.as_str()) {
            tracing::debug!(location = %loc, "unlocked");
            result.unlocked.push(loc);
        }
    }
    for person in unlocks.unlock_people {
        if world.reveal_person(person.as_str()) {
            tracing::debug!(person = %person, "revealed");
            result.revealed.push(person);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use caper_world::{Clue, Location, Person};

    fn world() -> World {
        let mut world = World::new("Paris");
        world.add_location(Location::new("Paris").with_connection("Berlin"));
        world.add_location(Location::new("Berlin").with_locked(true));
        world.add_location(Location::new("Moscow").with_locked(true));
        world.add_person(Person::new("Amelie", "Paris").with_unlocks(Unlocks {
            unlock_locations: vec!["Berlin".into(), "Atlantis".into()],
            unlock_people: vec!["Hans".into()],
        }));
        world.add_person(Person::new("Hans", "Berlin").with_hidden(true));
        world.add_clue(
            Clue::new("Brandenburg-Gate", "East.")
                .at("Berlin")
                .with_unlocks(Unlocks {
                    unlock_locations: vec!["Moscow".into()],
                    unlock_people: vec![],
                }),
        );
        world
    }

    #[test]
    fn test_talk_unlocks_and_reveals() {
        let mut world = world();
        let result = apply_trigger(&mut world, Trigger::talk("Amelie"));

        assert_eq!(result.unlocked, vec![LocationId::new("Berlin")]);
        assert_eq!(result.revealed, vec![PersonId::new("Hans")]);
        assert!(world.is_unlocked("Berlin"));
        assert!(!world.person("Hans").unwrap().is_hidden());
    }

    #[test]
    fn test_investigate_unlocks() {
        let mut world = world();
        let result = apply_trigger(&mut world, Trigger::investigate("Brandenburg-Gate"));

        assert_eq!(result.unlocked, vec![LocationId::new("Moscow")]);
        assert!(world.is_unlocked("Moscow"));
    }

    #[test]
    fn test_idempotent() {
        let mut world = world();
        apply_trigger(&mut world, Trigger::talk("Amelie"));
        let once: Vec<_> = world.unlocked_locations().cloned().collect();

        let second = apply_trigger(&mut world, Trigger::talk("Amelie"));
        let twice: Vec<_> = world.unlocked_locations().cloned().collect();

        assert!(second.is_empty());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_unknown_target_is_noop() {
        let mut world = world();
        assert!(apply_trigger(&mut world, Trigger::talk("Ghost")).is_empty());
        // A clue id is not a person id.
        assert!(apply_trigger(&mut world, Trigger::talk("Brandenburg-Gate")).is_empty());
        assert!(!world.is_unlocked("Berlin"));
    }

    #[test]
    fn test_person_without_unlocks() {
        let mut world = world();
        assert!(apply_trigger(&mut world, Trigger::talk("Hans")).is_empty());
    }
}
