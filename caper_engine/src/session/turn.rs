//! Turn state and the catch check.

use caper_world::{GameConfig, LocationId, PersonId, World};
use std::collections::HashSet;

/// Mutable per-session state. Created at session start, discarded at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnState {
    pub current_location: LocationId,
    spoken: HashSet<PersonId>,
    /// Missed catch attempts so far.
    pub tries: u32,
    pub won: bool,
}

impl TurnState {
    pub fn new(start: impl Into<LocationId>) -> Self {
        Self {
            current_location: start.into(),
            spoken: HashSet::new(),
            tries: 0,
            won: false,
        }
    }

    pub fn has_spoken_to(&self, person: &str) -> bool {
        self.spoken.contains(person)
    }

    pub fn record_spoken(&mut self, person: PersonId) {
        self.spoken.insert(person);
    }

    pub fn spoken_count(&self) -> usize {
        self.spoken.len()
    }
}

/// Where the target is and how many attempts the player gets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatchRules {
    pub target_location: LocationId,
    pub target_name: String,
    pub max_tries: u32,
}

impl CatchRules {
    pub fn new(
        target_location: impl Into<LocationId>,
        target_name: impl Into<String>,
        max_tries: u32,
    ) -> Self {
        Self {
            target_location: target_location.into(),
            target_name: target_name.into(),
            max_tries,
        }
    }

    /// Build rules from config, letting the world override the target location.
    pub fn for_world(world: &World, config: &GameConfig) -> Self {
        let target_location = world
            .target_location
            .clone()
            .unwrap_or_else(|| config.target_location.clone());
        Self::new(target_location, config.target_name.clone(), config.max_tries)
    }

    /// Try to catch the target from `current_location`.
    ///
    /// Returns whether the catch succeeded and the new try count. A hit leaves
    /// the count unchanged; a miss increments it.
    pub fn attempt_catch(&self, current_location: &str, tries: u32) -> (bool, u32) {
        if current_location == self.target_location.as_str() {
            (true, tries)
        } else {
            (false, tries + 1)
        }
    }

    pub fn remaining(&self, tries: u32) -> u32 {
        self.max_tries.saturating_sub(tries)
    }

    /// Missed catches after which the game is lost.
    pub fn loss_threshold(&self) -> u32 {
        self.max_tries.saturating_sub(1)
    }

    /// Whether the next turn is lost before it runs. At least one catch must
    /// have missed, so a one-try game still gets its attempt.
    pub fn is_out_of_tries(&self, tries: u32) -> bool {
        tries > 0 && tries >= self.loss_threshold()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attempt_catch() {
        let rules = CatchRules::new("Moscow", "Carmen Sandiego", 3);

        assert_eq!(rules.attempt_catch("Moscow", 0), (true, 0));
        assert_eq!(rules.attempt_catch("Moscow", 1), (true, 1));
        assert_eq!(rules.attempt_catch("Paris", 0), (false, 1));
        assert_eq!(rules.attempt_catch("Paris", 1), (false, 2));
    }

    #[test]
    fn test_remaining_and_threshold() {
        let rules = CatchRules::new("Moscow", "Carmen Sandiego", 3);
        assert_eq!(rules.remaining(1), 2);
        assert_eq!(rules.remaining(5), 0);
        assert_eq!(rules.loss_threshold(), 2);
    }

    #[test]
    fn test_out_of_tries() {
        let rules = CatchRules::new("Moscow", "Carmen Sandiego", 3);
        assert!(!rules.is_out_of_tries(0));
        assert!(!rules.is_out_of_tries(1));
        assert!(rules.is_out_of_tries(2));

        let single = CatchRules::new("Moscow", "Carmen Sandiego", 1);
        assert_eq!(single.loss_threshold(), 0);
        assert!(!single.is_out_of_tries(0));
        assert!(single.is_out_of_tries(1));
    }

    #[test]
    fn test_world_overrides_config_target() {
        let config = GameConfig::default();

        let world = World::new("Paris");
        assert_eq!(
            CatchRules::for_world(&world, &config).target_location.as_str(),
            "Moscow"
        );

        let world = World::new("Paris").with_target_location("Cairo");
        assert_eq!(
            CatchRules::for_world(&world, &config).target_location.as_str(),
            "Cairo"
        );
    }

    #[test]
    fn test_spoken_set() {
        let mut turn = TurnState::new("Paris");
        turn.record_spoken("Amelie".into());
        turn.record_spoken("Amelie".into());

        assert!(turn.has_spoken_to("Amelie"));
        assert!(!turn.has_spoken_to("Hans"));
        assert_eq!(turn.spoken_count(), 1);
    }
}
