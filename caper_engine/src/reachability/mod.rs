//! Reachability over the location graph.

use caper_world::World;
use std::collections::HashSet;

/// Check whether `goal` can be travelled to from `start`.
///
/// Depth-first search where only unlocked locations are expanded, so the
/// goal itself must be unlocked unless it is the start. The start is never
/// checked for its lock state. Unknown goals are unreachable.
///
/// Uses an explicit stack; neighbors are pushed in reverse so they are
/// visited in authored order.
pub fn is_reachable(world: &World, start: &str, goal: &str) -> bool {
    if !world.has_location(goal) {
        return false;
    }
    if start == goal {
        return true;
    }

    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack = vec![start];

    while let Some(current) = stack.pop() {
        if current == goal {
            return true;
        }
        if !visited.insert(current) {
            continue;
        }

        let Some(location) = world.location(current) else {
            continue;
        };
        for next in location.connections().iter().rev() {
            let next = next.as_str();
            if world.is_unlocked(next) && !visited.contains(next) {
                stack.push(next);
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use caper_world::Location;

    /// A - B - C chain with a side branch A - D, plus a cycle C - A.
    fn chain(b_locked: bool) -> World {
        let mut world = World::new("A");
        world.add_location(Location::new("A").with_connections(["B", "D"]));
        world.add_location(
            Location::new("B")
                .with_locked(b_locked)
                .with_connections(["A", "C"]),
        );
        world.add_location(Location::new("C").with_connections(["A"]));
        world.add_location(Location::new("D").with_locked(true));
        world
    }

    #[test]
    fn test_path_through_unlocked_nodes() {
        let world = chain(false);
        assert!(is_reachable(&world, "A", "B"));
        assert!(is_reachable(&world, "A", "C"));
        assert!(is_reachable(&world, "C", "B"));
    }

    #[test]
    fn test_locked_intermediate_blocks_path() {
        let world = chain(true);
        assert!(!is_reachable(&world, "A", "B"));
        assert!(!is_reachable(&world, "A", "C"));
    }

    #[test]
    fn test_locked_goal_unreachable_even_when_adjacent() {
        let world = chain(false);
        assert!(!is_reachable(&world, "A", "D"));
    }

    #[test]
    fn test_self_travel_ignores_lock_state() {
        let world = chain(false);
        assert!(is_reachable(&world, "D", "D"));
        assert!(is_reachable(&world, "A", "A"));
    }

    #[test]
    fn test_locked_start_can_still_leave() {
        let world = chain(true);
        // B is locked but the player may stand in it.
        assert!(is_reachable(&world, "B", "C"));
    }

    #[test]
    fn test_unknown_goal() {
        let world = chain(false);
        assert!(!is_reachable(&world, "A", "Atlantis"));
    }

    #[test]
    fn test_directed_edges() {
        let mut world = World::new("A");
        world.add_location(Location::new("A"));
        world.add_location(Location::new("B").with_connection("A"));

        assert!(is_reachable(&world, "B", "A"));
        assert!(!is_reachable(&world, "A", "B"));
    }

    #[test]
    fn test_terminates_on_cycles() {
        let mut world = World::new("A");
        world.add_location(Location::new("A").with_connection("B"));
        world.add_location(Location::new("B").with_connection("C"));
        world.add_location(Location::new("C").with_connection("A"));
        world.add_location(Location::new("Z"));

        assert!(!is_reachable(&world, "A", "Z"));
    }

    #[test]
    fn test_dangling_connection_is_skipped() {
        let mut world = World::new("A");
        world.add_location(Location::new("A").with_connections(["Ghost", "B"]));
        world.add_location(Location::new("B"));

        assert!(is_reachable(&world, "A", "B"));
    }
}
