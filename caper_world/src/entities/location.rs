//! Location definitions.

use serde::{Deserialize, Serialize};

use super::LocationId;

/// Display label for a location's lock state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LockState {
    Locked,
    Unlocked,
}

impl std::fmt::Display for LockState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LockState::Locked => f.write_str("Locked"),
            LockState::Unlocked => f.write_str("Unlocked"),
        }
    }
}

/// A location in the game world.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: LocationId,
    locked: bool,
    /// Outgoing edges in authored order. Not required to be symmetric.
    connections: Vec<LocationId>,
}

impl Location {
    /// Create an unlocked location with no connections.
    pub fn new(id: impl Into<LocationId>) -> Self {
        Self {
            id: id.into(),
            locked: false,
            connections: Vec::new(),
        }
    }

    /// Set the initial lock state.
    pub fn with_locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    /// Add a connection, skipping duplicates.
    pub fn with_connection(mut self, to: impl Into<LocationId>) -> Self {
        let to = to.into();
        if !self.connections.contains(&to) {
            self.connections.push(to);
        }
        self
    }

    /// Add several connections in order.
    pub fn with_connections<I, T>(self, to: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<LocationId>,
    {
        to.into_iter().fold(self, |loc, id| loc.with_connection(id))
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn lock_state(&self) -> LockState {
        if self.locked {
            LockState::Locked
        } else {
            LockState::Unlocked
        }
    }

    pub fn connections(&self) -> &[LocationId] {
        &self.connections
    }

    /// Unlock the location. There is no way back to locked.
    ///
    /// Returns `true` if the state changed.
    pub fn unlock(&mut self) -> bool {
        std::mem::replace(&mut self.locked, false)
    }
}
