//! # Caper Engine
//!
//! The world-state engine of the chase game. It owns no data of its own:
//! everything it does is a mutation of a `caper_world::World` plus the
//! per-session turn state.
//!
//! ## Core Components
//!
//! - **reachability**: Depth-first search over unlocked locations
//! - **propagation**: Unlock/reveal side effects of narrative triggers
//! - **commands**: Free-text command parsing and dispatch
//! - **session**: The turn loop and the catch check

pub mod commands;
pub mod error;
pub mod events;
pub mod propagation;
pub mod reachability;
pub mod session;

pub use commands::*;
pub use error::*;
pub use events::*;
pub use propagation::*;
pub use reachability::*;
pub use session::*;
