//! # Caper World
//!
//! The world model for the chase game: locations, people and clues, the
//! loader that decodes a world description, and the game configuration.
//! This crate holds state and one-way state transitions only; the rules
//! that drive them live in `caper_engine`.

pub mod config;
pub mod entities;
pub mod loader;
pub mod world_state;

pub use config::*;
pub use entities::*;
pub use loader::*;
pub use world_state::*;
