//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The driver talks to it through [`GameEngine`]: start a round, aim the snake,
//! tick, then read back the food cell and the body for drawing.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;

// Re-export commonly used types
pub use action::{Axis, Direction};
pub use config::GameConfig;
pub use engine::{GameEngine, INITIAL_LENGTH, TickOutcome};
pub use error::GameError;
pub use state::{CollisionType, Movement, Position};
