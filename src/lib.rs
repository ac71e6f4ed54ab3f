//! Grid Snake - a bounded-board snake game
//!
//! This library provides:
//! - A fixed-capacity ring queue (collections module)
//! - Core game logic (game module)
//! - Terminal driver pieces: input, rendering, pacing (input, render, modes)

pub mod collections;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
