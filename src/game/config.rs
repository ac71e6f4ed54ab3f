use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::state::Position;

/// Largest accepted board side. The body queue is sized to the full area.
pub const MAX_GRID_SIDE: usize = 1024;

/// Configuration for the game and its driver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Width of the game grid
    pub grid_width: usize,
    /// Height of the game grid
    pub grid_height: usize,

    // Driver pacing
    /// Duration of one frame in milliseconds
    pub frame_millis: u64,
    /// Frames per simulation tick
    pub update_interval: u32,

    /// Fixed seed for food placement, entropy when absent
    pub seed: Option<u64>,
    /// Start a new round as soon as the snake dies
    pub auto_restart: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 15,
            grid_height: 15,
            frame_millis: 16,
            update_interval: 8,
            seed: None,
            auto_restart: true,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Read a JSON configuration file. Missing fields take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;
        Ok(config)
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), String> {
        if self.grid_width < 2 || self.grid_height < 2 {
            return Err(format!(
                "grid must be at least 2x2, got {}x{}",
                self.grid_width, self.grid_height
            ));
        }

        if self.grid_width > MAX_GRID_SIDE || self.grid_height > MAX_GRID_SIDE {
            return Err(format!(
                "grid sides cannot exceed {}, got {}x{}",
                MAX_GRID_SIDE, self.grid_width, self.grid_height
            ));
        }

        if self.frame_millis == 0 {
            return Err("frame_millis must be at least 1".to_string());
        }

        if self.update_interval == 0 {
            return Err("update_interval must be at least 1".to_string());
        }

        Ok(())
    }

    /// Where each round begins: the centre of the board
    pub fn start_position(&self) -> Position {
        Position::new((self.grid_width / 2) as i32, (self.grid_height / 2) as i32)
    }
}
