//! Game configuration
//!
//! Every tunable number of the game lives here. Loaded from JSON when the
//! binary is given a config path, otherwise the defaults below are used.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Screen ===
    pub screen_width: f32,
    pub screen_height: f32,
    /// Horizontal inset on both sides of the road
    pub lane_margin: f32,

    // === Vehicle ===
    pub vehicle_width: f32,
    pub vehicle_height: f32,
    /// Gap between the vehicle's bottom edge and the screen bottom
    pub vehicle_bottom_inset: f32,

    // === Hampers ===
    pub hamper_size: f32,
    /// Live hamper population (constant while playing)
    pub hamper_count: usize,
    /// Vertical distance between hampers in the initial column
    pub hamper_spawn_pitch: f32,
    /// Offset above the screen of the first hamper in the column
    pub hamper_spawn_offset: f32,
    /// Y of the hamper that replaces a collected one
    pub replacement_hamper_y: f32,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_height: f32,
    pub obstacle_spawn_pitch: f32,
    pub obstacle_spawn_offset: f32,
    /// Obstacle count is `min(cap, floor(base + level * per_level))`
    pub obstacle_base: f32,
    pub obstacle_per_level: f32,
    pub obstacle_cap: usize,

    // === Respawn ===
    /// Entities leaving the bottom reappear at `-[min, max)` above the screen
    pub respawn_min_height: u32,
    pub respawn_max_height: u32,

    // === Progression ===
    pub base_speed: f32,
    pub speed_increase_per_hamper: f32,
    pub max_level: u32,
    /// Hamper goal is `level * hampers_per_level`
    pub hampers_per_level: u32,

    // === Animations (ticks) ===
    pub level_complete_ticks: u32,
    pub game_over_ticks: u32,

    // === Timing ===
    /// Target frame duration in milliseconds
    pub frame_budget_ms: u64,

    /// Seed for spawn positions
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 1080.0,
            screen_height: 1920.0,
            lane_margin: 50.0,

            vehicle_width: 150.0,
            vehicle_height: 300.0,
            vehicle_bottom_inset: 50.0,

            hamper_size: 80.0,
            hamper_count: 15,
            hamper_spawn_pitch: 300.0,
            hamper_spawn_offset: 150.0,
            replacement_hamper_y: -100.0,

            obstacle_width: 150.0,
            obstacle_height: 150.0,
            obstacle_spawn_pitch: 400.0,
            obstacle_spawn_offset: 200.0,
            obstacle_base: 3.0,
            obstacle_per_level: 1.5,
            obstacle_cap: 15,

            respawn_min_height: 300,
            respawn_max_height: 900,

            base_speed: 8.0,
            speed_increase_per_hamper: 0.8,
            max_level: 10,
            hampers_per_level: 10,

            level_complete_ticks: 90,
            game_over_ticks: 90,

            frame_budget_ms: 16,

            seed: 0x4841_4d50,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("vehicle_width", self.vehicle_width),
            ("vehicle_height", self.vehicle_height),
            ("hamper_size", self.hamper_size),
            ("obstacle_width", self.obstacle_width),
            ("obstacle_height", self.obstacle_height),
            ("base_speed", self.base_speed),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if self.lane_margin < 0.0 {
            return Err(ConfigError::Invalid("lane_margin must not be negative".into()));
        }
        if !(self.speed_increase_per_hamper > 0.0) {
            return Err(ConfigError::Invalid(
                "speed_increase_per_hamper must be positive".into(),
            ));
        }
        if self.max_level == 0 {
            return Err(ConfigError::Invalid("max_level must be at least 1".into()));
        }
        if self.hampers_per_level == 0 {
            return Err(ConfigError::Invalid("hampers_per_level must be at least 1".into()));
        }
        if self.hamper_count == 0 {
            return Err(ConfigError::Invalid("hamper_count must be at least 1".into()));
        }
        if self.respawn_min_height >= self.respawn_max_height {
            return Err(ConfigError::Invalid(format!(
                "respawn range [{}, {}) is empty",
                self.respawn_min_height, self.respawn_max_height
            )));
        }
        if self.frame_budget_ms == 0 {
            return Err(ConfigError::Invalid("frame_budget_ms must be at least 1".into()));
        }
        Ok(())
    }

    /// Target frame duration
    pub fn frame_budget(&self) -> Duration {
        Duration::from_millis(self.frame_budget_ms)
    }

    /// Number of obstacles spawned for a level
    pub fn obstacle_count(&self, level: u32) -> usize {
        let count = (self.obstacle_base + level as f32 * self.obstacle_per_level).floor() as usize;
        count.min(self.obstacle_cap)
    }

    /// Hampers needed to finish a level
    pub fn hamper_goal(&self, level: u32) -> u32 {
        level * self.hampers_per_level
    }

    /// Scroll speed after collecting `collected` hampers this level
    pub fn scroll_speed(&self, collected: u32) -> f32 {
        self.base_speed + self.speed_increase_per_hamper * collected as f32
    }

    /// Leftmost legal x for an entity
    pub fn lane_left(&self) -> f32 {
        self.lane_margin
    }

    /// Rightmost legal x for an entity of the given width
    pub fn lane_right(&self, width: f32) -> f32 {
        self.screen_width - self.lane_margin - width
    }
}
