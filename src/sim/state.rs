//! Game state and core simulation types
//!
//! Everything the loop thread and the input handler share lives in
//! [`GameState`]; both reach it through the engine's single lock.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::spawn::Spawner;
use crate::config::GameConfig;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first tap
    Start,
    /// Active gameplay
    Playing,
    /// Level goal reached, celebration runs until the next level
    LevelComplete,
    /// Vehicle hit an obstacle, waiting for a tap to retry
    GameOver,
}

/// The player's delivery truck
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Vehicle {
    /// Create a vehicle centered horizontally, resting above the bottom inset
    pub fn centered(config: &GameConfig) -> Self {
        let mut vehicle = Self {
            pos: Vec2::new(
                config.screen_width / 2.0 - config.vehicle_width / 2.0,
                Self::rest_y(config),
            ),
            width: config.vehicle_width,
            height: config.vehicle_height,
        };
        vehicle.clamp_to_lane(config);
        vehicle
    }

    /// Fixed y of the vehicle for the current screen height
    pub fn rest_y(config: &GameConfig) -> f32 {
        config.screen_height - config.vehicle_height - config.vehicle_bottom_inset
    }

    /// Center the vehicle on `target_x`, clamped into the lane
    pub fn move_to(&mut self, target_x: f32, config: &GameConfig) {
        self.pos.x = target_x - self.width / 2.0;
        self.clamp_to_lane(config);
    }

    /// Pull the vehicle back inside `[margin, screen_width - margin - width]`
    ///
    /// When the screen is narrower than the lane plus the vehicle, the left
    /// bound wins.
    pub fn clamp_to_lane(&mut self, config: &GameConfig) {
        let right = config.lane_right(self.width);
        let left = config.lane_left();
        self.pos.x = self.pos.x.min(right).max(left);
    }

    /// Horizontal center
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// A collectible hamper (drawn as an ellipse, collides as its box)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hamper {
    pub id: u32,
    pub pos: Vec2,
    pub size: f32,
}

impl Hamper {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }
}

/// A falling obstacle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }
}

/// Per-level progress
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelProgress {
    /// Current level (1-based)
    pub level: u32,
    /// Hampers collected this level
    pub hampers_collected: u32,
    /// Hampers needed to finish this level
    pub hamper_goal: u32,
    /// Downward movement per tick
    pub scroll_speed: f32,
}

impl LevelProgress {
    pub fn new(level: u32, config: &GameConfig) -> Self {
        Self {
            level,
            hampers_collected: 0,
            hamper_goal: config.hamper_goal(level),
            scroll_speed: config.base_speed,
        }
    }

    /// Count one collected hamper and speed up
    pub fn record_collection(&mut self, config: &GameConfig) {
        self.hampers_collected += 1;
        self.scroll_speed = config.scroll_speed(self.hampers_collected);
    }

    pub fn goal_reached(&self) -> bool {
        self.hampers_collected >= self.hamper_goal
    }
}

/// Presentational timers for the end-of-level and game-over screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationCounters {
    pub level_complete: u32,
    pub game_over: u32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub vehicle: Vehicle,
    pub hampers: Vec<Hamper>,
    pub obstacles: Vec<Obstacle>,
    pub progress: LevelProgress,
    pub animations: AnimationCounters,
    /// Simulation ticks run while playing
    pub time_ticks: u64,
    pub spawner: Spawner,
}

impl GameState {
    /// Create a new session seeded from `config.seed`
    pub fn new(config: GameConfig) -> Self {
        let rng = Pcg32::seed_from_u64(config.seed);
        Self::with_rng(config, rng)
    }

    /// Create a new session drawing spawn positions from `rng`
    pub fn with_rng(config: GameConfig, rng: Pcg32) -> Self {
        debug_assert!(config.validate().is_ok(), "invalid config: {:?}", config.validate());
        let mut state = Self {
            vehicle: Vehicle::centered(&config),
            progress: LevelProgress::new(1, &config),
            phase: GamePhase::Start,
            hampers: Vec::new(),
            obstacles: Vec::new(),
            animations: AnimationCounters::default(),
            time_ticks: 0,
            spawner: Spawner::new(rng),
            config,
        };
        state.reset();
        state
    }

    /// Back to the title screen on the current level
    ///
    /// Recenters the vehicle, zeroes the level progress and refills both
    /// stores.
    pub fn reset(&mut self) {
        self.vehicle = Vehicle::centered(&self.config);
        self.progress = LevelProgress::new(self.progress.level, &self.config);
        self.respawn_stores();
        self.set_phase(GamePhase::Start);
        self.animations = AnimationCounters::default();
    }

    /// Clear both stores and spawn the initial population for the current level
    pub fn respawn_stores(&mut self) {
        self.hampers.clear();
        self.obstacles.clear();
        let level = self.progress.level;
        self.spawner
            .spawn_initial(level, &self.config, &mut self.hampers, &mut self.obstacles);
    }

    /// Move on after the level-complete animation
    ///
    /// Past the last level the game wraps to level 1 and returns to the title
    /// screen; otherwise play resumes immediately on the next level.
    pub fn advance_level(&mut self) {
        let next = self.progress.level + 1;
        if next > self.config.max_level {
            log::info!("All {} levels delivered, back to level 1", self.config.max_level);
            self.progress.level = 1;
            self.reset();
        } else {
            log::info!("Advancing to level {next}");
            self.progress = LevelProgress::new(next, &self.config);
            self.respawn_stores();
            self.set_phase(GamePhase::Playing);
        }
    }

    /// Screen dimensions changed
    pub fn resize(&mut self, width: f32, height: f32) {
        self.config.screen_width = width;
        self.config.screen_height = height;
        self.vehicle.pos.y = Vehicle::rest_y(&self.config);
        self.vehicle.clamp_to_lane(&self.config);
    }

    /// Switch phase, restarting the entered phase's animation counter
    pub fn set_phase(&mut self, phase: GamePhase) {
        if self.phase == phase {
            return;
        }
        log::info!("Phase {:?} -> {:?}", self.phase, phase);
        self.phase = phase;
        match phase {
            GamePhase::LevelComplete => self.animations.level_complete = 0,
            GamePhase::GameOver => self.animations.game_over = 0,
            GamePhase::Start | GamePhase::Playing => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_starts_on_title() {
        let state = GameState::new(GameConfig::default());
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.progress.level, 1);
        assert_eq!(state.progress.hamper_goal, 10);
        assert_eq!(state.progress.scroll_speed, 8.0);
        assert_eq!(state.hampers.len(), 15);
        assert_eq!(state.obstacles.len(), 4);
    }

    #[test]
    fn test_vehicle_rests_above_bottom() {
        let config = GameConfig::default();
        let vehicle = Vehicle::centered(&config);
        assert_eq!(vehicle.pos.y, 1920.0 - 300.0 - 50.0);
        assert_eq!(vehicle.center_x(), 540.0);
    }

    #[test]
    fn test_move_to_clamps_both_sides() {
        let config = GameConfig::default();
        let mut vehicle = Vehicle::centered(&config);

        vehicle.move_to(-1000.0, &config);
        assert_eq!(vehicle.pos.x, config.lane_margin);

        vehicle.move_to(10_000.0, &config);
        assert_eq!(vehicle.pos.x, 1080.0 - 50.0 - 150.0);

        vehicle.move_to(300.0, &config);
        assert_eq!(vehicle.pos.x, 225.0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "invalid config")]
    fn test_new_rejects_empty_respawn_range() {
        let config = GameConfig {
            respawn_min_height: 500,
            respawn_max_height: 500,
            ..GameConfig::default()
        };
        let _ = GameState::new(config);
    }

    #[test]
    fn test_move_to_narrow_screen_does_not_panic() {
        let config = GameConfig {
            screen_width: 100.0,
            ..GameConfig::default()
        };
        let mut vehicle = Vehicle::centered(&config);
        vehicle.move_to(50.0, &config);
        assert_eq!(vehicle.pos.x, config.lane_margin);
    }

    #[test]
    fn test_advance_level_resets_progress() {
        let mut state = GameState::new(GameConfig::default());
        state.progress.hampers_collected = 10;
        state.progress.scroll_speed = 16.0;
        state.phase = GamePhase::LevelComplete;

        state.advance_level();
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.progress.level, 2);
        assert_eq!(state.progress.hampers_collected, 0);
        assert_eq!(state.progress.hamper_goal, 20);
        assert_eq!(state.progress.scroll_speed, state.config.base_speed);
        assert_eq!(state.obstacles.len(), 6);
        assert_eq!(state.hampers.len(), 15);
    }

    #[test]
    fn test_advance_past_max_level_wraps_to_start() {
        let mut state = GameState::new(GameConfig::default());
        state.progress = LevelProgress::new(10, &state.config);
        state.phase = GamePhase::LevelComplete;

        state.advance_level();
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.progress.level, 1);
        assert_eq!(state.obstacles.len(), 4);
    }

    #[test]
    fn test_reset_keeps_level() {
        let mut state = GameState::new(GameConfig::default());
        state.progress = LevelProgress::new(4, &state.config);
        state.progress.hampers_collected = 3;
        state.vehicle.pos.x = 60.0;
        state.phase = GamePhase::GameOver;

        state.reset();
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.progress.level, 4);
        assert_eq!(state.progress.hampers_collected, 0);
        assert_eq!(state.obstacles.len(), 9);
        assert_eq!(state.vehicle, Vehicle::centered(&state.config));
    }

    #[test]
    fn test_resize_reclamps_vehicle() {
        let mut state = GameState::new(GameConfig::default());
        state.vehicle.move_to(10_000.0, &state.config);
        state.resize(600.0, 1000.0);
        assert_eq!(state.vehicle.pos.x, 600.0 - 50.0 - 150.0);
        assert_eq!(state.vehicle.pos.y, 1000.0 - 300.0 - 50.0);
    }
}
