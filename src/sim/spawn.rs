//! Entity spawning and respawning
//!
//! All randomness in the simulation flows through [`Spawner`], which owns a
//! seeded PCG generator so runs are reproducible.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::{Hamper, Obstacle};
use crate::config::GameConfig;

/// Places hampers and obstacles in the lane
#[derive(Debug, Clone)]
pub struct Spawner {
    rng: Pcg32,
    next_id: u32,
}

impl Spawner {
    pub fn new(rng: Pcg32) -> Self {
        Self { rng, next_id: 1 }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    /// Uniform x in `[margin, screen_width - margin - width]`
    ///
    /// Collapses to the margin when the lane is narrower than the entity.
    pub fn random_x(&mut self, width: f32, config: &GameConfig) -> f32 {
        let span = (config.lane_right(width) - config.lane_left()).max(0.0);
        self.rng.random::<f32>() * span + config.lane_left()
    }

    /// Height above the screen for a recycled entity
    pub fn respawn_y(&mut self, config: &GameConfig) -> f32 {
        let height = self
            .rng
            .random_range(config.respawn_min_height..config.respawn_max_height);
        -(height as f32)
    }

    /// Fill the stores with the initial population for `level`
    ///
    /// Both kinds are stacked in a column above the screen so they scroll in
    /// one at a time.
    pub fn spawn_initial(
        &mut self,
        level: u32,
        config: &GameConfig,
        hampers: &mut Vec<Hamper>,
        obstacles: &mut Vec<Obstacle>,
    ) {
        for i in 0..config.hamper_count {
            let y = -(i as f32) * config.hamper_spawn_pitch - config.hamper_spawn_offset;
            let hamper = self.hamper_at(y, config);
            hampers.push(hamper);
        }

        let obstacle_count = config.obstacle_count(level);
        for i in 0..obstacle_count {
            let y = -(i as f32) * config.obstacle_spawn_pitch - config.obstacle_spawn_offset;
            let obstacle = Obstacle {
                id: self.next_entity_id(),
                pos: Vec2::new(self.random_x(config.obstacle_width, config), y),
                width: config.obstacle_width,
                height: config.obstacle_height,
            };
            obstacles.push(obstacle);
        }

        log::debug!(
            "Level {level}: spawned {} hampers, {obstacle_count} obstacles",
            config.hamper_count
        );
    }

    /// A fresh hamper at a random x and the given y
    pub fn hamper_at(&mut self, y: f32, config: &GameConfig) -> Hamper {
        Hamper {
            id: self.next_entity_id(),
            pos: Vec2::new(self.random_x(config.hamper_size, config), y),
            size: config.hamper_size,
        }
    }

    /// Recycle an entity that scrolled off the bottom back above the screen
    pub fn respawn(&mut self, pos: &mut Vec2, width: f32, config: &GameConfig) {
        pos.x = self.random_x(width, config);
        pos.y = self.respawn_y(config);
    }
}
