//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, speeds are per-tick distances
//! - Seeded RNG only (through the spawner)
//! - Stable iteration order (store order, replacements appended)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod phase;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{Rect, rects_overlap};
pub use phase::{TapResponse, advance_animations, handle_tap};
pub use spawn::Spawner;
pub use state::{
    AnimationCounters, GamePhase, GameState, Hamper, LevelProgress, Obstacle, Vehicle,
};
pub use tick::{TickOutcome, step, tick};
