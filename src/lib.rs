//! Hamper Hero - A lane-scrolling delivery arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, levels, phases)
//! - `engine`: Frame loop thread and start/stop/resume lifecycle
//! - `renderer`: Read-only frame views handed to an external renderer
//! - `platform`: Pointer input and frame pacing
//! - `config`: Data-driven game balance

pub mod config;
pub mod engine;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use engine::Engine;
pub use platform::PointerEvent;
pub use renderer::{FrameSnapshot, FrameView, Renderer};
pub use sim::{GamePhase, GameState};
