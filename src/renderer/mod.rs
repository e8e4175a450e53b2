//! Rendering seam
//!
//! The game never draws anything itself. Once per frame the loop hands a
//! [`FrameView`] to a [`Renderer`], which may only read it.

pub mod console;
pub mod hud;

pub use console::LogRenderer;
pub use hud::overlay;

use crate::config::GameConfig;
use crate::sim::{AnimationCounters, GamePhase, GameState, Hamper, LevelProgress, Obstacle, Vehicle};

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub phase: GamePhase,
    pub vehicle: Vehicle,
    pub hampers: &'a [Hamper],
    pub obstacles: &'a [Obstacle],
    pub progress: LevelProgress,
    pub animations: AnimationCounters,
    pub config: &'a GameConfig,
}

impl<'a> FrameView<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self {
            phase: state.phase,
            vehicle: state.vehicle,
            hampers: &state.hampers,
            obstacles: &state.obstacles,
            progress: state.progress,
            animations: state.animations,
            config: &state.config,
        }
    }
}

/// Owned copy of a frame, for readers outside the loop
#[derive(Debug, Clone)]
pub struct FrameSnapshot {
    pub phase: GamePhase,
    pub vehicle: Vehicle,
    pub hampers: Vec<Hamper>,
    pub obstacles: Vec<Obstacle>,
    pub progress: LevelProgress,
    pub animations: AnimationCounters,
    pub config: GameConfig,
}

impl FrameSnapshot {
    pub fn new(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            vehicle: state.vehicle,
            hampers: state.hampers.clone(),
            obstacles: state.obstacles.clone(),
            progress: state.progress,
            animations: state.animations,
            config: state.config.clone(),
        }
    }

    pub fn view(&self) -> FrameView<'_> {
        FrameView {
            phase: self.phase,
            vehicle: self.vehicle,
            hampers: &self.hampers,
            obstacles: &self.obstacles,
            progress: self.progress,
            animations: self.animations,
            config: &self.config,
        }
    }
}

/// Draws frames
pub trait Renderer: Send {
    fn render(&mut self, frame: &FrameView<'_>);
}

impl<F> Renderer for F
where
    F: FnMut(&FrameView<'_>) + Send,
{
    fn render(&mut self, frame: &FrameView<'_>) {
        self(frame)
    }
}

/// Renderer that draws nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &FrameView<'_>) {}
}
