//! Pointer input
//!
//! Hosts translate touch/mouse events into [`PointerEvent`]s. A single drag
//! gesture steers the vehicle; other pointers are ignored until it ends.

use crate::sim::{GamePhase, GameState, TapResponse, handle_tap};

/// Identifier of a pointer (touch slot or mouse)
pub type PointerId = u32;

/// A pointer event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Press { id: PointerId, x: f32, y: f32 },
    Move { id: PointerId, x: f32, y: f32 },
    Release { id: PointerId },
}

/// Tracks the one pointer currently allowed to steer
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    active: Option<PointerId>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer currently steering, if any
    pub fn active(&self) -> Option<PointerId> {
        self.active
    }

    /// Apply one pointer event to the game
    pub fn handle(&mut self, event: PointerEvent, state: &mut GameState) {
        match event {
            PointerEvent::Press { id, x, .. } => {
                if self.active.is_some_and(|active| active != id) {
                    return;
                }
                match handle_tap(state) {
                    TapResponse::Steer => {
                        self.active = Some(id);
                        state.vehicle.move_to(x, &state.config);
                    }
                    TapResponse::Started | TapResponse::Retried | TapResponse::Ignored => {}
                }
            }
            PointerEvent::Move { id, x, .. } => {
                if self.active == Some(id) && state.phase == GamePhase::Playing {
                    state.vehicle.move_to(x, &state.config);
                }
            }
            PointerEvent::Release { id } => {
                if self.active == Some(id) {
                    self.active = None;
                }
            }
        }
    }
}
