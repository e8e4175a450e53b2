//! Platform abstraction layer
//!
//! Handles the host-facing edges of the game:
//! - Pointer events and drag gestures
//! - Frame pacing

pub mod input;
pub mod pacer;

pub use input::{GestureTracker, PointerEvent, PointerId};
pub use pacer::FramePacer;
