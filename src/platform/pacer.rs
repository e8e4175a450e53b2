//! Frame pacing
//!
//! Sleeps away whatever is left of the frame budget. A frame that runs over
//! budget is followed immediately by the next one.

use std::thread;
use std::time::{Duration, Instant};

/// Paces a loop to a fixed frame budget
#[derive(Debug, Clone)]
pub struct FramePacer {
    budget: Duration,
    frames: u64,
    overruns: u64,
}

impl FramePacer {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            frames: 0,
            overruns: 0,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Frames paced so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames that took longer than the budget
    pub fn overruns(&self) -> u64 {
        self.overruns
    }

    /// Time left in the budget after a frame that took `elapsed`
    pub fn remaining(&mut self, elapsed: Duration) -> Duration {
        self.frames += 1;
        match self.budget.checked_sub(elapsed) {
            Some(remaining) => remaining,
            None => {
                self.overruns += 1;
                Duration::ZERO
            }
        }
    }

    /// Sleep until the frame that began at `frame_start` has used its budget
    pub fn wait(&mut self, frame_start: Instant) {
        let remaining = self.remaining(frame_start.elapsed());
        if !remaining.is_zero() {
            thread::sleep(remaining);
        }
    }
}
