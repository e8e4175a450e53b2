//! Headless renderer that writes the overlay to the log

use super::{FrameView, Renderer, hud};

/// Logs the overlay text whenever it changes
#[derive(Debug, Clone, Default)]
pub struct LogRenderer {
    last: Vec<String>,
    frames: u64,
}

impl LogRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames rendered so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Overlay lines of the most recent frame
    pub fn last_overlay(&self) -> &[String] {
        &self.last
    }
}

impl Renderer for LogRenderer {
    fn render(&mut self, frame: &FrameView<'_>) {
        self.frames += 1;
        let lines = hud::overlay(frame);
        if lines != self.last {
            log::info!("[frame {}] {}", self.frames, lines.join(" | "));
            self.last = lines;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{GamePhase, GameState};

    #[test]
    fn test_tracks_latest_overlay() {
        let mut state = GameState::new(GameConfig::default());
        let mut renderer = LogRenderer::new();

        renderer.render(&FrameView::new(&state));
        assert_eq!(renderer.last_overlay()[1], "Tap to Start");

        state.set_phase(GamePhase::Playing);
        renderer.render(&FrameView::new(&state));
        renderer.render(&FrameView::new(&state));
        assert_eq!(renderer.last_overlay()[0], "Level: 1");
        assert_eq!(renderer.frames(), 3);
    }
}
