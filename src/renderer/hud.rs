//! HUD and overlay text
//!
//! The text each screen shows, independent of fonts and layout.

use super::FrameView;
use crate::sim::GamePhase;

pub const TITLE: &str = "Hamper Hero";

/// Text lines for the current frame, top to bottom
pub fn overlay(frame: &FrameView<'_>) -> Vec<String> {
    let progress = &frame.progress;
    match frame.phase {
        GamePhase::Start => vec![TITLE.to_string(), "Tap to Start".to_string()],
        GamePhase::Playing => vec![
            format!("Level: {}", progress.level),
            format!("Hampers: {} / {}", progress.hampers_collected, progress.hamper_goal),
            format!("Speed: {:.1}", progress.scroll_speed),
        ],
        GamePhase::LevelComplete => vec![
            format!("Level {} Complete!", progress.level),
            "Delivered!".to_string(),
        ],
        GamePhase::GameOver => vec!["Game Over!".to_string(), "Tap to Retry".to_string()],
    }
}
