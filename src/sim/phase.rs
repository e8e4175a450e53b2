//! Phase transitions driven by taps and animation timers
//!
//! ```text
//! Start --tap--> Playing --goal--> LevelComplete --timer--> Playing (next level)
//!                   |                    |
//!                   |                    +--timer, last level--> Start (level 1)
//!                   +--obstacle--> GameOver --tap--> Start
//! ```
//!
//! Simulation outcomes (goal, obstacle) are applied by [`super::tick`].

use super::state::{GamePhase, GameState};

/// How a tap was interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapResponse {
    /// Title screen dismissed, play begins
    Started,
    /// Game over dismissed, session reset to the title screen
    Retried,
    /// Tap during play; the caller may begin a drag gesture
    Steer,
    /// Tap ignored (level-complete animation cannot be skipped)
    Ignored,
}

/// Apply a tap anywhere on the screen
pub fn handle_tap(state: &mut GameState) -> TapResponse {
    match state.phase {
        GamePhase::Start => {
            state.set_phase(GamePhase::Playing);
            TapResponse::Started
        }
        GamePhase::GameOver => {
            state.reset();
            TapResponse::Retried
        }
        GamePhase::Playing => TapResponse::Steer,
        GamePhase::LevelComplete => TapResponse::Ignored,
    }
}

/// Advance the per-phase animation counters by one tick
///
/// Once the level-complete counter exceeds its duration the next level
/// begins. The game-over counter just loops.
pub fn advance_animations(state: &mut GameState) {
    match state.phase {
        GamePhase::LevelComplete => {
            state.animations.level_complete += 1;
            if state.animations.level_complete > state.config.level_complete_ticks {
                state.animations.level_complete = 0;
                state.advance_level();
            }
        }
        GamePhase::GameOver => {
            state.animations.game_over += 1;
            if state.animations.game_over > state.config.game_over_ticks {
                state.animations.game_over = 0;
            }
        }
        GamePhase::Start | GamePhase::Playing => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::state::LevelProgress;
    use crate::sim::tick::step;

    /// Park every obstacle far above and feed one hamper per frame until
    /// play ends
    fn play_out_level(state: &mut GameState) {
        while state.phase == GamePhase::Playing {
            for obstacle in &mut state.obstacles {
                obstacle.pos.y = -5000.0;
            }
            let vehicle = state.vehicle;
            state.hampers[0].pos.x = vehicle.pos.x;
            state.hampers[0].pos.y = vehicle.pos.y;
            step(state);
        }
    }

    #[test]
    fn test_tap_starts_game() {
        let mut state = GameState::new(GameConfig::default());
        assert_eq!(handle_tap(&mut state), TapResponse::Started);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(handle_tap(&mut state), TapResponse::Steer);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_tap_ignored_during_level_complete() {
        let mut state = GameState::new(GameConfig::default());
        state.set_phase(GamePhase::LevelComplete);
        assert_eq!(handle_tap(&mut state), TapResponse::Ignored);
        assert_eq!(state.phase, GamePhase::LevelComplete);
    }

    #[test]
    fn test_tap_after_game_over_resets() {
        let mut state = GameState::new(GameConfig::default());
        state.set_phase(GamePhase::Playing);
        state.progress.record_collection(&state.config.clone());
        state.set_phase(GamePhase::GameOver);

        assert_eq!(handle_tap(&mut state), TapResponse::Retried);
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.progress.hampers_collected, 0);
        assert_eq!(state.progress.scroll_speed, state.config.base_speed);
    }

    #[test]
    fn test_level_complete_waits_for_animation() {
        let mut state = GameState::new(GameConfig::default());
        state.set_phase(GamePhase::LevelComplete);

        for _ in 0..90 {
            step(&mut state);
        }
        assert_eq!(state.phase, GamePhase::LevelComplete);
        assert_eq!(state.animations.level_complete, 90);

        step(&mut state);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.progress.level, 2);
        assert_eq!(state.progress.hampers_collected, 0);
        assert_eq!(state.progress.scroll_speed, state.config.base_speed);
        assert_eq!(state.animations.level_complete, 0);
    }

    #[test]
    fn test_full_level_scenario() {
        let mut state = GameState::new(GameConfig::default());
        handle_tap(&mut state);

        play_out_level(&mut state);
        assert_eq!(state.phase, GamePhase::LevelComplete);
        assert_eq!(state.progress.hampers_collected, 10);

        for _ in 0..=state.config.level_complete_ticks {
            step(&mut state);
        }
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.progress.level, 2);
        assert_eq!(state.progress.hampers_collected, 0);
        assert_eq!(state.progress.scroll_speed, state.config.base_speed);
    }

    #[test]
    fn test_last_level_wraps_to_start() {
        let mut state = GameState::new(GameConfig::default());
        state.progress = LevelProgress::new(state.config.max_level, &state.config);
        state.set_phase(GamePhase::LevelComplete);

        for _ in 0..=90 {
            step(&mut state);
        }
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.progress.level, 1);
    }

    #[test]
    fn test_last_level_played_through_wraps_to_start() {
        let mut state = GameState::new(GameConfig::default());
        let max_level = state.config.max_level;
        state.progress = LevelProgress::new(max_level, &state.config);
        state.respawn_stores();
        assert_eq!(state.obstacles.len(), state.config.obstacle_count(max_level));

        assert_eq!(handle_tap(&mut state), TapResponse::Started);
        play_out_level(&mut state);
        assert_eq!(state.phase, GamePhase::LevelComplete);
        assert_eq!(state.progress.level, max_level);
        assert_eq!(state.progress.hampers_collected, 100);
        assert!(state.progress.goal_reached());

        for _ in 0..=state.config.level_complete_ticks {
            step(&mut state);
        }
        assert_eq!(state.phase, GamePhase::Start);
        assert_eq!(state.progress.level, 1);
        assert_eq!(state.progress.hampers_collected, 0);
        assert_eq!(state.progress.hamper_goal, 10);
        assert_eq!(state.progress.scroll_speed, state.config.base_speed);
        assert_eq!(state.obstacles.len(), state.config.obstacle_count(1));
    }

    #[test]
    fn test_game_over_animation_loops() {
        let mut state = GameState::new(GameConfig::default());
        state.set_phase(GamePhase::GameOver);

        for _ in 0..91 {
            step(&mut state);
        }
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.animations.game_over, 0);
        step(&mut state);
        assert_eq!(state.animations.game_over, 1);
    }
}
