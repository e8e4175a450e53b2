//! Fixed timestep simulation tick
//!
//! One tick scrolls every entity down by the current speed, recycles what
//! left the screen, then resolves hamper pickups before obstacle hits.

use super::phase::advance_animations;
use super::state::{GamePhase, GameState};

/// What happened during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Hampers picked up this tick
    pub hampers_collected: u32,
    /// The hamper goal was reached this tick
    pub goal_reached: bool,
    /// The vehicle touched an obstacle this tick
    pub obstacle_hit: bool,
}

/// Advance the simulation by one tick
///
/// Does nothing outside [`GamePhase::Playing`]. Every entity present at the
/// start of the tick is moved exactly once; replacement hampers spawned by a
/// pickup are neither moved nor tested until the next tick. Once the goal is
/// reached the remaining hampers keep scrolling but are no longer collected.
/// Every obstacle scrolls even after the first hit, and a hit overrides a
/// level completion from the same tick.
pub fn tick(state: &mut GameState) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    if state.phase != GamePhase::Playing {
        return outcome;
    }

    state.time_ticks += 1;

    let GameState {
        config,
        vehicle,
        hampers,
        obstacles,
        progress,
        spawner,
        ..
    } = state;
    let speed = progress.scroll_speed;
    let vehicle = vehicle.rect();
    let population = hampers.len();

    // Hampers: move, recycle, collect
    let mut collected = Vec::new();
    let mut replacements = Vec::new();
    for (index, hamper) in hampers.iter_mut().enumerate() {
        hamper.pos.y += speed;
        if hamper.pos.y > config.screen_height {
            spawner.respawn(&mut hamper.pos, hamper.size, config);
        }

        if outcome.goal_reached || !vehicle.overlaps(&hamper.rect()) {
            continue;
        }

        collected.push(index);
        progress.record_collection(config);
        outcome.hampers_collected += 1;
        log::debug!(
            "Collected hamper {} ({}/{}), speed {:.1}",
            hamper.id,
            progress.hampers_collected,
            progress.hamper_goal,
            progress.scroll_speed
        );
        replacements.push(spawner.hamper_at(config.replacement_hamper_y, config));

        if progress.goal_reached() {
            outcome.goal_reached = true;
        }
    }
    for index in collected.into_iter().rev() {
        hampers.remove(index);
    }
    hampers.extend(replacements);

    // Obstacles: move, recycle, detect the first hit
    for obstacle in obstacles.iter_mut() {
        obstacle.pos.y += speed;
        if obstacle.pos.y > config.screen_height {
            spawner.respawn(&mut obstacle.pos, obstacle.width, config);
        }

        if !outcome.obstacle_hit && vehicle.overlaps(&obstacle.rect()) {
            outcome.obstacle_hit = true;
            log::debug!("Vehicle hit obstacle {}", obstacle.id);
        }
    }

    debug_assert_eq!(hampers.len(), population, "hamper population drifted");
    debug_assert!(progress.scroll_speed >= config.base_speed);

    if outcome.goal_reached {
        state.set_phase(GamePhase::LevelComplete);
    }
    if outcome.obstacle_hit {
        state.set_phase(GamePhase::GameOver);
    }

    outcome
}

/// Run one full frame of game logic: the simulation tick (when playing)
/// followed by the phase animations
pub fn step(state: &mut GameState) -> TickOutcome {
    let outcome = tick(state);
    advance_animations(state);
    outcome
}
