//! Demo-mode steering
//!
//! Picks a horizontal target for the vehicle: chase the nearest incoming
//! hamper, but never park under an obstacle that is about to arrive.

use super::state::{Hamper, Obstacle, Vehicle};
use crate::config::GameConfig;

/// How far above the vehicle an obstacle counts as incoming
const DANGER_LOOKAHEAD: f32 = 700.0;
/// Extra clearance kept on each side of an obstacle
const DANGER_PADDING: f32 = 20.0;
/// Spacing of candidate positions across the lane
const CANDIDATE_STEP: f32 = 10.0;

/// Pick the x (vehicle center) the autopilot wants to drive to
pub fn target_x(
    vehicle: &Vehicle,
    hampers: &[Hamper],
    obstacles: &[Obstacle],
    config: &GameConfig,
) -> f32 {
    let top = vehicle.pos.y - DANGER_LOOKAHEAD;
    let bottom = vehicle.pos.y + vehicle.height;

    let dangers: Vec<(f32, f32)> = obstacles
        .iter()
        .filter(|o| o.pos.y + o.height > top && o.pos.y < bottom)
        .map(|o| (o.pos.x - DANGER_PADDING, o.pos.x + o.width + DANGER_PADDING))
        .collect();

    // Lowest hamper that has not yet passed the vehicle
    let goal = hampers
        .iter()
        .filter(|h| h.pos.y < bottom && h.pos.y + h.size > 0.0)
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|h| h.pos.x + h.size / 2.0)
        .unwrap_or_else(|| vehicle.center_x());

    let is_safe = |center: f32| {
        let left = center - vehicle.width / 2.0;
        let right = center + vehicle.width / 2.0;
        dangers.iter().all(|&(d_left, d_right)| right <= d_left || left >= d_right)
    };

    let min_center = config.lane_left() + vehicle.width / 2.0;
    let max_center = (config.lane_right(vehicle.width) + vehicle.width / 2.0).max(min_center);
    let goal = goal.clamp(min_center, max_center);

    if is_safe(goal) {
        return goal;
    }

    let steps = ((max_center - min_center) / CANDIDATE_STEP).floor() as u32;
    (0..=steps)
        .map(|i| min_center + i as f32 * CANDIDATE_STEP)
        .filter(|&center| is_safe(center))
        .min_by(|a, b| (a - goal).abs().total_cmp(&(b - goal).abs()))
        .unwrap_or_else(|| vehicle.center_x())
}
