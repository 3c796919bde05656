//! Axis-separated collision response against the obstacle set.
//!
//! Movers apply one axis of displacement, resolve that axis, then do the other.
//! Resolving per axis lets a mover slide along a wall and keeps corners from
//! being tunnelled through.

use crate::components::rect::Rect;
use crate::core::obstacles::ObstacleSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Push `hitbox` out of every obstacle it overlaps along `axis`.
///
/// The leading edge (picked by the sign of `velocity`) is clamped flush against
/// the obstacle's opposing edge. Zero velocity means no response. Obstacles are
/// visited in insertion order and overlap is tested against the hitbox as
/// clamped so far, so with overlapping obstacles the last one still touched wins.
///
/// Returns how many obstacles clamped the hitbox.
pub fn resolve_axis(
    hitbox: &mut Rect,
    velocity: f32,
    axis: Axis,
    obstacles: &ObstacleSet,
) -> usize {
    if velocity == 0.0 {
        return 0;
    }
    let mut clamped = 0;
    for obstacle in obstacles.iter() {
        if !obstacle.hitbox.intersects(hitbox) {
            continue;
        }
        match axis {
            Axis::Horizontal if velocity > 0.0 => hitbox.set_right(obstacle.hitbox.left()),
            Axis::Horizontal => hitbox.set_left(obstacle.hitbox.right()),
            Axis::Vertical if velocity > 0.0 => hitbox.set_bottom(obstacle.hitbox.top()),
            Axis::Vertical => hitbox.set_top(obstacle.hitbox.bottom()),
        }
        clamped += 1;
    }
    clamped
}
