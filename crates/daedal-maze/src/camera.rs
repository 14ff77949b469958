//! Third-person camera math: offset rotation, the wall-safety raycast, and
//! smoothing.
//!
//! Each frame the rig wants to sit at a fixed offset behind the agent,
//! rotated with the agent's yaw. A ray from the agent toward that desired
//! position is tested against every wall; if a wall is hit closer than the
//! offset's length, the camera is pulled to just in front of the hit point
//! (`hit - safety_margin` along the ray) so it never clips through
//! geometry. The caller then damps the actual camera position toward the
//! computed target instead of snapping.

use glam::{Quat, Vec3};

use crate::layout::WallSegment;

/// Rotate a vector about the +Y axis by `yaw` radians.
pub fn rotate_yaw(v: Vec3, yaw: f32) -> Vec3 {
    Quat::from_rotation_y(yaw) * v
}

/// The agent's forward direction: +Z rotated by its yaw.
pub fn forward_dir(yaw: f32) -> Vec3 {
    rotate_yaw(Vec3::Z, yaw)
}

/// Wall-safe camera position for one frame.
///
/// Returns the full desired position (`agent_pos + rotate_yaw(offset, yaw)`)
/// unless a wall intersects the agent-to-camera ray at a distance shorter
/// than the offset's magnitude, in which case the camera is placed at
/// `hit_distance - safety_margin` along the ray (clamped to the agent's
/// position). An empty wall set always yields the unclamped position.
pub fn chase_position(
    agent_pos: Vec3,
    yaw: f32,
    desired_offset: Vec3,
    walls: &[WallSegment],
    safety_margin: f32,
) -> Vec3 {
    let desired = agent_pos + rotate_yaw(desired_offset, yaw);
    let max_distance = desired_offset.length();
    if walls.is_empty() || max_distance <= f32::EPSILON {
        return desired;
    }

    // Rotation preserves length, so the rotated offset normalizes cleanly.
    let dir = (desired - agent_pos) / max_distance;
    let mut nearest: Option<f32> = None;
    for wall in walls {
        if let Some(t) = wall.aabb().ray_intersection(agent_pos, dir) {
            if nearest.map_or(true, |n| t < n) {
                nearest = Some(t);
            }
        }
    }

    match nearest {
        Some(hit) if hit < max_distance => agent_pos + dir * (hit - safety_margin).max(0.0),
        _ => desired,
    }
}

/// The point the camera looks at: a fixed offset above the agent, rotated
/// with the agent's yaw.
pub fn look_target(agent_pos: Vec3, yaw: f32, look_offset: Vec3) -> Vec3 {
    agent_pos + rotate_yaw(look_offset, yaw)
}

/// Move `current` a constant fraction of the way toward `target`.
/// Applied once per frame this gives exponential-style smoothing with no
/// visible popping.
pub fn damp(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    current.lerp(target, factor)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const OFFSET: Vec3 = Vec3::new(0.0, 5.0, -5.0);

    fn wall_at_z(z: f32) -> WallSegment {
        WallSegment {
            center: Vec3::new(0.0, 4.0, z),
            size: Vec3::new(10.0, 8.0, 0.2),
            yaw: 0.0,
        }
    }

    #[test]
    fn rotate_half_turn_flips_horizontal() {
        let v = rotate_yaw(Vec3::new(0.0, 2.0, 1.0), std::f32::consts::PI);
        assert!(v.x.abs() < 1e-5);
        assert!((v.y - 2.0).abs() < 1e-5);
        assert!((v.z + 1.0).abs() < 1e-5);
    }

    #[test]
    fn forward_matches_yaw() {
        let f = forward_dir(std::f32::consts::PI);
        assert!((f.z + 1.0).abs() < 1e-5, "yaw pi faces -Z, got {f:?}");
    }

    #[test]
    fn no_walls_yields_unclamped_position() {
        let pos = chase_position(Vec3::ZERO, 0.0, OFFSET, &[], 0.5);
        assert!((pos - OFFSET).length() < 1e-5);
    }

    #[test]
    fn occluding_wall_pulls_camera_in() {
        // Desired camera is 5 units behind on -Z (yaw 0); a wall at z = -3
        // sits between agent and camera.
        let agent = Vec3::new(0.0, 0.0, 0.0);
        let walls = [wall_at_z(-3.0)];
        let pos = chase_position(agent, 0.0, OFFSET, &walls, 0.5);
        let clamped_dist = pos.distance(agent);
        let full_dist = OFFSET.length();
        assert!(
            clamped_dist < full_dist - 0.5,
            "camera must stop short of the wall: {clamped_dist} vs {full_dist}"
        );
    }

    #[test]
    fn wall_beyond_offset_does_not_clamp() {
        let walls = [wall_at_z(-50.0)];
        let pos = chase_position(Vec3::ZERO, 0.0, OFFSET, &walls, 0.5);
        assert!((pos - OFFSET).length() < 1e-5);
    }

    #[test]
    fn clamp_never_goes_behind_agent() {
        // Wall hugging the agent: hit distance below the safety margin.
        let walls = [wall_at_z(-0.2)];
        let pos = chase_position(Vec3::ZERO, 0.0, OFFSET, &walls, 0.5);
        assert!(pos.distance(Vec3::ZERO) < 1e-5);
    }

    #[test]
    fn look_target_rotates_with_agent() {
        let target = look_target(Vec3::new(1.0, 0.0, 1.0), 0.0, Vec3::new(0.0, 1.5, 0.0));
        assert_eq!(target, Vec3::new(1.0, 1.5, 1.0));
    }

    #[test]
    fn damp_moves_fractionally() {
        let eased = damp(Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0), 0.1);
        assert!((eased.x - 1.0).abs() < 1e-5);
    }
}
