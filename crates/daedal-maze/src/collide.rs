//! Collision primitives: axis-aligned bounding boxes, the sphere-vs-box
//! test that gates agent movement, and the finish-zone proximity check.
//!
//! Movement is binary accept/reject per attempted step: the proposed
//! position is tested BEFORE being committed, and a rejected step leaves
//! the agent exactly where it was. There is no sliding or penetration
//! resolution.
//!
//! Boundary convention: a sphere whose nearest distance to a box equals its
//! radius exactly counts as intersecting.

use glam::Vec3;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Aabb
// ---------------------------------------------------------------------------

/// Axis-aligned bounding box, stored as min/max corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl Aabb {
    /// Build from explicit corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// World-space bounds of a box of full size `size` centered at `center`
    /// and rotated by `yaw` about the +Y axis.
    ///
    /// The extents are computed from the rotated transform, so the box stays
    /// correct for any yaw, not just the axis-aligned ones the wall layout
    /// happens to produce.
    pub fn from_rotated_box(center: Vec3, size: Vec3, yaw: f32) -> Self {
        let (sin, cos) = yaw.sin_cos();
        let half_x = 0.5 * (size.x * cos.abs() + size.z * sin.abs());
        let half_z = 0.5 * (size.x * sin.abs() + size.z * cos.abs());
        let half = Vec3::new(half_x, 0.5 * size.y, half_z);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// The point inside (or on) the box nearest to `point`.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        point.clamp(self.min, self.max)
    }

    /// Sphere-vs-box test: clamp the sphere center to the box and compare
    /// the squared distance against the squared radius. Touching counts as
    /// intersecting.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.closest_point(center).distance_squared(center) <= radius * radius
    }

    /// Nearest non-negative distance along `dir` (unit length) at which a
    /// ray from `origin` enters the box, or `None` if it misses entirely.
    ///
    /// Slab method. An origin inside the box reports distance zero.
    pub fn ray_intersection(&self, origin: Vec3, dir: Vec3) -> Option<f32> {
        let inv = dir.recip();
        let to_min = (self.min - origin) * inv;
        let to_max = (self.max - origin) * inv;
        let t_near = to_min.min(to_max).max_element();
        let t_far = to_min.max(to_max).min_element();
        if t_far < t_near || t_far < 0.0 {
            return None;
        }
        Some(t_near.max(0.0))
    }
}

// ---------------------------------------------------------------------------
// Movement gate
// ---------------------------------------------------------------------------

/// Whether a sphere of `radius` placed at `proposed` is clear of every box.
///
/// An empty box set means every move is allowed. On `false` the caller is
/// expected to leave the agent's position unchanged and switch its visible
/// behavior to idle/blocked.
pub fn move_allowed(proposed: Vec3, radius: f32, boxes: &[Aabb]) -> bool {
    !boxes
        .iter()
        .any(|aabb| aabb.intersects_sphere(proposed, radius))
}

/// Finish-zone proximity: strict Euclidean-distance check between the
/// agent's CURRENT position and the finish center. The one-shot behavior
/// (fire once, then never again) comes from the caller hiding the zone.
pub fn finish_reached(
    agent_pos: Vec3,
    finish_center: Vec3,
    agent_radius: f32,
    finish_radius: f32,
) -> bool {
    agent_pos.distance(finish_center) < agent_radius + finish_radius
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
