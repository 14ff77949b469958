//! World-space wall layout derived from a carved [`Grid`].
//!
//! Every cell emits one [`WallSegment`] per wall flag still set: top/bottom
//! walls sit half a cell edge away on Z with yaw 0, left/right walls half an
//! edge away on X with yaw 90 degrees, so a wall's long axis always spans
//! one cell edge. Emission is strictly per `(cell, side)` — shared uncarved
//! edges between two cells are NOT deduplicated and produce two overlapping
//! segments, one from each cell. Carved edges (both flags cleared) produce
//! none.
//!
//! A rebuild discards the previous segment list wholesale; callers swap the
//! returned vector in atomically so no consumer ever observes a partially
//! rebuilt set.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::collide::Aabb;
use crate::grid::{Grid, WallSide};

// ---------------------------------------------------------------------------
// LayoutConfig
// ---------------------------------------------------------------------------

/// Geometry parameters for the wall layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Logical size of one cell.
    pub cell_size: f32,
    /// Spacing multiplier; `cell_size * spacing` is the world-space cell
    /// pitch and the length of every wall segment.
    pub spacing: f32,
    /// Wall height above the ground plane.
    pub wall_height: f32,
    /// Wall thickness along its normal.
    pub wall_thickness: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell_size: 2.0,
            spacing: 5.0,
            wall_height: 8.0,
            wall_thickness: 0.2,
        }
    }
}

impl LayoutConfig {
    /// World-space length of one cell edge.
    pub fn edge(&self) -> f32 {
        self.cell_size * self.spacing
    }
}

// ---------------------------------------------------------------------------
// WallSegment
// ---------------------------------------------------------------------------

/// One world-space wall: center, full size, and yaw about +Y.
///
/// The bounding volume is derived from the transform on demand, so it is
/// always consistent with the segment's current center/size/yaw.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    /// World-space center (Y is half the wall height: the base sits on the
    /// ground plane).
    pub center: Vec3,
    /// Full extents before rotation: (length, height, thickness).
    pub size: Vec3,
    /// Rotation about +Y in radians. 0 for top/bottom walls, pi/2 for
    /// left/right walls.
    pub yaw: f32,
}

impl WallSegment {
    /// Axis-aligned bounds of the rotated box.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_rotated_box(self.center, self.size, self.yaw)
    }

    /// Outward unit normal of the wall face, rotated with the segment.
    pub fn normal(&self) -> Vec3 {
        crate::camera::rotate_yaw(Vec3::Z, self.yaw)
    }
}

// ---------------------------------------------------------------------------
// Layout building
// ---------------------------------------------------------------------------

/// World-space ground-plane center of cell `(x, y)`.
///
/// The grid is centered so that the generator's start cell lands at the
/// origin: `(x - cols / 2) * edge` on X, `(y - rows / 2) * edge` on Z
/// (integer floor division for the centering offset).
pub fn cell_center(grid: &Grid, x: usize, y: usize, config: &LayoutConfig) -> Vec3 {
    let edge = config.edge();
    Vec3::new(
        (x as f32 - (grid.cols() / 2) as f32) * edge,
        0.0,
        (y as f32 - (grid.rows() / 2) as f32) * edge,
    )
}

/// Ground-plane center of cell `(0, 0)` — where the agent spawns.
pub fn entrance_position(grid: &Grid, config: &LayoutConfig) -> Vec3 {
    cell_center(grid, 0, 0, config)
}

/// Emit one wall segment per `(cell, set wall flag)` pair.
pub fn build_walls(grid: &Grid, config: &LayoutConfig) -> Vec<WallSegment> {
    let edge = config.edge();
    let half = edge * 0.5;
    let size = Vec3::new(edge, config.wall_height, config.wall_thickness);
    let center_y = config.wall_height * 0.5;

    let mut walls = Vec::new();
    for cell in grid.cells() {
        let base = cell_center(grid, cell.x, cell.y, config);
        for side in WallSide::ALL {
            if !cell.wall(side) {
                continue;
            }
            let (offset, yaw) = match side {
                WallSide::Top => (Vec3::new(0.0, 0.0, -half), 0.0),
                WallSide::Bottom => (Vec3::new(0.0, 0.0, half), 0.0),
                WallSide::Right => (Vec3::new(half, 0.0, 0.0), std::f32::consts::FRAC_PI_2),
                WallSide::Left => (Vec3::new(-half, 0.0, 0.0), std::f32::consts::FRAC_PI_2),
            };
            walls.push(WallSegment {
                center: Vec3::new(base.x + offset.x, center_y, base.z + offset.z),
                size,
                yaw,
            });
        }
    }

    tracing::debug!(
        cols = grid.cols(),
        rows = grid.rows(),
        walls = walls.len(),
        "wall layout built"
    );
    walls
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
