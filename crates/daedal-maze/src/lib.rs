//! Daedal Maze -- procedural maze core: grid carving, world-space wall
//! layout, collision primitives, and camera-safety math.
//!
//! This crate is the pure, deterministic half of the Daedal maze game. It
//! owns no session state and performs no IO: given a random source it
//! carves a perfect maze ([`generate`]), turns the carved grid into
//! world-space wall segments with bounding volumes ([`layout`]), and
//! provides the per-frame queries the session layer runs against those
//! walls -- sphere-vs-box movement gating ([`collide`]) and the
//! third-person camera raycast ([`camera`]).
//!
//! # Quick Start
//!
//! ```
//! use daedal_maze::prelude::*;
//! use glam::Vec3;
//!
//! let grid = generate_seeded(4, 4, 42);
//! let config = LayoutConfig::default();
//! let walls = build_walls(&grid, &config);
//!
//! // A perfect maze: every cell reachable, exactly one path between any two.
//! assert_eq!(grid.carved_edge_count(), 4 * 4 - 1);
//!
//! // The agent spawns at the entrance cell and is gated by the wall boxes.
//! let boxes: Vec<Aabb> = walls.iter().map(|w| w.aabb()).collect();
//! let spawn = entrance_position(&grid, &config);
//! assert!(move_allowed(spawn, 0.4, &boxes));
//! ```

#![deny(unsafe_code)]

pub mod camera;
pub mod collide;
pub mod generate;
pub mod grid;
pub mod layout;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common maze usage.
pub mod prelude {
    pub use crate::camera::{chase_position, damp, forward_dir, look_target, rotate_yaw};
    pub use crate::collide::{finish_reached, move_allowed, Aabb};
    pub use crate::generate::{generate, generate_random, generate_seeded};
    pub use crate::grid::{Cell, Grid, WallSide};
    pub use crate::layout::{
        build_walls, cell_center, entrance_position, LayoutConfig, WallSegment,
    };
}
