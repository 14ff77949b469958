//! Breadcrumb trail of the agent's path.
//!
//! Renderer-facing data only: the session records a point whenever the
//! agent has moved far enough since the last breadcrumb, up to a fixed cap,
//! and clears the whole trail on restart.

use glam::Vec3;

/// Minimum distance between consecutive breadcrumbs.
const MIN_STEP: f32 = 0.1;
/// Hard cap on recorded points.
const MAX_POINTS: usize = 5000;

/// Capped breadcrumb recorder.
#[derive(Debug, Clone)]
pub struct Trail {
    points: Vec<Vec3>,
    last: Vec3,
}

impl Trail {
    /// An empty trail anchored at the agent's spawn position.
    pub fn new(origin: Vec3) -> Self {
        Self {
            points: Vec::new(),
            last: origin,
        }
    }

    /// Drop all breadcrumbs and re-anchor at `origin`.
    pub fn reset(&mut self, origin: Vec3) {
        self.points.clear();
        self.last = origin;
    }

    /// Record `position` if it is at least the minimum step away from the
    /// last breadcrumb and the cap has not been reached.
    pub fn record(&mut self, position: Vec3) {
        if self.points.len() >= MAX_POINTS {
            return;
        }
        if self.last.distance(position) > MIN_STEP {
            self.points.push(position);
            self.last = position;
        }
    }

    /// The recorded breadcrumbs, oldest first.
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }
}
