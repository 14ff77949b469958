//! Stateful camera rig over the maze crate's camera math.
//!
//! In third-person mode the rig recomputes the wall-safe chase target every
//! frame and damps its actual position toward it. In free mode the rig goes
//! dormant: an external orbit control owns the camera and the core leaves
//! its last state untouched.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use daedal_maze::camera::{chase_position, damp, look_target};
use daedal_maze::layout::WallSegment;

// ---------------------------------------------------------------------------
// CameraMode
// ---------------------------------------------------------------------------

/// Who drives the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraMode {
    /// External orbit controls; the rig is dormant.
    Free,
    /// The rig follows the agent with the wall-safety raycast.
    ThirdPerson,
}

// ---------------------------------------------------------------------------
// CameraConfig
// ---------------------------------------------------------------------------

/// Rig parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Desired offset from the agent, in the agent's local frame.
    pub offset: Vec3,
    /// Look-at offset above the agent, also rotated with the agent.
    pub look_offset: Vec3,
    /// Per-frame lerp factor toward the computed target.
    pub smoothing: f32,
    /// How far in front of an occluding wall the camera stops.
    pub safety_margin: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            offset: Vec3::new(0.0, 5.0, -5.0),
            look_offset: Vec3::new(0.0, 1.5, 0.0),
            smoothing: 0.1,
            safety_margin: 0.5,
        }
    }
}

// ---------------------------------------------------------------------------
// CameraRig
// ---------------------------------------------------------------------------

/// The session's camera state.
#[derive(Debug, Clone)]
pub struct CameraRig {
    config: CameraConfig,
    mode: CameraMode,
    position: Vec3,
    look_at: Vec3,
}

impl CameraRig {
    /// A third-person rig resting at its configured offset.
    pub fn new(config: CameraConfig) -> Self {
        let position = config.offset;
        Self {
            config,
            mode: CameraMode::ThirdPerson,
            position,
            look_at: Vec3::ZERO,
        }
    }

    /// Current drive mode.
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Switch modes. Idempotent.
    pub fn set_mode(&mut self, mode: CameraMode) {
        if self.mode != mode {
            tracing::debug!(?mode, "camera mode switched");
            self.mode = mode;
        }
    }

    /// Smoothed world-space camera position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Current look-at target.
    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    /// Per-frame follow update; a no-op outside third-person mode.
    pub fn update(&mut self, agent_pos: Vec3, agent_yaw: f32, walls: &[WallSegment]) {
        if self.mode != CameraMode::ThirdPerson {
            return;
        }
        let target = chase_position(
            agent_pos,
            agent_yaw,
            self.config.offset,
            walls,
            self.config.safety_margin,
        );
        self.position = damp(self.position, target, self.config.smoothing);
        self.look_at = look_target(agent_pos, agent_yaw, self.config.look_offset);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
