//! Per-frame input snapshot.
//!
//! The host samples its key state once per frame and hands the session an
//! [`InputFrame`]: held flags for movement/rotation plus the one-shot
//! actions (restart, pause toggle, camera-mode switch). One-shot fields are
//! expected to be `true`/`Some` only on the frame the key went down; the
//! session applies them before anything else in its update.

use serde::{Deserialize, Serialize};

use crate::camera::CameraMode;

/// A single frame of sampled input intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    /// Forward key held (arrow-up / W in the reference bindings).
    pub forward: bool,
    /// Rotate-left key held (arrow-left / A).
    pub rotate_left: bool,
    /// Rotate-right key held (arrow-right / D).
    pub rotate_right: bool,
    /// One-shot: rebuild the maze and restart the run (R).
    pub restart: bool,
    /// One-shot: toggle pause (P).
    pub toggle_pause: bool,
    /// One-shot: switch the camera mode (1 = free, 2 = third-person).
    pub camera_mode: Option<CameraMode>,
}

impl InputFrame {
    /// A frame with only the forward key held. Convenient in tests and
    /// scripted runs.
    pub fn forward_only() -> Self {
        Self {
            forward: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_frame_is_inert() {
        let frame = InputFrame::default();
        assert!(!frame.forward && !frame.rotate_left && !frame.rotate_right);
        assert!(!frame.restart && !frame.toggle_pause);
        assert!(frame.camera_mode.is_none());
    }

    #[test]
    fn frames_round_trip_through_json() {
        let frame = InputFrame {
            forward: true,
            camera_mode: Some(CameraMode::Free),
            ..InputFrame::default()
        };
        let json = serde_json::to_string(&frame).expect("serialize");
        let back: InputFrame = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(frame, back);
    }
}
