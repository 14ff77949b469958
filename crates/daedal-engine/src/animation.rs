//! Character animation state machine.
//!
//! Replaces the ad hoc named-action dispatch of the reference with a finite
//! set of states and an explicit transition table:
//!
//! ```text
//!         +--> Start --+
//!         |            v
//!       Idle <------ Walk
//!         ^            |
//!         +--- Stop <--+
//! ```
//!
//! `Start` and `Stop` are one-shot states that auto-advance when their clip
//! duration elapses (`Stop` finishing returns to `Idle`, mirroring the
//! reference's `finished` listener). When the one-shot clips are
//! unavailable the controller degrades to direct `Idle <-> Walk`
//! transitions. Every transition cross-fades: the outgoing state stays
//! observable as [`AnimationController::fading_from`] until the fade
//! completes, so the renderer can blend weights.
//!
//! Transitions not in the table are ignored, never errors -- the visible
//! pose is cosmetic and must not disturb the simulation.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AnimState
// ---------------------------------------------------------------------------

/// The four visible character states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimState {
    /// Standing still (also the blocked-by-wall pose).
    Idle,
    /// One-shot transition into movement.
    Start,
    /// Looping locomotion.
    Walk,
    /// One-shot transition out of movement.
    Stop,
}

impl AnimState {
    /// Whether this state plays once and then auto-advances.
    pub fn is_one_shot(self) -> bool {
        matches!(self, AnimState::Start | AnimState::Stop)
    }
}

/// The explicit transition table. Self-transitions are not listed; a
/// request for the current state is always a no-op.
fn allowed(from: AnimState, to: AnimState) -> bool {
    matches!(
        (from, to),
        (AnimState::Idle, AnimState::Start)
            | (AnimState::Idle, AnimState::Walk)
            | (AnimState::Start, AnimState::Walk)
            | (AnimState::Start, AnimState::Idle)
            | (AnimState::Walk, AnimState::Stop)
            | (AnimState::Walk, AnimState::Idle)
            | (AnimState::Stop, AnimState::Idle)
            | (AnimState::Stop, AnimState::Walk)
    )
}

// ---------------------------------------------------------------------------
// AnimationConfig
// ---------------------------------------------------------------------------

/// Timing parameters for blending and the one-shot clips.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationConfig {
    /// Cross-fade length in seconds.
    pub fade: f32,
    /// Duration of the start clip; the host overwrites this once the clip
    /// loads and reports its real length.
    pub start_duration: f32,
    /// Duration of the stop clip.
    pub stop_duration: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            fade: 0.5,
            start_duration: 1.0,
            stop_duration: 1.0,
        }
    }
}

// ---------------------------------------------------------------------------
// AnimationController
// ---------------------------------------------------------------------------

/// Drives the character's visible state from movement intent.
#[derive(Debug, Clone)]
pub struct AnimationController {
    config: AnimationConfig,
    current: AnimState,
    /// Outgoing state and its remaining fade time.
    fading: Option<(AnimState, f32)>,
    /// Remaining play time of the current one-shot state.
    one_shot_remaining: Option<f32>,
    /// Whether the one-shot clips are available (asset-dependent).
    has_start_clip: bool,
    has_stop_clip: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(AnimationConfig::default())
    }
}

impl AnimationController {
    /// A controller resting in `Idle` with no clips available yet.
    pub fn new(config: AnimationConfig) -> Self {
        Self {
            config,
            current: AnimState::Idle,
            fading: None,
            one_shot_remaining: None,
            has_start_clip: false,
            has_stop_clip: false,
        }
    }

    /// The state currently driving the pose.
    pub fn current(&self) -> AnimState {
        self.current
    }

    /// The state still fading out, if a cross-fade is in progress.
    pub fn fading_from(&self) -> Option<AnimState> {
        self.fading.map(|(state, _)| state)
    }

    /// Enable the one-shot start clip (call when the asset becomes ready).
    pub fn set_start_clip_available(&mut self, available: bool) {
        self.has_start_clip = available;
    }

    /// Enable the one-shot stop clip.
    pub fn set_stop_clip_available(&mut self, available: bool) {
        self.has_stop_clip = available;
    }

    /// Feed the frame's movement outcome: `true` while the agent is
    /// actually walking, `false` when idle or blocked by a wall.
    pub fn set_moving(&mut self, moving: bool) {
        match (self.current, moving) {
            (AnimState::Idle, true) => {
                let target = if self.has_start_clip {
                    AnimState::Start
                } else {
                    AnimState::Walk
                };
                self.transition(target);
            }
            (AnimState::Stop, true) => self.transition(AnimState::Walk),
            (AnimState::Walk, false) => {
                let target = if self.has_stop_clip {
                    AnimState::Stop
                } else {
                    AnimState::Idle
                };
                self.transition(target);
            }
            (AnimState::Start, false) => self.transition(AnimState::Idle),
            _ => {}
        }
    }

    /// Advance fades and one-shot clocks by one frame.
    pub fn update(&mut self, dt: f32) {
        if let Some((state, remaining)) = self.fading {
            let remaining = remaining - dt;
            self.fading = (remaining > 0.0).then_some((state, remaining));
        }

        if let Some(remaining) = self.one_shot_remaining {
            let remaining = remaining - dt;
            if remaining <= 0.0 {
                self.one_shot_remaining = None;
                match self.current {
                    AnimState::Start => self.transition(AnimState::Walk),
                    AnimState::Stop => self.transition(AnimState::Idle),
                    _ => {}
                }
            } else {
                self.one_shot_remaining = Some(remaining);
            }
        }
    }

    fn transition(&mut self, to: AnimState) {
        if to == self.current {
            return;
        }
        if !allowed(self.current, to) {
            tracing::debug!(from = ?self.current, to = ?to, "animation transition ignored");
            return;
        }
        self.fading = Some((self.current, self.config.fade));
        self.current = to;
        self.one_shot_remaining = match to {
            AnimState::Start => Some(self.config.start_duration),
            AnimState::Stop => Some(self.config.stop_duration),
            _ => None,
        };
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
