//! Asset-loading state machine.
//!
//! The core never performs IO; the host's loaders drive each asset slot
//! through `Unloaded -> Loading -> Ready | Failed` and the session reads
//! the resulting states. Completion notifications accumulate as
//! [`AssetEvent`]s until the host drains them.
//!
//! Degradation rules: only the character model gates movement. A failed
//! animation clip pins the animation controller to its direct transitions,
//! failed victory music mutes the cue, and a failed wall texture loses the
//! decorative picture — gameplay continues in every case.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// AssetKey
// ---------------------------------------------------------------------------

/// The fixed set of assets the session cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetKey {
    /// The rigged character model (contains the idle clip).
    CharacterModel,
    /// Looping walk animation clip.
    WalkClip,
    /// One-shot start-moving clip.
    StartClip,
    /// One-shot stop-moving clip.
    StopClip,
    /// Victory audio cue.
    VictoryMusic,
    /// Decorative wall picture texture.
    WallTexture,
}

impl AssetKey {
    /// Every asset slot, in load order.
    pub const ALL: [AssetKey; 6] = [
        AssetKey::CharacterModel,
        AssetKey::WalkClip,
        AssetKey::StartClip,
        AssetKey::StopClip,
        AssetKey::VictoryMusic,
        AssetKey::WallTexture,
    ];

    /// Stable name for logging.
    pub fn name(self) -> &'static str {
        match self {
            AssetKey::CharacterModel => "character_model",
            AssetKey::WalkClip => "walk_clip",
            AssetKey::StartClip => "start_clip",
            AssetKey::StopClip => "stop_clip",
            AssetKey::VictoryMusic => "victory_music",
            AssetKey::WallTexture => "wall_texture",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

// ---------------------------------------------------------------------------
// LoadState / AssetEvent
// ---------------------------------------------------------------------------

/// Lifecycle state of one asset slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadState {
    /// No load requested yet.
    Unloaded,
    /// Load in flight.
    Loading,
    /// Loaded and usable.
    Ready,
    /// Load failed; the feature it backs is absent.
    Failed(String),
}

/// Completion notification for the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetEvent {
    /// The asset finished loading.
    Loaded(AssetKey),
    /// The asset failed to load, with the loader's reason.
    Failed(AssetKey, String),
}

// ---------------------------------------------------------------------------
// AssetCatalog
// ---------------------------------------------------------------------------

/// Tracks every asset slot's state and queues completion events.
///
/// Transitions outside the state machine (completing a slot that was never
/// loading, re-requesting a finished slot) are ignored with a debug log --
/// loader callbacks can race a restart and must not corrupt state.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    states: [LoadState; AssetKey::ALL.len()],
    events: Vec<AssetEvent>,
}

impl Default for AssetCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl AssetCatalog {
    /// A catalog with every slot unloaded.
    pub fn new() -> Self {
        Self {
            states: std::array::from_fn(|_| LoadState::Unloaded),
            events: Vec::new(),
        }
    }

    /// Current state of a slot.
    pub fn state(&self, key: AssetKey) -> &LoadState {
        &self.states[key.index()]
    }

    /// Whether the slot is ready for use.
    pub fn is_ready(&self, key: AssetKey) -> bool {
        matches!(self.state(key), LoadState::Ready)
    }

    /// Mark a load as started. Valid only from `Unloaded`.
    pub fn begin_load(&mut self, key: AssetKey) {
        let idx = key.index();
        if matches!(self.states[idx], LoadState::Unloaded) {
            self.states[idx] = LoadState::Loading;
        } else {
            tracing::debug!(asset = key.name(), state = ?self.states[idx], "begin_load ignored");
        }
    }

    /// Mark an in-flight load as complete. Valid only from `Loading`.
    pub fn finish_load(&mut self, key: AssetKey) {
        let idx = key.index();
        if matches!(self.states[idx], LoadState::Loading) {
            self.states[idx] = LoadState::Ready;
            self.events.push(AssetEvent::Loaded(key));
        } else {
            tracing::debug!(asset = key.name(), state = ?self.states[idx], "finish_load ignored");
        }
    }

    /// Mark an in-flight load as failed. Valid only from `Loading`. The
    /// failure is logged once here; consumers simply observe the absent
    /// feature.
    pub fn fail_load(&mut self, key: AssetKey, reason: impl Into<String>) {
        let reason = reason.into();
        let idx = key.index();
        if matches!(self.states[idx], LoadState::Loading) {
            tracing::warn!(asset = key.name(), %reason, "asset load failed; degrading");
            self.states[idx] = LoadState::Failed(reason.clone());
            self.events.push(AssetEvent::Failed(key, reason));
        } else {
            tracing::debug!(asset = key.name(), state = ?self.states[idx], "fail_load ignored");
        }
    }

    /// Take all queued completion events.
    pub fn drain_events(&mut self) -> Vec<AssetEvent> {
        std::mem::take(&mut self.events)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
