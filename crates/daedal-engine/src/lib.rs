//! Daedal Engine -- frame-driven session layer for the Daedal maze game.
//!
//! This crate builds on [`daedal_maze`] to provide the game controller: a
//! [`GameSession`](session::GameSession) owning the live maze, agent,
//! camera rig, run timer, asset catalog, and animation state machine. The
//! host drives it cooperatively -- one [`update`](session::GameSession::update)
//! per display refresh with the frame's sampled [`InputFrame`](input::InputFrame)
//! and time delta -- and consumes the returned session events plus the
//! session's readable state for rendering.
//!
//! # Quick Start
//!
//! ```
//! use daedal_engine::prelude::*;
//!
//! let mut session = GameSession::with_seed(
//!     SessionConfig::default(),
//!     Box::new(MemoryStore::new()),
//!     42,
//! );
//!
//! // The host's loader reports the character model in; the run begins.
//! session.assets_mut().begin_load(AssetKey::CharacterModel);
//! session.assets_mut().finish_load(AssetKey::CharacterModel);
//!
//! // One 60 Hz frame holding the forward key.
//! let events = session.update(&InputFrame::forward_only(), 1.0 / 60.0);
//! assert!(events.is_empty());
//! assert!(!session.is_completed());
//! ```

#![deny(unsafe_code)]

pub mod animation;
pub mod assets;
pub mod camera;
pub mod input;
pub mod session;
pub mod timer;
pub mod trail;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

/// Re-export the maze core for convenience.
pub use daedal_maze;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common engine usage.
pub mod prelude {
    // Everything from the maze core's prelude.
    pub use daedal_maze::prelude::*;

    // Engine-specific exports.
    pub use crate::animation::{AnimState, AnimationConfig, AnimationController};
    pub use crate::assets::{AssetCatalog, AssetEvent, AssetKey, LoadState};
    pub use crate::camera::{CameraConfig, CameraMode, CameraRig};
    pub use crate::input::InputFrame;
    pub use crate::session::{
        Agent, DecorAnchor, FinishZone, GameSession, SessionConfig, SessionEvent,
    };
    pub use crate::timer::{
        format_time, BestTimeStore, JsonFileStore, MemoryStore, RunTimer, StorageError,
        BEST_TIME_KEY,
    };
    pub use crate::trail::Trail;
}
