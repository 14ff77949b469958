//! The game session: single owner of all live state, driven once per frame.
//!
//! [`GameSession`] replaces the reference's free-floating module globals
//! (grid, walls, model, camera, timer) with one controller object. Each
//! frame the host samples an [`InputFrame`] and calls
//! [`GameSession::update`], which runs in a fixed order:
//!
//! 1. One-shot actions: pause toggle, restart, camera-mode switch. These
//!    apply even while paused (restart also clears pause).
//! 2. Run start: once the character model asset becomes ready, the run
//!    timer resets and starts.
//! 3. If paused, nothing further mutates -- the agent and timer freeze but
//!    all state remains readable for rendering.
//! 4. The timer accumulates the frame delta while the run is live.
//! 5. The animation controller advances its fades and one-shot clips.
//! 6. Movement: rotation from the held flags, then a forward step proposed
//!    and tested against every wall box. Accepted steps commit, feed the
//!    trail, and drive the walk animation; rejected steps leave the agent
//!    in place and force idle.
//! 7. Finish check: one-shot victory when the agent's current position
//!    comes within the combined radii of the still-visible finish zone.
//! 8. The third-person camera rig follows with the wall-safety raycast.
//!
//! # Wall-set atomicity
//!
//! The wall segments and their boxes are only ever replaced wholesale,
//! inside construction or [`GameSession::restart`] -- never mid-update. A
//! frame's collision and camera passes always observe one complete set.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;
use serde::{Deserialize, Serialize};

use daedal_maze::camera as camera_math;
use daedal_maze::collide::{self, Aabb};
use daedal_maze::generate::generate;
use daedal_maze::grid::Grid;
use daedal_maze::layout::{build_walls, entrance_position, LayoutConfig, WallSegment};

use crate::animation::AnimationController;
use crate::assets::{AssetCatalog, AssetKey};
use crate::camera::{CameraConfig, CameraMode, CameraRig};
use crate::input::InputFrame;
use crate::timer::{BestTimeStore, RunTimer};
use crate::trail::Trail;

/// Thickness of the decorative picture frame hung on a random wall.
const PICTURE_FRAME_THICKNESS: f32 = 0.1;

// ---------------------------------------------------------------------------
// SessionConfig
// ---------------------------------------------------------------------------

/// Tunables for one game session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maze width in cells.
    pub maze_cols: usize,
    /// Maze depth in cells.
    pub maze_rows: usize,
    /// Wall geometry parameters.
    pub layout: LayoutConfig,
    /// Forward speed in world units per second.
    pub move_speed: f32,
    /// Yaw rate in radians per second.
    pub rotation_speed: f32,
    /// The agent's collision-sphere radius.
    pub agent_radius: f32,
    /// Finish-zone center (the maze is centered on the origin).
    pub finish_position: Vec3,
    /// Finish-zone radius.
    pub finish_radius: f32,
    /// Camera rig parameters.
    pub camera: CameraConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            maze_cols: 4,
            maze_rows: 4,
            layout: LayoutConfig::default(),
            move_speed: 6.0,
            rotation_speed: std::f32::consts::PI,
            agent_radius: 0.4,
            finish_position: Vec3::new(0.0, 0.5, 0.0),
            finish_radius: 0.5,
            camera: CameraConfig::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Agent / FinishZone / DecorAnchor
// ---------------------------------------------------------------------------

/// The player-controlled character's spatial state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Agent {
    /// World-space position on the ground plane.
    pub position: Vec3,
    /// Heading in radians about +Y.
    pub yaw: f32,
    /// Collision-sphere radius.
    pub radius: f32,
}

/// The victory marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinishZone {
    /// Zone center.
    pub position: Vec3,
    /// Zone radius.
    pub radius: f32,
    /// Cleared once on victory; the finish check never re-fires afterwards.
    pub visible: bool,
}

/// Placement of the decorative picture on its randomly chosen wall,
/// offset outward along the wall's normal so the frame sits on the face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecorAnchor {
    /// World-space center of the picture frame.
    pub position: Vec3,
    /// Yaw matching the host wall.
    pub yaw: f32,
}

// ---------------------------------------------------------------------------
// SessionEvent
// ---------------------------------------------------------------------------

/// Fire-once notifications the host consumes after each update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A fresh maze replaced the wall set (construction or restart).
    MazeRebuilt,
    /// The agent reached the finish zone. Emitted exactly once per run;
    /// the audio collaborator plays its victory cue on this.
    Victory {
        /// Final run time in seconds.
        elapsed: f64,
        /// Whether this run improved the persisted best time.
        new_best: bool,
    },
}

// ---------------------------------------------------------------------------
// GameSession
// ---------------------------------------------------------------------------

/// One live game: maze, agent, camera, timer, assets, animation.
pub struct GameSession {
    config: SessionConfig,
    rng: Pcg64Mcg,
    grid: Grid,
    walls: Vec<WallSegment>,
    wall_boxes: Vec<Aabb>,
    decor_wall: Option<usize>,
    agent: Agent,
    finish: FinishZone,
    camera: CameraRig,
    animation: AnimationController,
    assets: AssetCatalog,
    trail: Trail,
    timer: RunTimer,
    best_time: Option<f64>,
    store: Box<dyn BestTimeStore>,
    paused: bool,
    completed: bool,
    character_spawned: bool,
}

impl GameSession {
    /// Start a session with an entropy-derived maze seed.
    pub fn new(config: SessionConfig, store: Box<dyn BestTimeStore>) -> Self {
        Self::with_seed(config, store, rand::thread_rng().gen())
    }

    /// Start a fully reproducible session: the given seed determines this
    /// maze and every rebuild after it.
    pub fn with_seed(config: SessionConfig, store: Box<dyn BestTimeStore>, seed: u64) -> Self {
        let mut rng = Pcg64Mcg::seed_from_u64(seed);
        let (grid, walls, wall_boxes, decor_wall) = build_wall_set(&mut rng, &config);

        let spawn = entrance_position(&grid, &config.layout);
        let agent = Agent {
            position: spawn,
            yaw: std::f32::consts::PI,
            radius: config.agent_radius,
        };
        let finish = FinishZone {
            position: config.finish_position,
            radius: config.finish_radius,
            visible: true,
        };

        let best_time = store.load().unwrap_or_else(|err| {
            tracing::warn!(%err, "could not read stored best time");
            None
        });

        let camera = CameraRig::new(config.camera.clone());
        tracing::info!(
            cols = config.maze_cols,
            rows = config.maze_rows,
            walls = walls.len(),
            "session started"
        );

        Self {
            config,
            rng,
            grid,
            walls,
            wall_boxes,
            decor_wall,
            agent,
            finish,
            camera,
            animation: AnimationController::default(),
            assets: AssetCatalog::new(),
            trail: Trail::new(spawn),
            timer: RunTimer::new(),
            best_time,
            store,
            paused: false,
            completed: false,
            character_spawned: false,
        }
    }

    // -- frame update --------------------------------------------------------

    /// Advance the session by one frame. See the module docs for the exact
    /// phase ordering.
    pub fn update(&mut self, input: &InputFrame, dt: f64) -> Vec<SessionEvent> {
        let mut events = Vec::new();

        // Phase 1: one-shot actions, live even while paused.
        if input.toggle_pause {
            self.toggle_pause();
        }
        if input.restart {
            self.restart_into(&mut events);
        }
        if let Some(mode) = input.camera_mode {
            self.camera.set_mode(mode);
        }

        // Phase 2: the run begins once the character model is in. Clip
        // availability is re-synced every frame since clips load late.
        if !self.character_spawned && self.assets.is_ready(AssetKey::CharacterModel) {
            self.character_spawned = true;
            self.timer.reset();
            self.timer.start();
        }
        self.sync_animation_clips();

        // Phase 3: pause freezes everything below.
        if self.paused {
            return events;
        }

        // Phase 4: run clock.
        if self.character_spawned && !self.completed {
            self.timer.advance(dt);
        }

        // Phase 5: animation blending.
        self.animation.update(dt as f32);

        // Phases 6-7: movement and the finish check.
        if self.character_spawned && !self.completed {
            self.apply_movement(input, dt as f32);
            self.check_finish(&mut events);
        }

        // Phase 8: camera follow.
        self.camera
            .update(self.agent.position, self.agent.yaw, &self.walls);

        events
    }

    /// Rebuild the maze and reset the run. Equivalent to the restart input.
    pub fn restart(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        self.restart_into(&mut events);
        events
    }

    fn restart_into(&mut self, events: &mut Vec<SessionEvent>) {
        let (grid, walls, wall_boxes, decor_wall) = build_wall_set(&mut self.rng, &self.config);
        // Swap the whole set at once; no frame sees a partial rebuild.
        self.grid = grid;
        self.walls = walls;
        self.wall_boxes = wall_boxes;
        self.decor_wall = decor_wall;

        let spawn = entrance_position(&self.grid, &self.config.layout);
        self.agent = Agent {
            position: spawn,
            yaw: std::f32::consts::PI,
            radius: self.config.agent_radius,
        };
        self.finish.visible = true;
        self.completed = false;
        self.trail.reset(spawn);
        self.timer.reset();
        if self.character_spawned {
            self.timer.start();
        }
        self.camera.set_mode(CameraMode::ThirdPerson);
        self.paused = false;

        tracing::info!(walls = self.walls.len(), "maze rebuilt");
        events.push(SessionEvent::MazeRebuilt);
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        if self.paused {
            tracing::info!("session paused");
        } else {
            tracing::info!("session resumed");
        }
    }

    fn sync_animation_clips(&mut self) {
        self.animation
            .set_start_clip_available(self.assets.is_ready(AssetKey::StartClip));
        self.animation
            .set_stop_clip_available(self.assets.is_ready(AssetKey::StopClip));
    }

    fn apply_movement(&mut self, input: &InputFrame, dt: f32) {
        if input.rotate_left {
            self.agent.yaw += self.config.rotation_speed * dt;
        }
        if input.rotate_right {
            self.agent.yaw -= self.config.rotation_speed * dt;
        }

        if !input.forward {
            self.animation.set_moving(false);
            return;
        }

        let step = camera_math::forward_dir(self.agent.yaw) * self.config.move_speed * dt;
        let proposed = self.agent.position + step;
        if collide::move_allowed(proposed, self.agent.radius, &self.wall_boxes) {
            self.agent.position = proposed;
            self.trail.record(proposed);
            self.animation.set_moving(true);
        } else {
            tracing::debug!(
                x = proposed.x,
                z = proposed.z,
                "move blocked by wall"
            );
            self.animation.set_moving(false);
        }
    }

    fn check_finish(&mut self, events: &mut Vec<SessionEvent>) {
        if !self.finish.visible {
            return;
        }
        if !collide::finish_reached(
            self.agent.position,
            self.finish.position,
            self.agent.radius,
            self.finish.radius,
        ) {
            return;
        }

        self.finish.visible = false;
        self.completed = true;
        self.timer.stop();
        let elapsed = self.timer.elapsed();

        let new_best = self.best_time.map_or(true, |best| elapsed < best);
        if new_best {
            self.best_time = Some(elapsed);
            if let Err(err) = self.store.save(elapsed) {
                tracing::warn!(%err, "could not persist best time");
            }
        }

        if !self.assets.is_ready(AssetKey::VictoryMusic) {
            tracing::warn!("victory music not loaded; cue will be silent");
        }
        tracing::info!(elapsed, new_best, "finish reached");
        events.push(SessionEvent::Victory { elapsed, new_best });
    }

    // -- accessors -----------------------------------------------------------

    /// The session's tunables.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The live logical grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The live wall set, for drawing and for this frame's raycast.
    pub fn walls(&self) -> &[WallSegment] {
        &self.walls
    }

    /// Bounding boxes of the live wall set, in the same order as
    /// [`walls`](Self::walls).
    pub fn wall_boxes(&self) -> &[Aabb] {
        &self.wall_boxes
    }

    /// The agent's current transform.
    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    /// Mutable agent access.
    ///
    /// Use sparingly -- the update loop owns movement. Direct access is
    /// appropriate for initial placement and testing.
    pub fn agent_mut(&mut self) -> &mut Agent {
        &mut self.agent
    }

    /// The finish zone.
    pub fn finish(&self) -> &FinishZone {
        &self.finish
    }

    /// The camera rig.
    pub fn camera(&self) -> &CameraRig {
        &self.camera
    }

    /// The animation controller's visible state.
    pub fn animation(&self) -> &AnimationController {
        &self.animation
    }

    /// The asset catalog.
    pub fn assets(&self) -> &AssetCatalog {
        &self.assets
    }

    /// Mutable catalog access for the host's loaders.
    pub fn assets_mut(&mut self) -> &mut AssetCatalog {
        &mut self.assets
    }

    /// The breadcrumb trail.
    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Elapsed run time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.timer.elapsed()
    }

    /// Best completion time across sessions, if any.
    pub fn best_time(&self) -> Option<f64> {
        self.best_time
    }

    /// Whether the session is paused.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether the current run has been completed.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Placement for the decorative picture, if the wall set is non-empty.
    pub fn decor_anchor(&self) -> Option<DecorAnchor> {
        let wall = &self.walls[self.decor_wall?];
        let offset =
            self.config.layout.wall_thickness * 0.5 + PICTURE_FRAME_THICKNESS * 0.5 + 0.01;
        Some(DecorAnchor {
            position: wall.center + wall.normal() * offset,
            yaw: wall.yaw,
        })
    }
}

// ---------------------------------------------------------------------------
// Wall-set construction
// ---------------------------------------------------------------------------

/// Generate a fresh grid and derive its complete wall set: segments, their
/// bounding boxes, and the decorative wall pick. Callers swap the returned
/// values in as one unit.
fn build_wall_set(
    rng: &mut Pcg64Mcg,
    config: &SessionConfig,
) -> (Grid, Vec<WallSegment>, Vec<Aabb>, Option<usize>) {
    let grid = generate(config.maze_cols, config.maze_rows, rng);
    let walls = build_walls(&grid, &config.layout);
    let boxes = walls.iter().map(WallSegment::aabb).collect();
    let decor_wall = if walls.is_empty() {
        None
    } else {
        Some(rng.gen_range(0..walls.len()))
    };
    (grid, walls, boxes, decor_wall)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
