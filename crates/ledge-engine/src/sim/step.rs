//! The per-tick orchestrator.
//!
//! `step` is a pure function of `(state, level, tuning, intent, dt)`. It never
//! touches anything but its own copy of the state, so ticks can be driven one at
//! a time in tests without an animation loop.

use glam::Vec2;

use crate::api::config::Tuning;
use crate::api::types::PlayEvent;
use crate::core::body::Body;
use crate::core::camera::ScrollCamera;
use crate::core::collision::{self, resting_on};
use crate::core::kinematics;
use crate::core::time::clamp_dt;
use crate::input::intent::{InputIntent, JumpEdge};
use crate::level::geometry::LevelGeometry;
use crate::progress::checkpoint::{fell_out, CheckpointTracker};
use crate::progress::win::WinLatch;

/// Upper bound on motion sub-steps per tick.
pub const MAX_SUBSTEPS: u32 = 16;

/// Everything that changes from tick to tick during one level attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayState {
    pub body: Body,
    pub checkpoints: CheckpointTracker,
    pub camera: ScrollCamera,
    pub win: WinLatch,
    pub jump: JumpEdge,
    /// Falls out of the world during this attempt.
    pub respawns: u32,
}

impl PlayState {
    /// Fresh attempt: body at checkpoint 0, nothing passed, not won.
    pub fn new(level: &LevelGeometry, tuning: &Tuning) -> Self {
        let body = Body::new(level.spawn_point(), level.body_size);
        let grounded = resting_on(&body, &level.solids);
        let body = body.with_grounded(grounded);
        let mut camera = ScrollCamera::new();
        camera.follow(
            body.pos.x,
            level.viewport.width,
            level.world.width,
            tuning.lead_fraction,
        );
        Self {
            body,
            checkpoints: CheckpointTracker::new(),
            camera,
            win: WinLatch::new(),
            jump: JumpEdge::new(),
            respawns: 0,
        }
    }

    pub fn checkpoint_index(&self) -> usize {
        self.checkpoints.index()
    }

    pub fn cam_x(&self) -> f32 {
        self.camera.x
    }

    pub fn is_won(&self) -> bool {
        self.win.is_won()
    }
}

/// Result of one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TickOutcome {
    pub state: PlayState,
    pub events: Vec<PlayEvent>,
}

/// How many equal slices `dt` must be cut into so that no slice moves the body
/// further than `min_thickness` on either axis.
pub fn substeps(vel: Vec2, dt: f32, min_thickness: f32) -> u32 {
    if !min_thickness.is_finite() {
        return 1;
    }
    let travel = vel.x.abs().max(vel.y.abs()) * dt;
    if travel <= min_thickness {
        return 1;
    }
    let needed = (travel / min_thickness).ceil();
    if needed > MAX_SUBSTEPS as f32 {
        log::warn!(
            "tick travel {:.1} needs {} sub-steps against {:.1}-unit solids; capping at {}",
            travel,
            needed,
            min_thickness,
            MAX_SUBSTEPS
        );
        return MAX_SUBSTEPS;
    }
    (needed as u32).max(1)
}

/// Advance one tick.
///
/// Order: integrate velocity → sub-stepped move + resolve → clamp to world →
/// respawn on fall → checkpoint → camera → win. Once the level is won, gameplay
/// state is frozen and only the camera is refreshed.
pub fn step(
    state: &PlayState,
    level: &LevelGeometry,
    tuning: &Tuning,
    intent: InputIntent,
    dt: f32,
) -> TickOutcome {
    let dt = clamp_dt(dt, tuning.max_dt);
    let mut next = *state;
    let mut events = Vec::new();

    if next.win.is_won() || dt == 0.0 {
        refresh_camera(&mut next, level, tuning);
        return TickOutcome { state: next, events };
    }

    let was_grounded = next.body.grounded;
    if kinematics::integrate_velocity(&mut next.body, intent, &mut next.jump, dt, tuning) {
        events.push(PlayEvent::Jumped);
    }

    let slices = substeps(next.body.vel, dt, level.min_thickness());
    let slice_dt = dt / slices as f32;
    let mut grounded = false;
    for _ in 0..slices {
        let from = kinematics::advance(&mut next.body, slice_dt);
        grounded |= collision::resolve(&mut next.body, from, &level.solids).grounded;
    }
    // A later slice may have carried the body off the edge it landed on.
    next.body.grounded = grounded && resting_on(&next.body, &level.solids);
    if next.body.grounded && !was_grounded {
        events.push(PlayEvent::Landed);
    }

    let max_x = (level.world.width - next.body.size.x).max(0.0);
    next.body.pos.x = next.body.pos.x.clamp(0.0, max_x);

    if fell_out(next.body.pos.y, level.world.height, tuning.fall_margin) {
        let index = next.checkpoints.index();
        let at = next
            .checkpoints
            .respawn_point(&level.checkpoints)
            .unwrap_or_else(|| level.spawn_point());
        next.body.place_at(at);
        next.respawns += 1;
        log::warn!("fell out of the world; respawning at checkpoint {}", index);
        events.push(PlayEvent::Respawned { index, at });
    }

    if let Some(index) = next.checkpoints.update(
        next.body.pos.x,
        &level.checkpoints,
        tuning.checkpoint_tolerance,
    ) {
        log::debug!("checkpoint {} reached at x={:.0}", index, next.body.pos.x);
        events.push(PlayEvent::CheckpointReached { index });
    }

    refresh_camera(&mut next, level, tuning);

    if next.win.check(&next.body.rect(), &level.goal) {
        log::info!("goal reached at x={:.0}", next.body.pos.x);
        events.push(PlayEvent::Won);
    }

    TickOutcome { state: next, events }
}

fn refresh_camera(state: &mut PlayState, level: &LevelGeometry, tuning: &Tuning) {
    state.camera.follow(
        state.body.pos.x,
        level.viewport.width,
        level.world.width,
        tuning.lead_fraction,
    );
}
