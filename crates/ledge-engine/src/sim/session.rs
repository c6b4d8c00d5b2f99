use crate::api::config::Tuning;
use crate::api::types::PlayEvent;
use crate::bridge::protocol::FrameSnapshot;
use crate::core::time::FrameClock;
use crate::input::intent::InputIntent;
use crate::level::error::LevelError;
use crate::level::geometry::{LevelGeometry, Viewport};
use crate::level::manifest::LevelManifest;
use crate::level::presets;
use crate::sim::step::{step, PlayState};

/// One playable level attempt plus everything needed to rebuild it.
///
/// Owns the authored manifest so geometry can be re-resolved on resize, the
/// resolved geometry for the current viewport, and the mutable play state.
pub struct Session {
    manifest: LevelManifest,
    geometry: LevelGeometry,
    state: PlayState,
    clock: FrameClock,
    events: Vec<PlayEvent>,
}

impl Session {
    /// Validate `manifest` and start a fresh attempt at `viewport`.
    pub fn new(manifest: LevelManifest, viewport: Viewport) -> Result<Self, LevelError> {
        manifest.validate()?;
        let geometry = manifest.resolve(viewport);
        let state = PlayState::new(&geometry, &manifest.tuning);
        log::info!(
            "level `{}` loaded: {} solids, {} checkpoints, world {}x{}",
            manifest.name,
            geometry.solids.len(),
            geometry.checkpoints.len(),
            geometry.world.width,
            geometry.world.height
        );
        Ok(Self {
            clock: FrameClock::new(manifest.tuning.max_dt),
            manifest,
            geometry,
            state,
            events: Vec::new(),
        })
    }

    pub fn from_preset(name: &str, viewport: Viewport) -> Result<Self, LevelError> {
        Self::new(presets::by_name(name)?, viewport)
    }

    pub fn from_json(json: &str, viewport: Viewport) -> Result<Self, LevelError> {
        Self::new(LevelManifest::from_json(json)?, viewport)
    }

    /// Advance by one frame. Returns the events produced by this tick.
    pub fn tick(&mut self, intent: InputIntent, frame_dt: f32) -> &[PlayEvent] {
        let dt = self.clock.advance(frame_dt);
        let outcome = step(&self.state, &self.geometry, &self.manifest.tuning, intent, dt);
        self.state = outcome.state;
        self.events = outcome.events;
        &self.events
    }

    /// Re-resolve geometry for a new viewport, keeping the body on the same
    /// footing relative to the ground line.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.geometry.viewport {
            return;
        }
        let geometry = self.manifest.resolve(viewport);
        let shift = geometry.world.ground_y - self.geometry.world.ground_y;
        self.state.body.pos.y += shift;
        self.geometry = geometry;
        self.state.camera.follow(
            self.state.body.pos.x,
            viewport.width,
            self.geometry.world.width,
            self.manifest.tuning.lead_fraction,
        );
        log::debug!(
            "resized to {}x{}; ground line moved by {}",
            viewport.width,
            viewport.height,
            shift
        );
    }

    /// Start the current level over from checkpoint 0.
    pub fn restart(&mut self) {
        self.state = PlayState::new(&self.geometry, &self.manifest.tuning);
        self.clock.reset();
        self.events.clear();
        log::info!("level `{}` restarted", self.manifest.name);
    }

    /// Swap in a different level at the current viewport. On error the
    /// current level is left untouched.
    pub fn load_level(&mut self, manifest: LevelManifest) -> Result<(), LevelError> {
        let next = Self::new(manifest, self.geometry.viewport)?;
        *self = next;
        Ok(())
    }

    /// Replace the tuning of the running level. Play state is kept.
    pub fn set_tuning(&mut self, tuning: Tuning) {
        self.clock.set_max_dt(tuning.max_dt);
        self.manifest.tuning = tuning;
    }

    pub fn manifest(&self) -> &LevelManifest {
        &self.manifest
    }

    pub fn geometry(&self) -> &LevelGeometry {
        &self.geometry
    }

    pub fn state(&self) -> &PlayState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.manifest.tuning
    }

    /// Events from the most recent tick.
    pub fn events(&self) -> &[PlayEvent] {
        &self.events
    }

    pub fn ticks(&self) -> u64 {
        self.clock.ticks()
    }

    pub fn is_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn progress(&self) -> f32 {
        self.geometry.progress(self.state.body.pos.x)
    }

    pub fn meters(&self) -> u32 {
        LevelGeometry::meters(self.state.body.pos.x)
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(&self.state, &self.geometry, self.clock.ticks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::presets::{MEADOW_DASH, PORTRAIT_RUN};

    fn portrait() -> Session {
        Session::from_preset(PORTRAIT_RUN, Viewport::new(360.0, 640.0)).unwrap()
    }

    #[test]
    fn fresh_session_starts_at_checkpoint_zero() {
        let session = portrait();
        let spawn = session.geometry().spawn_point();
        assert_eq!(session.state().body.pos, spawn);
        assert_eq!(session.state().checkpoint_index(), 0);
        assert!(!session.is_won());
        assert_eq!(session.ticks(), 0);
    }

    #[test]
    fn holding_right_moves_forward_and_counts_meters() {
        let mut session = portrait();
        let right = InputIntent::new(false, true, false);
        for _ in 0..60 {
            session.tick(right, 1.0 / 60.0);
        }
        assert!(session.state().body.pos.x > 100.0);
        assert!(session.meters() >= 10);
        assert!(session.progress() > 0.0 && session.progress() < 1.0);
        assert_eq!(session.ticks(), 60);
    }

    #[test]
    fn jump_reports_an_event() {
        let mut session = portrait();
        let events = session.tick(InputIntent::new(false, false, true), 1.0 / 60.0);
        assert_eq!(events, &[PlayEvent::Jumped]);
        assert!(session.state().body.vel.y < 0.0);
    }

    #[test]
    fn resize_keeps_body_on_the_ground_line() {
        let mut session = portrait();
        let before = session.state().body.pos;
        session.resize(Viewport::new(360.0, 800.0));
        // floor(800 * 0.78) - floor(640 * 0.78) = 624 - 499
        assert_eq!(session.state().body.pos.y, before.y + 125.0);
        assert_eq!(session.geometry().world.ground_y, 624.0);

        session.tick(InputIntent::NONE, 1.0 / 60.0);
        assert!(session.state().body.grounded);
        assert_eq!(session.state().body.pos.y, before.y + 125.0);
    }

    #[test]
    fn resize_reclamps_camera_for_new_width() {
        use crate::core::camera::ScrollCamera;

        let mut session = portrait();
        let right = InputIntent::new(false, true, false);
        for _ in 0..90 {
            session.tick(right, 1.0 / 60.0);
        }
        let x = session.state().body.pos.x;
        let lead = session.tuning().lead_fraction;
        for width in [200.0_f32, 360.0, 1000.0, 6000.0] {
            session.resize(Viewport::new(width, 640.0));
            let max = ScrollCamera::max_scroll(5200.0, width);
            let expected = (x - width * lead).clamp(0.0, max);
            assert_eq!(session.state().cam_x(), expected, "width {}", width);
            assert!(session.state().cam_x() <= max);
        }
        assert_eq!(session.state().cam_x(), 0.0);
    }

    #[test]
    fn resize_to_same_viewport_changes_nothing() {
        let mut session = portrait();
        let state = *session.state();
        session.resize(Viewport::new(360.0, 640.0));
        assert_eq!(*session.state(), state);
    }

    #[test]
    fn restart_returns_to_spawn() {
        let mut session = portrait();
        let right = InputIntent::new(false, true, false);
        for _ in 0..120 {
            session.tick(right, 1.0 / 60.0);
        }
        session.restart();
        assert_eq!(session.state().body.pos, session.geometry().spawn_point());
        assert_eq!(session.state().checkpoint_index(), 0);
        assert_eq!(session.ticks(), 0);
        assert!(session.events().is_empty());
    }

    #[test]
    fn bad_level_keeps_the_current_one() {
        let mut session = portrait();
        let mut broken = presets::meadow_dash();
        broken.checkpoints.clear();
        assert!(session.load_level(broken).is_err());
        assert_eq!(session.manifest().name, PORTRAIT_RUN);

        session.load_level(presets::meadow_dash()).unwrap();
        assert_eq!(session.manifest().name, MEADOW_DASH);
        assert_eq!(session.geometry().viewport, Viewport::new(360.0, 640.0));
        assert_eq!(session.state().body.size.y, 135.0);
    }

    #[test]
    fn unknown_preset_fails() {
        assert!(matches!(
            Session::from_preset("nowhere", Viewport::default()),
            Err(LevelError::UnknownPreset(_))
        ));
    }

    #[test]
    fn set_tuning_changes_jump_height() {
        let mut session = portrait();
        session.set_tuning(Tuning {
            jump_velocity: 500.0,
            ..Tuning::default()
        });
        session.tick(InputIntent::new(false, false, true), 1.0 / 60.0);
        assert_eq!(session.state().body.vel.y, -500.0);
    }

    #[test]
    fn walking_into_a_pit_respawns() {
        use crate::core::geometry::SolidKind;

        let mut manifest = presets::portrait_run();
        manifest.solids.retain(|s| s.kind != SolidKind::Crate);
        let mut session = Session::new(manifest, Viewport::new(360.0, 640.0)).unwrap();
        let right = InputIntent::new(false, true, false);
        // Never jumps, so the first pit at x=820 swallows the body.
        for _ in 0..600 {
            session.tick(right, 1.0 / 60.0);
            if session.state().respawns > 0 {
                break;
            }
        }
        assert!(session.state().respawns > 0);
        assert!(session
            .events()
            .iter()
            .any(|e| matches!(e, PlayEvent::Respawned { index: 0, .. })));
        assert_eq!(session.state().body.pos, session.geometry().spawn_point());
    }

    #[test]
    fn snapshot_mirrors_state() {
        let session = portrait();
        let snap = session.snapshot();
        assert_eq!(snap.x, session.state().body.pos.x);
        assert_eq!(snap.checkpoint_count, 6.0);
        assert_eq!(snap.world_width, 5200.0);
        assert_eq!(snap.won, 0.0);
    }
}
