use ledge_engine::bridge::protocol::{write_frame, ProtocolLayout};
use ledge_engine::level::presets;
use ledge_engine::{InputIntent, LevelError, LevelManifest, Session, Tuning, Viewport};

/// Wires a [`Session`] to the flat frame buffer the page reads.
///
/// The page sets the held-button state, calls `tick` once per animation frame,
/// then reads header, solids and events straight out of wasm memory. The buffer
/// is reallocated when a new level is loaded, so the page must re-read
/// `buffer_ptr` after any `load_*` call.
pub struct SessionRunner {
    session: Session,
    intent: InputIntent,
    layout: ProtocolLayout,
    buffer: Vec<f32>,
}

impl SessionRunner {
    pub fn new(session: Session) -> Self {
        let layout = ProtocolLayout::for_level(session.geometry());
        let mut runner = Self {
            buffer: vec![0.0; layout.buffer_total_floats],
            session,
            intent: InputIntent::NONE,
            layout,
        };
        runner.publish();
        runner
    }

    /// Start from a preset name or, if `level` looks like JSON, a level manifest.
    /// An unusable `width`/`height` falls back to the default portrait viewport.
    pub fn from_source(level: &str, width: f32, height: f32) -> Result<Self, LevelError> {
        let viewport = checked_viewport(width, height).unwrap_or_else(|| {
            log::warn!("bad initial viewport {}x{}; using default", width, height);
            Viewport::default()
        });
        let session = if level.trim_start().starts_with('{') {
            Session::from_json(level, viewport)?
        } else {
            Session::from_preset(level, viewport)?
        };
        Ok(Self::new(session))
    }

    /// Held-button state, sampled by the next tick.
    pub fn set_input(&mut self, left: bool, right: bool, jump: bool) {
        self.intent = InputIntent::new(left, right, jump);
    }

    pub fn tick(&mut self, dt: f32) {
        self.session.tick(self.intent, dt);
        self.publish();
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        match checked_viewport(width, height) {
            Some(viewport) => {
                self.session.resize(viewport);
                self.publish();
            }
            None => log::warn!("ignoring resize to {}x{}", width, height),
        }
    }

    pub fn restart(&mut self) {
        self.session.restart();
        self.intent = InputIntent::NONE;
        self.publish();
    }

    /// Load a level from JSON. On failure the current level keeps running.
    pub fn load_level_json(&mut self, json: &str) -> bool {
        let loaded = LevelManifest::from_json(json).and_then(|m| self.session.load_level(m));
        self.finish_load(loaded)
    }

    pub fn load_preset(&mut self, name: &str) -> bool {
        let loaded = presets::by_name(name).and_then(|m| self.session.load_level(m));
        self.finish_load(loaded)
    }

    /// Override tuning for the running level from a (partial) JSON object.
    pub fn set_tuning_json(&mut self, json: &str) -> bool {
        match Tuning::from_json(json) {
            Ok(tuning) => {
                self.session.set_tuning(tuning);
                true
            }
            Err(err) => {
                log::error!("invalid tuning JSON: {}", err);
                false
            }
        }
    }

    fn finish_load(&mut self, loaded: Result<(), LevelError>) -> bool {
        match loaded {
            Ok(()) => {
                self.intent = InputIntent::NONE;
                self.layout = ProtocolLayout::for_level(self.session.geometry());
                self.buffer = vec![0.0; self.layout.buffer_total_floats];
                self.publish();
                true
            }
            Err(err) => {
                log::error!("level load failed: {}", err);
                false
            }
        }
    }

    fn publish(&mut self) {
        let snapshot = self.session.snapshot();
        write_frame(
            &mut self.buffer,
            &self.layout,
            &snapshot,
            &self.session.geometry().solids,
            self.session.events(),
        );
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn frame(&self) -> &[f32] {
        &self.buffer
    }

    // ---- Pointer accessors for direct memory reads ----

    pub fn buffer_ptr(&self) -> *const f32 {
        self.buffer.as_ptr()
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }

    // ---- Layout accessors ----

    pub fn max_solids(&self) -> u32 {
        self.layout.max_solids as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn solid_data_offset(&self) -> u32 {
        self.layout.solid_data_offset as u32
    }

    pub fn event_data_offset(&self) -> u32 {
        self.layout.event_data_offset as u32
    }
}

/// A viewport with finite, positive extents, or `None`.
fn checked_viewport(width: f32, height: f32) -> Option<Viewport> {
    let usable = |v: f32| v.is_finite() && v > 0.0;
    (usable(width) && usable(height)).then(|| Viewport::new(width, height))
}
