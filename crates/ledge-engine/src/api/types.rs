use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Numeric event kinds on the wire. Must stay in sync with the page's `events.ts`.
pub mod event_kind {
    pub const JUMPED: f32 = 1.0;
    pub const LANDED: f32 = 2.0;
    pub const CHECKPOINT_REACHED: f32 = 3.0;
    pub const RESPAWNED: f32 = 4.0;
    pub const WON: f32 = 5.0;
}

/// Something discrete that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayEvent {
    /// A jump launched from the ground.
    Jumped,
    /// The body touched down after being airborne.
    Landed,
    /// Progress moved to checkpoint `index`.
    CheckpointReached { index: usize },
    /// The body fell out of the world and was put back at checkpoint `index`.
    Respawned { index: usize, at: Vec2 },
    /// The goal trigger was reached.
    Won,
}

impl PlayEvent {
    /// Flatten into the fixed wire form.
    pub fn to_wire(&self) -> GameEvent {
        match *self {
            PlayEvent::Jumped => GameEvent::new(event_kind::JUMPED, 0.0, 0.0, 0.0),
            PlayEvent::Landed => GameEvent::new(event_kind::LANDED, 0.0, 0.0, 0.0),
            PlayEvent::CheckpointReached { index } => {
                GameEvent::new(event_kind::CHECKPOINT_REACHED, index as f32, 0.0, 0.0)
            }
            PlayEvent::Respawned { index, at } => {
                GameEvent::new(event_kind::RESPAWNED, index as f32, at.x, at.y)
            }
            PlayEvent::Won => GameEvent::new(event_kind::WON, 0.0, 0.0, 0.0),
        }
    }
}

/// A game event communicated from Rust to the page as four floats.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}
