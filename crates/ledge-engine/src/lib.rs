pub mod api;
pub mod bridge;
pub mod core;
pub mod input;
pub mod level;
pub mod progress;
pub mod sim;

// Re-export key types at crate root for convenience
pub use api::config::Tuning;
pub use api::types::{GameEvent, PlayEvent};
pub use bridge::protocol::{write_frame, FrameSnapshot, ProtocolLayout};
pub use crate::core::body::Body;
pub use crate::core::camera::ScrollCamera;
pub use crate::core::collision::Contact;
pub use crate::core::geometry::{Rect, Solid, SolidKind};
pub use crate::core::time::FrameClock;
pub use input::intent::{InputIntent, JumpEdge};
pub use level::{LevelError, LevelGeometry, LevelManifest, Viewport, WorldBounds};
pub use progress::{Checkpoint, CheckpointTracker, GoalZone, WinLatch};
pub use sim::{step, PlayState, Session, TickOutcome};
