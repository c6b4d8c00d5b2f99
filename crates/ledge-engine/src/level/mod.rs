pub mod error;
pub mod geometry;
pub mod manifest;
pub mod presets;

pub use error::LevelError;
pub use geometry::{LevelGeometry, Viewport, WorldBounds};
pub use manifest::{Baseline, BodyDef, CheckpointDef, GoalDef, LevelManifest, SolidDef, YAnchor};
