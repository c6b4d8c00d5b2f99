use thiserror::Error;

/// Why a level could not be loaded.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("invalid level JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("level `{0}` has no checkpoints")]
    NoCheckpoints(String),

    #[error("level `{level}`: checkpoint {index} at x={x} is behind the one before it")]
    CheckpointOrder { level: String, index: usize, x: f32 },

    #[error("level `{level}`: world width must be positive, got {width}")]
    WorldWidth { level: String, width: f32 },

    #[error("level `{level}`: body size must be positive, got {width}x{height}")]
    BodySize { level: String, width: f32, height: f32 },

    #[error("unknown level preset `{0}`")]
    UnknownPreset(String),
}
