pub mod checkpoint;
pub mod win;

pub use checkpoint::{fell_out, Checkpoint, CheckpointTracker};
pub use win::{GoalZone, WinLatch};
