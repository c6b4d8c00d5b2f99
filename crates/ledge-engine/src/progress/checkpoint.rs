use glam::Vec2;

/// A resumable position along the level. `pos` is where the body's top-left
/// corner is placed on respawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkpoint {
    pub pos: Vec2,
}

impl Checkpoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { pos: Vec2::new(x, y) }
    }
}

/// Monotonic progress marker over an ordered checkpoint list.
///
/// The index only moves forward. It returns to zero only through `reset`,
/// which is reserved for an explicit level restart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckpointTracker {
    index: usize,
}

impl CheckpointTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the last checkpoint passed.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Advance to the furthest checkpoint at or after the current one whose x
    /// (less `tolerance`) the body has reached. Returns the new index if it moved.
    pub fn update(&mut self, body_x: f32, checkpoints: &[Checkpoint], tolerance: f32) -> Option<usize> {
        let mut reached = self.index;
        for (i, cp) in checkpoints.iter().enumerate().skip(self.index) {
            if body_x >= cp.pos.x - tolerance {
                reached = i;
            }
        }
        if reached > self.index {
            self.index = reached;
            Some(reached)
        } else {
            None
        }
    }

    /// Where to put the body after a fall. `None` only for an empty list.
    pub fn respawn_point(&self, checkpoints: &[Checkpoint]) -> Option<Vec2> {
        checkpoints
            .get(self.index)
            .or_else(|| checkpoints.last())
            .map(|cp| cp.pos)
    }

    pub fn reset(&mut self) {
        self.index = 0;
    }
}

/// True once the body's top edge has dropped `fall_margin` below the world.
pub fn fell_out(body_y: f32, world_height: f32, fall_margin: f32) -> bool {
    body_y > world_height + fall_margin
}
