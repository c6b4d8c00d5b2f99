use glam::Vec2;

use crate::core::geometry::Solid;
use crate::progress::checkpoint::Checkpoint;
use crate::progress::win::GoalZone;

/// Logical size of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    /// Portrait phone fallback used before the page reports a real size.
    fn default() -> Self {
        Self::new(360.0, 640.0)
    }
}

/// Extent of the playable world for the current viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldBounds {
    pub width: f32,
    /// Equal to the viewport height.
    pub height: f32,
    /// Baseline that ground-anchored geometry hangs from.
    pub ground_y: f32,
}

/// Concrete level snapshot for one viewport size.
///
/// Produced by [`LevelManifest::resolve`](crate::level::LevelManifest::resolve) on
/// init and on every resize. Nothing in it changes during a tick.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelGeometry {
    pub viewport: Viewport,
    pub world: WorldBounds,
    pub solids: Vec<Solid>,
    /// Never empty; ordered by ascending x.
    pub checkpoints: Vec<Checkpoint>,
    pub goal: GoalZone,
    pub body_size: Vec2,
}

impl LevelGeometry {
    /// Where a fresh attempt starts.
    pub fn spawn_point(&self) -> Vec2 {
        self.checkpoints.first().map(|cp| cp.pos).unwrap_or(Vec2::ZERO)
    }

    /// Thinnest solid extent in the level. Infinite when there are no solids.
    pub fn min_thickness(&self) -> f32 {
        self.solids
            .iter()
            .map(|s| s.rect.thickness())
            .fold(f32::INFINITY, f32::min)
    }

    /// Share of the run completed, `clamp(x / goal.x, 0, 1)`.
    pub fn progress(&self, body_x: f32) -> f32 {
        let goal_x = self.goal.bounds.x;
        if goal_x <= 0.0 {
            return 1.0;
        }
        (body_x / goal_x).clamp(0.0, 1.0)
    }

    /// Distance readout in whole "meters" (ten world units each).
    pub fn meters(body_x: f32) -> u32 {
        (body_x.max(0.0) / 10.0).floor() as u32
    }
}
