use glam::Vec2;
use crate::core::geometry::Rect;

/// The single dynamic box under simulation (the player).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    /// Top-left corner in world space.
    pub pos: Vec2,
    /// Width and height in world units.
    pub size: Vec2,
    /// Velocity in world units per second.
    pub vel: Vec2,
    /// True when the most recent vertical resolution landed on a solid.
    pub grounded: bool,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            size,
            vel: Vec2::ZERO,
            grounded: false,
        }
    }

    // -- Builder pattern --

    #[cfg(test)]
    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }

    pub fn with_grounded(mut self, grounded: bool) -> Self {
        self.grounded = grounded;
        self
    }

    /// Current bounding box.
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size)
    }

    /// Teleport to `pos` and come to rest. Identity (size) is kept.
    pub fn place_at(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
        self.grounded = false;
    }
}
