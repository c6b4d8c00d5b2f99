use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in world units.
/// `(x, y)` is the top-left corner; Y grows downward, matching canvas space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Strict overlap test. Rectangles that only share an edge do not overlap,
    /// which is what lets a body rest exactly on top of a solid.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() <= other.x
            || self.x >= other.right()
            || self.bottom() <= other.y
            || self.y >= other.bottom())
    }

    /// Shrink horizontally by `amount` on each side.
    pub fn inset_x(&self, amount: f32) -> Rect {
        Rect::new(self.x + amount, self.y, (self.w - amount * 2.0).max(0.0), self.h)
    }

    /// The smaller of width and height.
    pub fn thickness(&self) -> f32 {
        self.w.min(self.h)
    }
}

/// What a solid represents in the level. Only affects presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolidKind {
    #[default]
    Ground,
    Ledge,
    Crate,
}

impl SolidKind {
    /// Wire value used in the solids buffer.
    pub fn as_f32(self) -> f32 {
        match self {
            SolidKind::Ground => 0.0,
            SolidKind::Ledge => 1.0,
            SolidKind::Crate => 2.0,
        }
    }
}

/// A static rectangle the body cannot pass through.
///
/// Width and height must be positive. This is a level-authoring precondition;
/// the resolver does not check it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solid {
    pub rect: Rect,
    pub kind: SolidKind,
}

impl Solid {
    pub fn new(rect: Rect, kind: SolidKind) -> Self {
        Self { rect, kind }
    }

    pub fn ground(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self::new(Rect::new(x, y, w, h), SolidKind::Ground)
    }
}
