use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::api::config::Tuning;
use crate::core::geometry::{Rect, Solid, SolidKind};
use crate::level::error::LevelError;
use crate::level::geometry::{LevelGeometry, Viewport, WorldBounds};
use crate::progress::checkpoint::Checkpoint;
use crate::progress::win::GoalZone;

/// How the ground baseline is derived from the viewport height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Baseline {
    /// `floor(height * ratio)`.
    Ratio(f32),
    /// `height - offset`.
    FromBottom(f32),
}

impl Baseline {
    pub fn ground_y(self, viewport_height: f32) -> f32 {
        match self {
            // The epsilon absorbs f32 rounding of decimal ratios (800 * 0.78 must be 624).
            Baseline::Ratio(ratio) => (viewport_height * ratio + 1e-3).floor(),
            Baseline::FromBottom(offset) => viewport_height - offset,
        }
    }
}

/// A vertical coordinate, either fixed or hung from the ground baseline.
///
/// JSON: `{ "ground": 220 }` is 220 units above the ground line,
/// `{ "absolute": 40 }` is y = 40.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YAnchor {
    Ground(f32),
    Absolute(f32),
}

impl YAnchor {
    pub fn resolve(self, ground_y: f32) -> f32 {
        match self {
            YAnchor::Ground(offset) => ground_y - offset,
            YAnchor::Absolute(y) => y,
        }
    }
}

/// Authored solid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolidDef {
    pub x: f32,
    pub y: YAnchor,
    pub w: f32,
    pub h: f32,
    #[serde(default)]
    pub kind: SolidKind,
}

/// Authored checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CheckpointDef {
    pub x: f32,
    pub y: YAnchor,
}

/// Authored goal object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalDef {
    pub x: f32,
    pub y: YAnchor,
    pub w: f32,
    pub h: f32,
    /// Horizontal inset of the trigger from each side of the object.
    #[serde(default)]
    pub inset_x: f32,
}

/// Player body dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyDef {
    pub width: f32,
    pub height: f32,
}

impl Default for BodyDef {
    fn default() -> Self {
        Self {
            width: 46.0,
            height: 96.0,
        }
    }
}

/// A level as authored: viewport-independent, loaded from JSON or built in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelManifest {
    pub name: String,
    pub world_width: f32,
    pub baseline: Baseline,
    #[serde(default)]
    pub body: BodyDef,
    #[serde(default)]
    pub solids: Vec<SolidDef>,
    pub checkpoints: Vec<CheckpointDef>,
    pub goal: GoalDef,
    #[serde(default)]
    pub tuning: Tuning,
}

impl LevelManifest {
    /// Parse and validate a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let manifest: LevelManifest = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn to_json(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Structural checks the simulation relies on.
    ///
    /// Solid sizes are not checked: a zero or negative extent is an authoring
    /// mistake the resolver does not defend against.
    pub fn validate(&self) -> Result<(), LevelError> {
        if self.checkpoints.is_empty() {
            return Err(LevelError::NoCheckpoints(self.name.clone()));
        }
        if self.world_width.is_nan() || self.world_width <= 0.0 {
            return Err(LevelError::WorldWidth {
                level: self.name.clone(),
                width: self.world_width,
            });
        }
        if self.body.width.is_nan()
            || self.body.height.is_nan()
            || self.body.width <= 0.0
            || self.body.height <= 0.0
        {
            return Err(LevelError::BodySize {
                level: self.name.clone(),
                width: self.body.width,
                height: self.body.height,
            });
        }
        for (index, pair) in self.checkpoints.windows(2).enumerate() {
            if pair[1].x < pair[0].x {
                return Err(LevelError::CheckpointOrder {
                    level: self.name.clone(),
                    index: index + 1,
                    x: pair[1].x,
                });
            }
        }
        Ok(())
    }

    /// Resolve anchors against `viewport` into concrete geometry.
    pub fn resolve(&self, viewport: Viewport) -> LevelGeometry {
        let ground_y = self.baseline.ground_y(viewport.height);

        let solids = self
            .solids
            .iter()
            .map(|s| Solid::new(Rect::new(s.x, s.y.resolve(ground_y), s.w, s.h), s.kind))
            .collect();

        let checkpoints = self
            .checkpoints
            .iter()
            .map(|cp| Checkpoint::new(cp.x, cp.y.resolve(ground_y)))
            .collect();

        let g = &self.goal;
        let goal = GoalZone::new(Rect::new(g.x, g.y.resolve(ground_y), g.w, g.h), g.inset_x);

        LevelGeometry {
            viewport,
            world: WorldBounds {
                width: self.world_width,
                height: viewport.height,
                ground_y,
            },
            solids,
            checkpoints,
            goal,
            body_size: Vec2::new(self.body.width, self.body.height),
        }
    }
}
