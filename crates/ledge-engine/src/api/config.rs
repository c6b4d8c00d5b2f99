use serde::{Deserialize, Serialize};

/// Physics and feel parameters for one game variant.
///
/// Every field has a default, so a JSON override only needs the fields it changes:
/// ```text
/// { "gravity": 2200, "jump_velocity": 780 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration in units/s² (Y-down world).
    pub gravity: f32,
    /// Horizontal acceleration while a direction is held, units/s².
    pub accel: f32,
    /// Horizontal speed cap, units/s.
    pub max_vx: f32,
    /// Vertical speed cap in either direction, units/s.
    pub max_fall_speed: f32,
    /// Upward speed applied on jump, units/s (stored positive).
    pub jump_velocity: f32,
    /// Per-tick horizontal velocity multiplier on the ground with no intent.
    pub friction_grounded: f32,
    /// Per-tick horizontal velocity multiplier in the air with no intent.
    pub friction_airborne: f32,
    /// Fraction of the viewport kept behind the body when scrolling.
    pub lead_fraction: f32,
    /// How far below the world's bottom edge the body may fall before respawning.
    pub fall_margin: f32,
    /// Slack when testing whether a checkpoint has been passed.
    pub checkpoint_tolerance: f32,
    /// Upper bound on a single tick's `dt`, seconds.
    pub max_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 1900.0,
            accel: 1300.0,
            max_vx: 360.0,
            max_fall_speed: 1600.0,
            jump_velocity: 900.0,
            friction_grounded: 0.86,
            friction_airborne: 0.97,
            lead_fraction: 0.35,
            fall_margin: 200.0,
            checkpoint_tolerance: 20.0,
            max_dt: 0.033,
        }
    }
}

impl Tuning {
    /// Parse a tuning block from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
