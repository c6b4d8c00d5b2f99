//! Built-in levels.
//!
//! Both variants run on the same engine; they differ only in geometry and tuning.

use crate::api::config::Tuning;
use crate::core::geometry::SolidKind;
use crate::level::error::LevelError;
use crate::level::manifest::{
    Baseline, BodyDef, CheckpointDef, GoalDef, LevelManifest, SolidDef, YAnchor,
};

pub const PORTRAIT_RUN: &str = "portrait-run";
pub const MEADOW_DASH: &str = "meadow-dash";

/// Names accepted by [`by_name`].
pub const PRESET_NAMES: &[&str] = &[PORTRAIT_RUN, MEADOW_DASH];

/// Look up a built-in level.
pub fn by_name(name: &str) -> Result<LevelManifest, LevelError> {
    match name {
        PORTRAIT_RUN => Ok(portrait_run()),
        MEADOW_DASH => Ok(meadow_dash()),
        other => Err(LevelError::UnknownPreset(other.to_string())),
    }
}

fn solid(x: f32, above_ground: f32, w: f32, h: f32, kind: SolidKind) -> SolidDef {
    SolidDef {
        x,
        y: YAnchor::Ground(above_ground),
        w,
        h,
        kind,
    }
}

/// Long portrait level: six ground segments separated by jumpable pits,
/// ledges, crates, and a parked car at the far end.
pub fn portrait_run() -> LevelManifest {
    const GROUND_DEPTH: f32 = 400.0;
    const LEDGE_H: f32 = 16.0;
    const CRATE_W: f32 = 44.0;
    const CRATE_H: f32 = 46.0;
    const SPAWN_LIFT: f32 = 96.0;

    let mut solids = Vec::new();
    for (x, w) in [
        (0.0, 820.0),
        (940.0, 720.0),
        (1780.0, 760.0),
        (2660.0, 740.0),
        (3520.0, 720.0),
        (4360.0, 760.0),
    ] {
        solids.push(solid(x, 0.0, w, GROUND_DEPTH, SolidKind::Ground));
    }
    for (x, lift, w) in [
        (560.0, 220.0, 220.0),
        (1320.0, 260.0, 220.0),
        (2160.0, 240.0, 240.0),
        (3200.0, 250.0, 220.0),
        (4100.0, 280.0, 220.0),
    ] {
        solids.push(solid(x, lift, w, LEDGE_H, SolidKind::Ledge));
    }
    for x in [420.0, 1180.0, 2040.0, 3000.0, 3940.0] {
        solids.push(solid(x, CRATE_H, CRATE_W, CRATE_H, SolidKind::Crate));
    }

    let checkpoints = [40.0, 1000.0, 1840.0, 2720.0, 3580.0, 4420.0]
        .into_iter()
        .map(|x| CheckpointDef {
            x,
            y: YAnchor::Ground(SPAWN_LIFT),
        })
        .collect();

    LevelManifest {
        name: PORTRAIT_RUN.to_string(),
        world_width: 5200.0,
        baseline: Baseline::Ratio(0.78),
        body: BodyDef {
            width: 46.0,
            height: 96.0,
        },
        solids,
        checkpoints,
        goal: GoalDef {
            x: 4950.0,
            y: YAnchor::Ground(60.0),
            w: 170.0,
            h: 60.0,
            inset_x: 18.0,
        },
        tuning: Tuning::default(),
    }
}

/// Short level on a fixed baseline 140 units above the bottom edge: six
/// platforms, a single start checkpoint, a bigger body and snappier steering.
pub fn meadow_dash() -> LevelManifest {
    const PLATFORM_DEPTH: f32 = 140.0;
    const BODY_H: f32 = 135.0;

    let solids = [
        (0.0, 300.0),
        (380.0, 260.0),
        (720.0, 260.0),
        (1060.0, 260.0),
        (1400.0, 260.0),
        (1740.0, 320.0),
    ]
    .into_iter()
    .map(|(x, w)| solid(x, 0.0, w, PLATFORM_DEPTH, SolidKind::Ground))
    .collect();

    LevelManifest {
        name: MEADOW_DASH.to_string(),
        world_width: 2200.0,
        baseline: Baseline::FromBottom(PLATFORM_DEPTH),
        body: BodyDef {
            width: 90.0,
            height: BODY_H,
        },
        solids,
        checkpoints: vec![CheckpointDef {
            x: 80.0,
            y: YAnchor::Ground(BODY_H),
        }],
        goal: GoalDef {
            x: 2050.0,
            y: YAnchor::Ground(80.0),
            w: 120.0,
            h: 80.0,
            inset_x: 0.0,
        },
        tuning: Tuning {
            gravity: 2200.0,
            accel: 6000.0,
            max_vx: 320.0,
            jump_velocity: 780.0,
            friction_grounded: 0.85,
            friction_airborne: 0.85,
            lead_fraction: 0.36,
            ..Tuning::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::geometry::Viewport;

    #[test]
    fn every_preset_validates() {
        for name in PRESET_NAMES {
            let manifest = by_name(name).unwrap();
            manifest.validate().unwrap();
            assert_eq!(&manifest.name, name);
        }
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let err = by_name("moon-base").unwrap_err();
        assert!(matches!(err, LevelError::UnknownPreset(ref n) if n == "moon-base"));
    }

    #[test]
    fn portrait_run_layout() {
        let level = portrait_run().resolve(Viewport::new(360.0, 640.0));
        assert_eq!(level.world.ground_y, 499.0);
        assert_eq!(level.solids.len(), 16);
        assert_eq!(level.checkpoints.len(), 6);
        assert_eq!(level.min_thickness(), 16.0);
        // Spawn rests exactly on the first ground segment.
        let spawn = level.spawn_point();
        assert_eq!(spawn.y + level.body_size.y, level.world.ground_y);
        assert_eq!(level.goal.trigger.x, 4968.0);
    }

    #[test]
    fn meadow_dash_layout() {
        let level = meadow_dash().resolve(Viewport::new(420.0, 700.0));
        assert_eq!(level.world.ground_y, 560.0);
        assert_eq!(level.spawn_point().y, 560.0 - 135.0);
        assert_eq!(level.min_thickness(), 140.0);
        assert_eq!(level.goal.bounds.y, 480.0);
    }

    #[test]
    fn presets_survive_json() {
        for name in PRESET_NAMES {
            let manifest = by_name(name).unwrap();
            let json = manifest.to_json().unwrap();
            assert_eq!(LevelManifest::from_json(&json).unwrap(), manifest);
        }
    }
}
