//! Per-tick velocity and position integration (semi-implicit Euler).
//!
//! Velocity is updated first from intent and gravity, then position moves by the
//! new velocity. Grounding is never set here; only the collision resolver can
//! establish it.

use glam::Vec2;

use crate::api::config::Tuning;
use crate::core::body::Body;
use crate::input::intent::{InputIntent, JumpEdge};

/// Horizontal speeds below this snap to zero so a body left alone comes to rest.
pub const REST_SPEED: f32 = 1.0;

/// Apply steering, friction, gravity and jump to `body.vel`.
///
/// `edge` is fed every tick so a held jump only fires once. Returns true when a
/// jump was launched this tick. The jump overrides the tick's gravity, so
/// `vel.y == -jump_velocity` right after a jump.
pub fn integrate_velocity(
    body: &mut Body,
    intent: InputIntent,
    edge: &mut JumpEdge,
    dt: f32,
    tuning: &Tuning,
) -> bool {
    let dir = intent.horizontal();
    if dir != 0.0 {
        body.vel.x = (body.vel.x + dir * tuning.accel * dt).clamp(-tuning.max_vx, tuning.max_vx);
    } else {
        let friction = if body.grounded {
            tuning.friction_grounded
        } else {
            tuning.friction_airborne
        };
        body.vel.x *= friction;
        if body.vel.x.abs() < REST_SPEED {
            body.vel.x = 0.0;
        }
    }

    body.vel.y = (body.vel.y + tuning.gravity * dt)
        .clamp(-tuning.max_fall_speed, tuning.max_fall_speed);

    let pressed = edge.update(intent.jump);
    if pressed && body.grounded {
        body.vel.y = -tuning.jump_velocity;
        body.grounded = false;
        return true;
    }
    false
}

/// Move the body by its velocity. Returns the position it started from.
pub fn advance(body: &mut Body, dt: f32) -> Vec2 {
    let from = body.pos;
    body.pos += body.vel * dt;
    from
}
