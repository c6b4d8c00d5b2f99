//! Axis-separated collision resolution against static solids, X before Y.
//!
//! Solids are visited in the order given. When several overlap in one pass each
//! correction is applied in turn and the box is refreshed before the next test,
//! so a later solid can override an earlier push-out.

use glam::Vec2;

use crate::core::body::Body;
use crate::core::geometry::{Rect, Solid};

/// Slack allowed between a body's bottom edge and a solid's top when deciding
/// whether it is still standing there.
pub const CONTACT_EPSILON: f32 = 1e-3;

/// What the resolver touched during one call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Contact {
    /// Landed on top of a solid.
    pub grounded: bool,
}

/// Resolve `body` (already moved to its new position) against `solids`.
///
/// `from` is where the body was before the move. The X pass tests the box at
/// the new x and the old y; the Y pass tests the X-corrected box at the new y.
/// Sets `body.grounded` and returns the contact made.
pub fn resolve(body: &mut Body, from: Vec2, solids: &[Solid]) -> Contact {
    let mut contact = Contact::default();
    body.grounded = false;

    // X pass
    let moving_x = body.vel.x;
    let mut bx = Rect::new(body.pos.x, from.y, body.size.x, body.size.y);
    for solid in solids {
        let s = &solid.rect;
        if !bx.overlaps(s) {
            continue;
        }
        if moving_x > 0.0 {
            body.pos.x = s.x - body.size.x;
        } else if moving_x < 0.0 {
            body.pos.x = s.right();
        } else {
            // No horizontal travel: the vertical pass owns this overlap.
            continue;
        }
        body.vel.x = 0.0;
        bx.x = body.pos.x;
    }

    // Y pass
    let moving_y = body.vel.y;
    let mut by = body.rect();
    for solid in solids {
        let s = &solid.rect;
        if !by.overlaps(s) {
            continue;
        }
        let land = if moving_y > 0.0 {
            true
        } else if moving_y < 0.0 {
            false
        } else {
            // Resting overlap (respawn or resize): leave through the nearer face.
            by.bottom() - s.y <= s.bottom() - by.y
        };
        if land {
            body.pos.y = s.y - body.size.y;
            body.grounded = true;
            contact.grounded = true;
        } else {
            body.pos.y = s.bottom();
        }
        body.vel.y = 0.0;
        by.y = body.pos.y;
    }

    contact
}

/// True when the body's box overlaps any solid.
pub fn penetrates(body: &Body, solids: &[Solid]) -> bool {
    let rect = body.rect();
    solids.iter().any(|s| rect.overlaps(&s.rect))
}

/// True when the body's bottom edge sits on top of some solid it horizontally
/// overlaps.
pub fn resting_on(body: &Body, solids: &[Solid]) -> bool {
    let rect = body.rect();
    solids.iter().any(|s| {
        (rect.bottom() - s.rect.y).abs() <= CONTACT_EPSILON
            && rect.x < s.rect.right()
            && rect.right() > s.rect.x
    })
}
