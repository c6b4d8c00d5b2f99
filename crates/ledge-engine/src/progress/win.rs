use crate::core::geometry::Rect;

/// The goal object and the region that counts as reaching it.
///
/// The trigger is the object's box inset horizontally, so brushing the bumper
/// is not enough; the body has to get properly alongside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalZone {
    /// Full box of the goal object, as drawn.
    pub bounds: Rect,
    /// Region the body must overlap.
    pub trigger: Rect,
}

impl GoalZone {
    pub fn new(bounds: Rect, inset_x: f32) -> Self {
        Self {
            bounds,
            trigger: bounds.inset_x(inset_x),
        }
    }

    pub fn is_reached(&self, body: &Rect) -> bool {
        body.overlaps(&self.trigger)
    }
}

/// One-way win flag for a level attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WinLatch {
    won: bool,
}

impl WinLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Test the body against the goal. Returns true only on the tick the latch
    /// closes; later overlaps change nothing.
    pub fn check(&mut self, body: &Rect, goal: &GoalZone) -> bool {
        if self.won {
            return false;
        }
        self.won = goal.is_reached(body);
        self.won
    }

    pub fn is_won(&self) -> bool {
        self.won
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car() -> GoalZone {
        GoalZone::new(Rect::new(4950.0, 439.0, 170.0, 60.0), 18.0)
    }

    #[test]
    fn bumper_touch_is_not_a_win() {
        let goal = car();
        // Overlaps the outer 18 units of the car only.
        let body = Rect::new(4950.0 - 40.0, 403.0, 46.0, 96.0);
        assert!(body.overlaps(&goal.bounds));
        assert!(!goal.is_reached(&body));
    }

    #[test]
    fn latch_fires_once() {
        let goal = car();
        let inside = Rect::new(5000.0, 439.0, 46.0, 50.0);
        let mut latch = WinLatch::new();
        assert!(latch.check(&inside, &goal));
        assert!(latch.is_won());
        assert!(!latch.check(&inside, &goal));
        assert!(latch.is_won());
    }

    #[test]
    fn leaving_the_goal_keeps_the_win() {
        let goal = car();
        let mut latch = WinLatch::new();
        latch.check(&Rect::new(5000.0, 439.0, 46.0, 50.0), &goal);
        latch.check(&Rect::new(100.0, 0.0, 46.0, 96.0), &goal);
        assert!(latch.is_won());
    }

    #[test]
    fn miss_leaves_latch_open() {
        let goal = car();
        let mut latch = WinLatch::new();
        assert!(!latch.check(&Rect::new(100.0, 0.0, 46.0, 96.0), &goal));
        assert!(!latch.is_won());
    }
}
