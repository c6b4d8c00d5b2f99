/// Horizontal scroll camera for a side-scroller.
///
/// `x` is the world-space x of the viewport's left edge. The camera keeps the
/// followed body `lead_fraction` of a viewport from the left edge, so more of
/// the level ahead is visible than behind, and never shows past either end of
/// the world.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollCamera {
    pub x: f32,
}

impl ScrollCamera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Largest valid scroll offset. Zero when the viewport is wider than the world.
    pub fn max_scroll(world_width: f32, viewport_width: f32) -> f32 {
        (world_width - viewport_width).max(0.0)
    }

    /// Recompute the offset for `target_x`. Call every tick; the viewport width
    /// may have changed since the last one.
    pub fn follow(
        &mut self,
        target_x: f32,
        viewport_width: f32,
        world_width: f32,
        lead_fraction: f32,
    ) {
        let desired = target_x - viewport_width * lead_fraction;
        self.x = desired.clamp(0.0, Self::max_scroll(world_width, viewport_width));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_at_world_end() {
        let mut cam = ScrollCamera::new();
        cam.follow(5100.0, 360.0, 5200.0, 0.35);
        assert_eq!(cam.x, 4840.0);
    }

    #[test]
    fn clamps_at_world_start() {
        let mut cam = ScrollCamera::new();
        cam.follow(40.0, 360.0, 5200.0, 0.35);
        assert_eq!(cam.x, 0.0);
    }

    #[test]
    fn leads_in_the_middle() {
        let mut cam = ScrollCamera::new();
        cam.follow(2000.0, 400.0, 5200.0, 0.35);
        assert!((cam.x - 1860.0).abs() < 1e-3);
    }

    #[test]
    fn wide_viewport_pins_to_zero() {
        let mut cam = ScrollCamera::new();
        cam.follow(1500.0, 3000.0, 2200.0, 0.35);
        assert_eq!(cam.x, 0.0);
    }

    #[test]
    fn stays_in_range_for_any_target() {
        let mut cam = ScrollCamera::new();
        for vw in [200.0_f32, 360.0, 1024.0, 6000.0] {
            for i in -10..120 {
                let target = i as f32 * 50.0;
                cam.follow(target, vw, 5200.0, 0.35);
                assert!(cam.x >= 0.0);
                assert!(cam.x <= ScrollCamera::max_scroll(5200.0, vw));
            }
        }
    }
}
