/// Normalized player intent for one tick.
/// Device-agnostic: whoever owns the keyboard / touch pad fills these in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputIntent {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl InputIntent {
    /// No buttons held.
    pub const NONE: InputIntent = InputIntent {
        left: false,
        right: false,
        jump: false,
    };

    pub fn new(left: bool, right: bool, jump: bool) -> Self {
        Self { left, right, jump }
    }

    /// Horizontal direction: -1, 0 or +1. Left and right together cancel.
    pub fn horizontal(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Rising-edge detector for the jump intent.
/// Holding jump fires once; it must be released before it can fire again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JumpEdge {
    held: bool,
}

impl JumpEdge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this tick's jump intent. Returns true only on the press.
    pub fn update(&mut self, jump: bool) -> bool {
        let pressed = jump && !self.held;
        self.held = jump;
        pressed
    }
}
