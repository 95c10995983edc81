use glam::Vec2;

/// One frame of sampled input.  Directions are levels (held), `confirm` and
/// `quit` are edges (true only on the frame the key went down).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub confirm: bool,
    pub quit: bool,
}

impl FrameInput {
    /// Unit-length movement direction, or zero.  Held opposites cancel, and a
    /// diagonal is no faster than a single axis.  Screen y grows downward.
    pub fn movement(&self) -> Vec2 {
        let x = axis(self.left, self.right);
        let y = axis(self.up, self.down);
        Vec2::new(x, y).normalize_or_zero()
    }
}

fn axis(negative: bool, positive: bool) -> f32 {
    match (negative, positive) {
        (true, false) => -1.0,
        (false, true) => 1.0,
        _ => 0.0,
    }
}
