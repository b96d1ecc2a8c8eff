//! Small vector helpers on top of `glam::Vec2`

use glam::Vec2;

pub trait VecExt {
    /// Same direction, magnitude `length` (negative flips it).
    ///
    /// A zero vector has no direction, so this returns `Vec2::ZERO`.
    fn with_length(self, length: f32) -> Vec2;

    /// Reflect across the vertical line `x = axis_x`
    fn mirrored_about(self, axis_x: f32) -> Vec2;
}

impl VecExt for Vec2 {
    #[inline]
    fn with_length(self, length: f32) -> Vec2 {
        self.normalize_or_zero() * length
    }

    #[inline]
    fn mirrored_about(self, axis_x: f32) -> Vec2 {
        Vec2::new(2.0 * axis_x - self.x, self.y)
    }
}
