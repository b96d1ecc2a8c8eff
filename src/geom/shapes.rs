//! Ball and field primitives

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// The draggable ball
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Axis-aligned resting area of the field, in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldRegion {
    /// Top-left corner
    pub origin: Vec2,
    pub width: f32,
    pub height: f32,
}

impl FieldRegion {
    pub fn new(origin: Vec2, width: f32, height: f32) -> Self {
        Self {
            origin,
            width,
            height,
        }
    }

    /// Field that starts at `top` and fills the rest of the viewport
    pub fn below(top: f32, viewport: Vec2) -> Self {
        let height = viewport.y - top;
        if height < 0.0 {
            log::warn!(
                "Viewport height {} is above field top {}, field is empty",
                viewport.y,
                top
            );
        }
        Self::new(Vec2::new(0.0, top), viewport.x, height.max(0.0))
    }

    /// Viewport y of the top edge
    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Convert a viewport point into field-local space
    #[inline]
    pub fn to_local(&self, p: Vec2) -> Vec2 {
        p - self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_below() {
        let field = FieldRegion::below(200.0, Vec2::new(400.0, 800.0));
        assert_eq!(field.origin, Vec2::new(0.0, 200.0));
        assert_eq!(field.size(), Vec2::new(400.0, 600.0));
        assert_eq!(field.to_local(Vec2::new(10.0, 250.0)), Vec2::new(10.0, 50.0));
    }

    #[test]
    fn test_field_below_short_viewport() {
        let field = FieldRegion::below(200.0, Vec2::new(400.0, 150.0));
        assert_eq!(field.height, 0.0);
    }
}
