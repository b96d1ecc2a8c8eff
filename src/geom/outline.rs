//! Closed outline of the field
//!
//! An outline is a single contour: one `MoveTo` first, one `Close` last, and
//! drawing commands in between. `OutlineBuilder` is the only way to make one.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, TAU};

use super::vector::VecExt;
use crate::polar_to_cartesian;

/// Circular arc around `center`, swept from `start_angle` by `sweep_angle`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    pub center: Vec2,
    pub radius: f32,
    /// Radians, y-down convention
    pub start_angle: f32,
    /// Signed sweep in radians (negative turns visually counter-clockwise)
    pub sweep_angle: f32,
}

impl ArcSegment {
    /// Arc from `start_angle` to `end_angle` with decreasing angle.
    ///
    /// In y-down screen space that is the "not clockwise" direction, which
    /// always passes through `π/2` (straight below the center) when the
    /// endpoints lie on opposite sides of it.
    pub fn counter_clockwise(center: Vec2, radius: f32, start_angle: f32, end_angle: f32) -> Self {
        let mut sweep = end_angle - start_angle;
        if sweep > 0.0 {
            sweep -= TAU;
        }
        Self {
            center,
            radius,
            start_angle,
            sweep_angle: sweep,
        }
    }

    #[inline]
    pub fn end_angle(&self) -> f32 {
        self.start_angle + self.sweep_angle
    }

    /// Point at parameter `t` in `[0, 1]`
    pub fn point_at(&self, t: f32) -> Vec2 {
        self.center + polar_to_cartesian(self.radius, self.start_angle + t * self.sweep_angle)
    }

    #[inline]
    pub fn from(&self) -> Vec2 {
        self.point_at(0.0)
    }

    #[inline]
    pub fn to(&self) -> Vec2 {
        self.point_at(1.0)
    }

    /// Whether the sweep passes the bottom of the circle
    pub fn passes_bottom(&self) -> bool {
        let end = self.end_angle();
        let (lo, hi) = if end < self.start_angle {
            (end, self.start_angle)
        } else {
            (self.start_angle, end)
        };
        (-2..=2).any(|k| {
            let a = FRAC_PI_2 + k as f32 * TAU;
            a >= lo && a <= hi
        })
    }

    pub fn mirrored_about(&self, axis_x: f32) -> Self {
        // Reflecting x maps angle a to π - a and reverses the turning direction
        Self {
            center: self.center.mirrored_about(axis_x),
            radius: self.radius,
            start_angle: std::f32::consts::PI - self.start_angle,
            sweep_angle: -self.sweep_angle,
        }
    }
}

/// One drawing command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PathSegment {
    MoveTo { to: Vec2 },
    LineTo { to: Vec2 },
    QuadTo { ctrl: Vec2, to: Vec2 },
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
    Arc(ArcSegment),
    Close,
}

impl PathSegment {
    /// Where the pen ends up after this command (`None` for `Close`)
    pub fn end_point(&self) -> Option<Vec2> {
        match *self {
            PathSegment::MoveTo { to }
            | PathSegment::LineTo { to }
            | PathSegment::QuadTo { to, .. }
            | PathSegment::CubicTo { to, .. } => Some(to),
            PathSegment::Arc(arc) => Some(arc.to()),
            PathSegment::Close => None,
        }
    }

    /// Endpoints and control points, in command order
    pub fn points(&self) -> Vec<Vec2> {
        match *self {
            PathSegment::MoveTo { to } | PathSegment::LineTo { to } => vec![to],
            PathSegment::QuadTo { ctrl, to } => vec![ctrl, to],
            PathSegment::CubicTo { ctrl1, ctrl2, to } => vec![ctrl1, ctrl2, to],
            PathSegment::Arc(arc) => vec![arc.from(), arc.point_at(0.5), arc.to()],
            PathSegment::Close => Vec::new(),
        }
    }

    fn translated(&self, offset: Vec2) -> Self {
        match *self {
            PathSegment::MoveTo { to } => PathSegment::MoveTo { to: to + offset },
            PathSegment::LineTo { to } => PathSegment::LineTo { to: to + offset },
            PathSegment::QuadTo { ctrl, to } => PathSegment::QuadTo {
                ctrl: ctrl + offset,
                to: to + offset,
            },
            PathSegment::CubicTo { ctrl1, ctrl2, to } => PathSegment::CubicTo {
                ctrl1: ctrl1 + offset,
                ctrl2: ctrl2 + offset,
                to: to + offset,
            },
            PathSegment::Arc(arc) => PathSegment::Arc(ArcSegment {
                center: arc.center + offset,
                ..arc
            }),
            PathSegment::Close => PathSegment::Close,
        }
    }
}

/// Renderable silhouette of the field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOutline {
    segments: Vec<PathSegment>,
}

impl FieldOutline {
    /// Closed axis-aligned rectangle starting at the top-left corner
    pub fn rectangle(min: Vec2, max: Vec2) -> Self {
        let mut b = OutlineBuilder::new(min);
        b.line_to(Vec2::new(max.x, min.y));
        b.line_to(max);
        b.line_to(Vec2::new(min.x, max.y));
        b.close()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Contour start (the `MoveTo` target)
    pub fn start(&self) -> Vec2 {
        match self.segments.first() {
            Some(PathSegment::MoveTo { to }) => *to,
            _ => Vec2::ZERO,
        }
    }

    /// All endpoints and control points
    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.segments.iter().flat_map(|s| s.points())
    }

    /// Copy moved by `offset` (e.g. field-local to viewport)
    pub fn translated(&self, offset: Vec2) -> Self {
        Self {
            segments: self.segments.iter().map(|s| s.translated(offset)).collect(),
        }
    }
}

/// Builds a single closed contour
#[derive(Debug)]
pub struct OutlineBuilder {
    segments: Vec<PathSegment>,
}

impl OutlineBuilder {
    pub fn new(start: Vec2) -> Self {
        Self {
            segments: vec![PathSegment::MoveTo { to: start }],
        }
    }

    pub fn line_to(&mut self, to: Vec2) -> &mut Self {
        self.segments.push(PathSegment::LineTo { to });
        self
    }

    pub fn quad_to(&mut self, ctrl: Vec2, to: Vec2) -> &mut Self {
        self.segments.push(PathSegment::QuadTo { ctrl, to });
        self
    }

    pub fn cubic_to(&mut self, ctrl1: Vec2, ctrl2: Vec2, to: Vec2) -> &mut Self {
        self.segments.push(PathSegment::CubicTo { ctrl1, ctrl2, to });
        self
    }

    pub fn arc(&mut self, arc: ArcSegment) -> &mut Self {
        self.segments.push(PathSegment::Arc(arc));
        self
    }

    pub fn close(mut self) -> FieldOutline {
        self.segments.push(PathSegment::Close);
        FieldOutline {
            segments: self.segments,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_rectangle_outline() {
        let outline = FieldOutline::rectangle(Vec2::ZERO, Vec2::new(300.0, 500.0));
        assert_eq!(
            outline.segments(),
            &[
                PathSegment::MoveTo { to: Vec2::new(0.0, 0.0) },
                PathSegment::LineTo { to: Vec2::new(300.0, 0.0) },
                PathSegment::LineTo { to: Vec2::new(300.0, 500.0) },
                PathSegment::LineTo { to: Vec2::new(0.0, 500.0) },
                PathSegment::Close,
            ]
        );
        assert_eq!(outline.start(), Vec2::ZERO);
    }

    #[test]
    fn test_arc_sweep_direction() {
        // 155° -> 25° decreasing, passing through the bottom at 90°
        let arc = ArcSegment::counter_clockwise(Vec2::ZERO, 10.0, 155f32.to_radians(), 25f32.to_radians());
        assert!((arc.sweep_angle + 130f32.to_radians()).abs() < 1e-5);
        assert!(arc.passes_bottom());
        assert!(arc.point_at(0.5).y > 9.9);

        // -148° -> -32° has to wrap the long way round to stay decreasing
        let deep = ArcSegment::counter_clockwise(Vec2::ZERO, 10.0, (-148f32).to_radians(), (-32f32).to_radians());
        assert!((deep.sweep_angle + 244f32.to_radians()).abs() < 1e-4);
        assert!(deep.passes_bottom());
    }

    #[test]
    fn test_arc_zero_sweep() {
        let arc = ArcSegment::counter_clockwise(Vec2::ZERO, 10.0, PI / 2.0, PI / 2.0);
        assert_eq!(arc.sweep_angle, 0.0);
        assert!((arc.from() - arc.to()).length() < 1e-5);
    }

    #[test]
    fn test_arc_mirror_swaps_ends() {
        let arc = ArcSegment::counter_clockwise(Vec2::new(5.0, 0.0), 10.0, 2.7, 0.44);
        let m = arc.mirrored_about(5.0);
        assert!((m.from() - arc.from().mirrored_about(5.0)).length() < 1e-4);
        assert!((m.to() - arc.to().mirrored_about(5.0)).length() < 1e-4);
    }

    #[test]
    fn test_translated() {
        let outline = FieldOutline::rectangle(Vec2::ZERO, Vec2::new(10.0, 10.0));
        let moved = outline.translated(Vec2::new(0.0, 200.0));
        assert_eq!(moved.start(), Vec2::new(0.0, 200.0));
        assert_eq!(moved.segments().len(), outline.segments().len());
    }

    #[test]
    fn test_serializes_with_kind_tag() {
        let outline = FieldOutline::rectangle(Vec2::ZERO, Vec2::ONE);
        let json = serde_json::to_string(&outline).unwrap();
        assert!(json.contains("\"kind\":\"move_to\""));
        let back: FieldOutline = serde_json::from_str(&json).unwrap();
        assert_eq!(back, outline);
    }
}
