//! Deformed field outline
//!
//! When the ball crosses the field's top edge, the edge dips around the ball:
//!
//! ```text
//!  lift ~~~ taper ___            ___ taper' ~~~ lift'
//!                    \__      __/
//!                       \____/   <- arc around the ball
//! ```
//!
//! The left half (lift, quadratic taper, cubic blend into the arc) is built
//! once and mirrored about the ball's vertical axis for the right half.

use glam::Vec2;

use super::intersect::Intersection;
use super::outline::{ArcSegment, FieldOutline, OutlineBuilder};
use super::shapes::{Circle, FieldRegion};
use super::vector::VecExt;
use crate::consts::{
    DIP_PADDING, LIFT_RATIO, SMOOTHING_ANGLE_DEG, TANGENT_RATIO, TAPER_RATIO,
};
use crate::polar_to_cartesian;

/// Horizontal width of the taper that blends the flat edge into the dip
#[inline]
pub fn intersection_size(x0: f32, x1: f32, effective_radius: f32) -> f32 {
    (2.0 * effective_radius).min((x1 - x0) * TAPER_RATIO)
}

/// Control points for one side of the dip, field-local
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaperHalf {
    /// Contour start, slightly above the field corner
    pub lift: Vec2,
    /// Quadratic control between lift and taper
    pub quad_ctrl: Vec2,
    /// Where the taper meets the flat edge
    pub taper: Vec2,
    pub cubic_ctrl1: Vec2,
    pub cubic_ctrl2: Vec2,
    /// Where the cubic hands over to the arc
    pub arc_point: Vec2,
}

impl TaperHalf {
    pub fn mirrored_about(&self, axis_x: f32) -> Self {
        Self {
            lift: self.lift.mirrored_about(axis_x),
            quad_ctrl: self.quad_ctrl.mirrored_about(axis_x),
            taper: self.taper.mirrored_about(axis_x),
            cubic_ctrl1: self.cubic_ctrl1.mirrored_about(axis_x),
            cubic_ctrl2: self.cubic_ctrl2.mirrored_about(axis_x),
            arc_point: self.arc_point.mirrored_about(axis_x),
        }
    }

    pub fn points(&self) -> [Vec2; 6] {
        [
            self.lift,
            self.quad_ctrl,
            self.taper,
            self.cubic_ctrl1,
            self.cubic_ctrl2,
            self.arc_point,
        ]
    }
}

/// Everything needed to draw the dip for one ball position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DipProfile {
    pub effective_radius: f32,
    pub intersection_size: f32,
    /// Ball center, field-local
    pub center: Vec2,
    pub arc: ArcSegment,
    pub left: TaperHalf,
    pub right: TaperHalf,
}

impl DipProfile {
    /// `x0`/`x1` are viewport crossings from [`super::intersect::solve`]
    pub fn new(x0: f32, x1: f32, ball: &Circle, field: &FieldRegion) -> Self {
        let effective_radius = ball.radius + DIP_PADDING;
        let size = intersection_size(x0, x1, effective_radius);
        let center = field.to_local(ball.center);
        let x0 = x0 - field.origin.x;
        let x1 = x1 - field.origin.x;

        // Angles from the ball center to each crossing on the edge (y = 0)
        let dy = field.top() - ball.center.y;
        let mut start_angle = dy.atan2(x0 - center.x);
        let mut end_angle = dy.atan2(x1 - center.x);

        // Widen the arc once the ball is deep enough, softer edges
        let d_angle = SMOOTHING_ANGLE_DEG.to_radians();
        if (start_angle - end_angle).abs() > 2.0 * d_angle {
            start_angle -= d_angle;
            end_angle += d_angle;
        }

        let arc_start = polar_to_cartesian(effective_radius, start_angle);
        let tangent = arc_start.perp().with_length(TANGENT_RATIO * size);

        let lift_height = size * LIFT_RATIO;
        let lift = Vec2::new(0.0, -lift_height);
        let taper = Vec2::new(x0 - size, 0.0);
        let chord = (taper - lift).with_length(lift_height * 0.5);
        let quad_ctrl = (lift + taper) * 0.5 + chord.perp();

        let arc_point = center + arc_start;
        let left = TaperHalf {
            lift,
            quad_ctrl,
            taper,
            cubic_ctrl1: Vec2::new(x0 - size * TANGENT_RATIO, 0.0),
            cubic_ctrl2: arc_point + tangent,
            arc_point,
        };

        Self {
            effective_radius,
            intersection_size: size,
            center,
            arc: ArcSegment::counter_clockwise(center, effective_radius, start_angle, end_angle),
            left,
            right: left.mirrored_about(center.x),
        }
    }

    /// Closed outline of the dipped field
    pub fn outline(&self, field: &FieldRegion) -> FieldOutline {
        let (l, r) = (&self.left, &self.right);
        let mut b = OutlineBuilder::new(l.lift);
        b.quad_to(l.quad_ctrl, l.taper)
            .cubic_to(l.cubic_ctrl1, l.cubic_ctrl2, l.arc_point)
            .arc(self.arc)
            // right side runs back out, so its controls come in reverse order
            .cubic_to(r.cubic_ctrl2, r.cubic_ctrl1, r.taper)
            .quad_to(r.quad_ctrl, r.lift)
            .line_to(Vec2::new(field.width, 0.0))
            .line_to(Vec2::new(field.width, field.height))
            .line_to(Vec2::new(0.0, field.height));
        b.close()
    }
}

/// Outline for the current crossing, in field-local coordinates
pub fn build(intersection: Intersection, ball: &Circle, field: &FieldRegion) -> FieldOutline {
    match intersection {
        Intersection::None => FieldOutline::rectangle(Vec2::ZERO, field.size()),
        Intersection::Two { x0, x1 } => DipProfile::new(x0, x1, ball, field).outline(field),
    }
}
