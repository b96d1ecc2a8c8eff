//! Ball vs. field top edge
//!
//! The field's top edge is a horizontal line, so the crossing reduces to
//! solving `(x - cx)² + (y - cy)² = r²` for a fixed `y`.

use serde::{Deserialize, Serialize};

use super::shapes::Circle;

/// Where the ball crosses the horizontal line, if it does
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Intersection {
    /// Ball does not reach the line
    #[default]
    None,
    /// Crossing x-coordinates, `x0 <= x1` (equal when tangent)
    Two { x0: f32, x1: f32 },
}

impl Intersection {
    pub fn is_none(&self) -> bool {
        matches!(self, Intersection::None)
    }

    /// Chord length along the line (0 when there is no crossing)
    pub fn width(&self) -> f32 {
        match *self {
            Intersection::None => 0.0,
            Intersection::Two { x0, x1 } => x1 - x0,
        }
    }
}

/// Intersect the ball with the line `y = line_y`
pub fn solve(ball: &Circle, line_y: f32) -> Intersection {
    let r = ball.radius;
    let dy = line_y - ball.center.y;
    let d = r * r - dy * dy;
    if d < 0.0 {
        return Intersection::None;
    }

    let s = d.sqrt();
    Intersection::Two {
        x0: ball.center.x - s,
        x1: ball.center.x + s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_ball_on_edge() {
        let ball = Circle::new(Vec2::new(200.0, 200.0), 60.0);
        assert_eq!(solve(&ball, 200.0), Intersection::Two { x0: 140.0, x1: 260.0 });
    }

    #[test]
    fn test_ball_above_edge() {
        let ball = Circle::new(Vec2::new(200.0, 50.0), 60.0);
        assert_eq!(solve(&ball, 200.0), Intersection::None);
        assert_eq!(solve(&ball, 200.0).width(), 0.0);
    }

    #[test]
    fn test_tangent() {
        let ball = Circle::new(Vec2::new(120.0, 140.0), 60.0);
        assert_eq!(solve(&ball, 200.0), Intersection::Two { x0: 120.0, x1: 120.0 });
    }

    proptest! {
        #[test]
        fn prop_out_of_reach_is_none(
            cx in -500.0f32..500.0,
            cy in -500.0f32..500.0,
            r in 1.0f32..200.0,
            gap in 0.01f32..300.0,
            below in any::<bool>(),
        ) {
            let line_y = if below { cy + r + gap } else { cy - r - gap };
            let ball = Circle::new(Vec2::new(cx, cy), r);
            prop_assert_eq!(solve(&ball, line_y), Intersection::None);
        }

        #[test]
        fn prop_crossings_lie_on_circle(
            cx in -500.0f32..500.0,
            cy in -500.0f32..500.0,
            r in 1.0f32..200.0,
            t in -0.99f32..0.99,
        ) {
            let line_y = cy + t * r;
            let ball = Circle::new(Vec2::new(cx, cy), r);
            match solve(&ball, line_y) {
                Intersection::None => prop_assert!(false, "expected a crossing"),
                Intersection::Two { x0, x1 } => {
                    prop_assert!(x0 <= x1);
                    for x in [x0, x1] {
                        let lhs = (x - cx).powi(2) + (line_y - cy).powi(2);
                        prop_assert!((lhs - r * r).abs() <= 1e-2 * r * r);
                    }
                }
            }
        }

        #[test]
        fn prop_symmetric_in_line_offset(
            cx in -500.0f32..500.0,
            cy in -500.0f32..500.0,
            r in 1.0f32..200.0,
            offset in 0.0f32..400.0,
        ) {
            prop_assume!((offset - r).abs() > 1e-2 * r);
            let ball = Circle::new(Vec2::new(cx, cy), r);
            match (solve(&ball, cy + offset), solve(&ball, cy - offset)) {
                (Intersection::None, Intersection::None) => {}
                (Intersection::Two { x0: a0, x1: a1 }, Intersection::Two { x0: b0, x1: b1 }) => {
                    prop_assert!((a0 - b0).abs() <= 1e-2 * r);
                    prop_assert!((a1 - b1).abs() <= 1e-2 * r);
                }
                (a, b) => prop_assert!(false, "mismatch: {:?} vs {:?}", a, b),
            }
        }
    }
}
