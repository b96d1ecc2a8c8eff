//! Liquid Field - a ball that pushes a smooth dip into a rectangular field
//!
//! Core modules:
//! - `geom`: Pure geometry (circle/line intersection, deformed field outline)
//! - `scene`: Pointer-driven controller that owns the ball and the field
//! - `renderer`: Converts outlines into triangle meshes
//! - `settings`: Scene constants with serde-backed overrides
//! - `demo`: Deterministic scripted drags

pub mod demo;
pub mod geom;
pub mod renderer;
pub mod scene;
pub mod settings;

pub use scene::{PointerEvent, Scene};
pub use settings::SceneSettings;

use glam::Vec2;

/// Scene configuration constants
pub mod consts {
    /// Ball radius used when no override is configured
    pub const BALL_RADIUS: f32 = 60.0;
    /// Viewport y of the field's top edge
    pub const FIELD_TOP: f32 = 200.0;

    /// Extra radius around the ball for the dip arc (not used for hit testing)
    pub const DIP_PADDING: f32 = 4.0;
    /// Taper width as a fraction of the intersection chord
    pub const TAPER_RATIO: f32 = 0.4;
    /// Angle added to each end of the dip arc when the ball is deep enough
    pub const SMOOTHING_ANGLE_DEG: f32 = 25.0;
    /// Arc tangent handle length as a fraction of the taper width
    pub const TANGENT_RATIO: f32 = 0.33;
    /// Height of the lift at the field corners as a fraction of the taper width
    pub const LIFT_RATIO: f32 = 0.2;
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
