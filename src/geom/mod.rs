//! Pure geometry for the field deformation
//!
//! Nothing in here knows about rendering or input:
//! - Screen coordinates, y grows downward
//! - Angles from `atan2(dy, dx)`, positive turns visually clockwise
//! - Outlines are field-local (top edge at y = 0)

pub mod deform;
pub mod intersect;
pub mod outline;
pub mod shapes;
pub mod vector;

pub use deform::{DipProfile, TaperHalf, build, intersection_size};
pub use intersect::{Intersection, solve};
pub use outline::{ArcSegment, FieldOutline, OutlineBuilder, PathSegment};
pub use shapes::{Circle, FieldRegion};
pub use vector::VecExt;
