//! Mesh generation for the ball and the field outline

use glam::Vec2;
use lyon::geom::Arc;
use lyon::math::{Angle, point, vector};
use lyon::path::Path;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillTessellator, FillVertex, TessellationError, VertexBuffers,
};
use std::f32::consts::PI;

use super::vertex::{Mesh, Vertex};
use crate::geom::{FieldOutline, PathSegment};

#[inline]
fn to_point(p: Vec2, offset: Vec2) -> lyon::math::Point {
    point(p.x + offset.x, p.y + offset.y)
}

/// Convert an outline into a lyon path, moved by `offset`
///
/// Arcs become cubic Béziers.
pub fn to_lyon_path(outline: &FieldOutline, offset: Vec2) -> Path {
    let mut builder = Path::builder();
    let mut open = false;

    for segment in outline.segments() {
        match *segment {
            PathSegment::MoveTo { to } => {
                if open {
                    builder.end(false);
                }
                builder.begin(to_point(to, offset));
                open = true;
            }
            PathSegment::LineTo { to } => {
                builder.line_to(to_point(to, offset));
            }
            PathSegment::QuadTo { ctrl, to } => {
                builder.quadratic_bezier_to(to_point(ctrl, offset), to_point(to, offset));
            }
            PathSegment::CubicTo { ctrl1, ctrl2, to } => {
                builder.cubic_bezier_to(
                    to_point(ctrl1, offset),
                    to_point(ctrl2, offset),
                    to_point(to, offset),
                );
            }
            PathSegment::Arc(arc) => {
                if arc.sweep_angle == 0.0 {
                    continue;
                }
                let arc = Arc {
                    center: to_point(arc.center, offset),
                    radii: vector(arc.radius, arc.radius),
                    start_angle: Angle::radians(arc.start_angle),
                    sweep_angle: Angle::radians(arc.sweep_angle),
                    x_rotation: Angle::zero(),
                };
                // The previous command already ends on the arc start
                arc.for_each_cubic_bezier(&mut |c| {
                    builder.cubic_bezier_to(c.ctrl1, c.ctrl2, c.to);
                });
            }
            PathSegment::Close => {
                builder.end(true);
                open = false;
            }
        }
    }

    if open {
        builder.end(true);
    }
    builder.build()
}

/// Fill the field outline, placed at `origin` in the viewport
pub fn field_mesh(
    outline: &FieldOutline,
    origin: Vec2,
    color: [f32; 4],
    tolerance: f32,
) -> Result<Mesh, TessellationError> {
    let path = to_lyon_path(outline, origin);
    let mut buffers: VertexBuffers<Vertex, u32> = VertexBuffers::new();

    FillTessellator::new().tessellate_path(
        &path,
        &FillOptions::tolerance(tolerance),
        &mut BuffersBuilder::new(&mut buffers, |v: FillVertex| {
            let p = v.position();
            Vertex::new(p.x, p.y, color)
        }),
    )?;

    Ok(Mesh {
        vertices: buffers.vertices,
        indices: buffers.indices,
    })
}

/// Filled circle as a triangle fan around its center
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Mesh {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity(segments as usize + 1);
    let mut indices = Vec::with_capacity(segments as usize * 3);

    vertices.push(Vertex::new(center.x, center.y, color));
    for i in 0..segments {
        let theta = (i as f32 / segments as f32) * 2.0 * PI;
        vertices.push(Vertex::new(
            center.x + radius * theta.cos(),
            center.y + radius * theta.sin(),
            color,
        ));
    }

    for i in 0..segments {
        let next = (i + 1) % segments;
        indices.extend_from_slice(&[0, i + 1, next + 1]);
    }

    Mesh { vertices, indices }
}
