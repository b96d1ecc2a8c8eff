//! Rendering adapter
//!
//! Turns geometry into indexed triangle meshes. The geometry module never
//! depends on this one.

pub mod shapes;
pub mod vertex;

pub use vertex::{Mesh, Vertex};

use lyon::tessellation::TessellationError;

use crate::scene::Scene;
use crate::settings::SceneSettings;

/// Meshes for one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub field: Mesh,
    pub ball: Mesh,
}

impl Frame {
    /// Field first, then the ball on top
    pub fn combined(&self) -> Mesh {
        let mut mesh = self.field.clone();
        mesh.extend(&self.ball);
        mesh
    }
}

/// Build the meshes for the scene's current state
pub fn frame(scene: &Scene, settings: &SceneSettings) -> Result<Frame, TessellationError> {
    let field = scene.field();
    let ball = scene.ball();
    Ok(Frame {
        field: shapes::field_mesh(
            scene.outline(),
            field.origin,
            settings.field_color,
            settings.tolerance,
        )?,
        ball: shapes::circle(
            ball.center,
            ball.radius,
            settings.ball_color,
            settings.ball_segments,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::PointerEvent;
    use glam::Vec2;

    #[test]
    fn test_frame_follows_scene() {
        let settings = SceneSettings::default();
        let mut scene = Scene::new(&settings, Vec2::new(400.0, 800.0));
        let flat = frame(&scene, &settings).unwrap();
        assert_eq!(flat.field.triangle_count(), 2);
        assert_eq!(flat.ball.triangle_count(), settings.ball_segments as usize);

        scene.handle(PointerEvent::Began(Vec2::ZERO));
        scene.handle(PointerEvent::Moved(Vec2::new(0.0, 220.0)));
        let dipped = frame(&scene, &settings).unwrap();
        assert!(dipped.field.triangle_count() > flat.field.triangle_count());

        let combined = dipped.combined();
        assert_eq!(
            combined.vertices.len(),
            dipped.field.vertices.len() + dipped.ball.vertices.len()
        );
        assert_eq!(combined.vertices[dipped.field.vertices.len()].color, settings.ball_color);
    }
}
