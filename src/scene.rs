//! Pointer-driven scene
//!
//! Owns the ball, the field, and the field's current outline. Every pointer
//! move that produces a delta re-solves the crossing and replaces the
//! outline before returning.

use glam::Vec2;

use crate::geom::{self, Circle, FieldOutline, FieldRegion, Intersection};
use crate::settings::SceneSettings;

/// Single-pointer input in viewport coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Began(Vec2),
    Moved(Vec2),
    Ended,
}

#[derive(Debug, Clone)]
pub struct Scene {
    ball: Circle,
    field: FieldRegion,
    /// Last pointer position of the active drag
    last_touch: Option<Vec2>,
    intersection: Intersection,
    outline: FieldOutline,
}

impl Scene {
    pub fn new(settings: &SceneSettings, viewport: Vec2) -> Self {
        let settings = settings.clone().sanitized();
        let ball = Circle::new(
            Vec2::new(viewport.x * 0.5, settings.ball_start_y),
            settings.ball_radius,
        );
        let field = FieldRegion::below(settings.field_top, viewport);
        let intersection = geom::solve(&ball, field.top());
        let outline = geom::build(intersection, &ball, &field);

        log::info!(
            "Scene {}x{}: ball r={} at {:?}, field top {}",
            viewport.x,
            viewport.y,
            ball.radius,
            ball.center,
            field.top()
        );

        Self {
            ball,
            field,
            last_touch: None,
            intersection,
            outline,
        }
    }

    /// Returns true when the outline was replaced
    pub fn handle(&mut self, event: PointerEvent) -> bool {
        log::trace!("{:?}", event);
        match event {
            PointerEvent::Began(pos) => {
                self.pointer_began(pos);
                false
            }
            PointerEvent::Moved(pos) => self.pointer_moved(pos),
            PointerEvent::Ended => {
                self.pointer_ended();
                false
            }
        }
    }

    pub fn pointer_began(&mut self, pos: Vec2) {
        self.last_touch = Some(pos);
    }

    /// Drag the ball vertically by the pointer's y delta
    pub fn pointer_moved(&mut self, pos: Vec2) -> bool {
        let Some(last) = self.last_touch.replace(pos) else {
            // No drag in progress, nothing to measure against yet
            return false;
        };

        self.ball.center.y += pos.y - last.y;
        self.refresh();
        true
    }

    /// The ball stays where the drag left it
    pub fn pointer_ended(&mut self) {
        self.last_touch = None;
    }

    fn refresh(&mut self) {
        self.intersection = geom::solve(&self.ball, self.field.top());
        self.outline = geom::build(self.intersection, &self.ball, &self.field);
        log::debug!(
            "ball y={:.1} {:?} -> {} segments",
            self.ball.center.y,
            self.intersection,
            self.outline.segments().len()
        );
    }

    pub fn ball(&self) -> &Circle {
        &self.ball
    }

    pub fn field(&self) -> &FieldRegion {
        &self.field
    }

    pub fn intersection(&self) -> Intersection {
        self.intersection
    }

    /// Current outline, field-local
    pub fn outline(&self) -> &FieldOutline {
        &self.outline
    }

    pub fn is_dragging(&self) -> bool {
        self.last_touch.is_some()
    }
}
