//! Scripted drags
//!
//! Produces the same pointer stream for the same seed, so a demo run (or a
//! test) can be replayed exactly.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::scene::PointerEvent;

/// Sideways wobble a hand-held drag has, in pixels
const JITTER_X: f32 = 6.0;

/// A vertical drag: `Began`, `steps` moves, `Ended`
#[derive(Debug, Clone)]
pub struct DragScript {
    rng: Pcg32,
    pos: Vec2,
    steps: u32,
    step_y: f32,
    emitted: u32,
    done: bool,
}

impl DragScript {
    pub fn new(seed: u64, start: Vec2, steps: u32, step_y: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            pos: start,
            steps,
            step_y,
            emitted: 0,
            done: false,
        }
    }
}

impl Iterator for DragScript {
    type Item = PointerEvent;

    fn next(&mut self) -> Option<PointerEvent> {
        if self.done {
            return None;
        }

        let event = match self.emitted {
            0 => PointerEvent::Began(self.pos),
            n if n <= self.steps => {
                let wobble = self.rng.random_range(-JITTER_X..=JITTER_X);
                self.pos += Vec2::new(wobble, self.step_y);
                PointerEvent::Moved(self.pos)
            }
            _ => {
                self.done = true;
                PointerEvent::Ended
            }
        };
        self.emitted += 1;
        Some(event)
    }
}
