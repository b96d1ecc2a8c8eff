//! Liquid Field entry point
//!
//! Replays a scripted drag through the scene and prints the final outline.
//! Usage: `liquid-field [settings.json]`

use anyhow::Context;
use glam::Vec2;
use std::path::Path;

use liquid_field::demo::DragScript;
use liquid_field::{PointerEvent, Scene, SceneSettings, renderer};

/// Portrait phone-sized viewport
const VIEWPORT: Vec2 = Vec2::new(375.0, 667.0);
const DRAG_SEED: u64 = 2017;
const DRAG_STEPS: u32 = 60;
const DRAG_STEP_Y: f32 = 5.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Liquid Field starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => SceneSettings::load(Path::new(&path)),
        None => SceneSettings::default(),
    };

    let mut scene = Scene::new(&settings, VIEWPORT);
    let start = scene.ball().center;

    for event in DragScript::new(DRAG_SEED, start, DRAG_STEPS, DRAG_STEP_Y) {
        if !scene.handle(event) {
            continue;
        }
        let frame = renderer::frame(&scene, &settings).context("tessellating field outline")?;
        if let PointerEvent::Moved(pos) = event {
            log::info!(
                "pointer ({:.0}, {:.0}) ball y={:.1} {:?}: {} field triangles",
                pos.x,
                pos.y,
                scene.ball().center.y,
                scene.intersection(),
                frame.field.triangle_count()
            );
        }
    }

    let outline = scene.outline().translated(scene.field().origin);
    println!("{}", serde_json::to_string_pretty(&outline)?);
    Ok(())
}
