//! Render the default scene to a PNG.
//!
//! The frame buffer comes back in BGRA order (the 32-bpp bitmap contract);
//! channels are swizzled to RGBA before saving.

use anyhow::Context;
use glint_renderer::{render, RenderConfig, Scene};
use std::time::Instant;

const WIDTH: usize = 600;
const HEIGHT: usize = 600;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let scene = Scene::default_scene();
    let config = RenderConfig::default();

    log::info!(
        "rendering {}x{} ({} objects, {} lights, {} workers)",
        WIDTH,
        HEIGHT,
        scene.things.len(),
        scene.lights.len(),
        config.workers
    );

    let start = Instant::now();
    let bgra = render(&scene, WIDTH, HEIGHT, &config);
    log::info!("frame finished in {:?}", start.elapsed());

    let mut rgba = bgra.clone();
    for pixel in rgba.chunks_exact_mut(4) {
        pixel.swap(0, 2);
    }

    let filename = "render.png";
    image::save_buffer(
        filename,
        &rgba,
        WIDTH as u32,
        HEIGHT as u32,
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("saving {filename}"))?;

    log::info!("saved {filename}");
    Ok(())
}
