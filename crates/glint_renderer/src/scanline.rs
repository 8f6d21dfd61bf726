//! Parallel scanline rendering.
//!
//! The image is split into horizontal bands, one worker per band. Each
//! worker owns a disjoint slice of the frame buffer carved out once with
//! `chunks_exact_mut`, so pixel writes need no locking. Workers are spawned
//! fresh for every render inside a `std::thread::scope`; the scope exit is
//! the completion barrier, and the first band runs inline on the calling
//! thread rather than spawning one extra worker.

use crate::{tracer, Camera, Scene};
use glint_math::{color_to_bgra, norm, Ray, Vec3};
use std::ops::Range;
use std::time::Instant;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Number of scanline workers. A fixed knob, deliberately not derived
    /// from the processor count.
    pub workers: usize,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self { workers: 12 }
    }
}

/// Bytes per pixel in the output buffer (B, G, R, A).
const PIXEL_BYTES: usize = 4;

/// Split `height` rows into per-worker bands.
///
/// Band `i` owns rows `[i * height/workers, (i+1) * height/workers)`.
/// When `workers` does not divide `height`, the trailing `height % workers`
/// rows belong to no band and are never rendered.
pub fn partition_rows(height: usize, workers: usize) -> Vec<Range<usize>> {
    let rows_per_band = height / workers;
    (0..workers)
        .map(|i| i * rows_per_band..(i + 1) * rows_per_band)
        .collect()
}

/// Camera-space direction for pixel (x, y).
///
/// The pixel is remapped into device coordinates centered on the image
/// middle, combined with the camera basis, and normalized.
fn pixel_direction(camera: &Camera, x: usize, y: usize, width: usize, height: usize) -> Vec3 {
    let rx = (x as f32 - width as f32 / 2.0) / (2.0 * width as f32);
    let ry = -(y as f32 - height as f32 / 2.0) / (2.0 * height as f32);
    norm(camera.forward + rx * camera.right + ry * camera.up)
}

/// Render one band of rows into its owned buffer slice.
fn render_band(
    scene: &Scene,
    width: usize,
    height: usize,
    rows: Range<usize>,
    band: &mut [u8],
) {
    log::debug!("rendering rows {}..{}", rows.start, rows.end);

    let mut i = 0;
    for y in rows {
        for x in 0..width {
            let ray = Ray::new(
                scene.camera.pos,
                pixel_direction(&scene.camera, x, y, width, height),
            );
            let color = tracer::trace_ray(&ray, scene, 0);
            band[i..i + PIXEL_BYTES].copy_from_slice(&color_to_bgra(color));
            i += PIXEL_BYTES;
        }
    }
}

/// Render a full frame.
///
/// Returns a `width * height * 4` byte buffer in (B, G, R, A) order,
/// row-major, top to bottom, alpha always 255. Blocks until every worker
/// has finished its band. Rows dropped by an uneven partition (see
/// [`partition_rows`]) stay zeroed.
pub fn render(scene: &Scene, width: usize, height: usize, config: &RenderConfig) -> Vec<u8> {
    let mut buffer = vec![0u8; width * height * PIXEL_BYTES];
    let bands = partition_rows(height, config.workers);
    let rows_per_band = height / config.workers;

    if rows_per_band == 0 {
        log::warn!(
            "{} workers for {} rows: nothing scheduled",
            config.workers,
            height
        );
        return buffer;
    }

    let band_bytes = rows_per_band * width * PIXEL_BYTES;
    let start = Instant::now();

    std::thread::scope(|s| {
        let mut slices = buffer
            .chunks_exact_mut(band_bytes)
            .take(config.workers)
            .zip(bands);

        let first = slices.next();

        for (slice, rows) in slices {
            s.spawn(move || render_band(scene, width, height, rows, slice));
        }

        // The calling thread takes the first band instead of idling at the
        // barrier.
        if let Some((slice, rows)) = first {
            render_band(scene, width, height, rows, slice);
        }
    });

    log::info!(
        "rendered {}x{} with {} workers in {:?}",
        width,
        height,
        config.workers,
        start.elapsed()
    );

    buffer
}
