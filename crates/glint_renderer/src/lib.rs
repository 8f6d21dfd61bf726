//! Whitted-style recursive ray tracer.
//!
//! Renders a static scene of spheres and planes under point lights into a
//! 32-bit BGRA pixel buffer: closest-hit intersection by brute-force scan,
//! diffuse + specular direct lighting with shadow rays, bounded mirror
//! reflection, and a scanline-band scheduler that fans the frame out over
//! worker threads.

mod camera;
mod object;
mod scanline;
mod scene;
mod surface;
pub mod tracer;

pub use camera::Camera;
pub use object::{Intersection, SceneObject};
pub use scanline::{partition_rows, render, RenderConfig};
pub use scene::{Light, Scene};
pub use surface::Surface;
pub use tracer::{closest_intersection, shade, test_ray, trace_ray, MAX_DEPTH};

/// Re-export the math primitives.
pub use glint_math::{color_to_bgra, inv_sqrt, mag, norm, Color, Ray, Vec3};
