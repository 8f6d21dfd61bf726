//! Scene aggregate: objects, lights, and a camera.

use crate::{Camera, SceneObject, Surface};
use glint_math::{Color, Vec3};

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub pos: Vec3,
    /// Light intensity per channel; not limited to [0, 1].
    pub color: Color,
}

/// Immutable scene description.
///
/// Constructed once before rendering and read-only for the whole frame, so
/// workers share it without synchronization.
#[derive(Debug, Clone)]
pub struct Scene {
    pub things: Vec<SceneObject>,
    pub lights: Vec<Light>,
    pub camera: Camera,
}

impl Scene {
    /// The canonical fixture: a checkerboard floor, two shiny spheres and
    /// four colored lights, viewed from (3, 2, 4).
    pub fn default_scene() -> Self {
        Self {
            things: vec![
                SceneObject::plane(Vec3::new(0.0, 1.0, 0.0), 0.0, Surface::Checkerboard),
                SceneObject::sphere(Vec3::new(0.0, 1.0, 0.0), 1.0, Surface::Shiny),
                SceneObject::sphere(Vec3::new(-1.0, 0.5, 1.5), 0.5, Surface::Shiny),
            ],
            lights: vec![
                Light {
                    pos: Vec3::new(-2.0, 2.5, 0.0),
                    color: Color::new(0.49, 0.07, 0.07),
                },
                Light {
                    pos: Vec3::new(1.5, 2.5, 1.5),
                    color: Color::new(0.07, 0.07, 0.49),
                },
                Light {
                    pos: Vec3::new(1.5, 2.5, -1.5),
                    color: Color::new(0.07, 0.49, 0.071),
                },
                Light {
                    pos: Vec3::new(0.0, 3.5, 0.0),
                    color: Color::new(0.21, 0.21, 0.35),
                },
            ],
            camera: Camera::look_at(Vec3::new(3.0, 2.0, 4.0), Vec3::new(-1.0, 0.5, 0.0)),
        }
    }
}
