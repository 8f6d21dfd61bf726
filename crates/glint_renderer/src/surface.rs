//! Surface material definitions.
//!
//! The material set is closed at two, so surfaces are a tagged enum
//! dispatched by match rather than a trait object. Each variant maps a
//! surface point to a diffuse color, a specular color, a reflectivity in
//! [0, 1], and a roughness exponent for the specular highlight.

use glint_math::{Color, Vec3, BLACK, GREY, WHITE};

/// A surface material. Shared by reference between scene objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface {
    /// Alternating white/black squares. Only works on the X-Z plane.
    Checkerboard,
    /// Uniform white diffuse with a grey specular highlight.
    Shiny,
}

impl Surface {
    /// Diffuse color at `pos`.
    pub fn diffuse(&self, pos: Vec3) -> Color {
        match self {
            Surface::Checkerboard => {
                if (pos.z.floor() + pos.x.floor()) % 2.0 != 0.0 {
                    WHITE
                } else {
                    BLACK
                }
            }
            Surface::Shiny => WHITE,
        }
    }

    /// Specular color at `pos`.
    pub fn specular(&self, _pos: Vec3) -> Color {
        match self {
            Surface::Checkerboard => WHITE,
            Surface::Shiny => GREY,
        }
    }

    /// Reflectivity at `pos`, in [0, 1].
    pub fn reflect(&self, pos: Vec3) -> f32 {
        match self {
            Surface::Checkerboard => {
                // White squares reflect less than black ones.
                if (pos.z.floor() + pos.x.floor()) % 2.0 != 0.0 {
                    0.1
                } else {
                    0.7
                }
            }
            Surface::Shiny => 0.6,
        }
    }

    /// Specular highlight exponent.
    pub fn roughness(&self) -> f32 {
        match self {
            Surface::Checkerboard => 150.0,
            Surface::Shiny => 50.0,
        }
    }
}
