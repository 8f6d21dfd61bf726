// Re-export glam for convenience
pub use glam::*;

mod color;
mod invsqrt;
mod ray;

pub use color::{color_to_bgra, legalize, Color, BACKGROUND, BLACK, GREY, WHITE};
pub use invsqrt::{inv_sqrt, mag, norm, sqrt_fast};
pub use ray::Ray;
