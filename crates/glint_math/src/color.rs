//! Color values and byte conversion.

use crate::Vec3;

/// Color type alias (RGB, unclamped during accumulation).
pub type Color = Vec3;

/// Returned when a ray escapes the scene.
pub const BACKGROUND: Color = Color::ZERO;
pub const BLACK: Color = Color::ZERO;
pub const WHITE: Color = Color::ONE;
pub const GREY: Color = Color::new(0.5, 0.5, 0.5);

/// Clamp a channel to its upper bound only.
///
/// Values above 1.0 become 1.0; values below 0.0 pass through unchanged.
/// There is no lower clamp on purpose: shading never produces a negative
/// channel, and adding one would change the byte conversion contract.
#[inline]
pub fn legalize(d: f32) -> f32 {
    if d > 1.0 {
        1.0
    } else {
        d
    }
}

/// Convert an accumulated color to packed (B, G, R, A) bytes.
///
/// Channels are legalized, scaled by 255 and truncated (no rounding).
/// Alpha is always 255. This matches a 32-bit-per-pixel bitmap layout.
#[inline]
pub fn color_to_bgra(color: Color) -> [u8; 4] {
    [
        (legalize(color.z) * 255.0) as u8,
        (legalize(color.y) * 255.0) as u8,
        (legalize(color.x) * 255.0) as u8,
        255,
    ]
}
