//! Fast approximate inverse square root.
//!
//! Lookup-table-seeded Newton-Raphson: a 512-entry seed table is built once
//! at first use, then each query synthesizes an initial estimate from the
//! input's exponent and mantissa bits and refines it with two Newton
//! iterations. Roughly 6 decimal digits of accuracy.
//!
//! Every normalize/magnitude operation in the renderer routes through this
//! kernel. Do not substitute the exact `sqrt` on any of those paths: the
//! approximation is part of the image's numeric contract, and mixing the two
//! changes output bytes.

use crate::Vec3;
use std::sync::LazyLock;

const LOOKUP_BITS: u32 = 8;
const EXP_POS: u32 = 23;
const EXP_BIAS: u32 = 127;
const LOOKUP_POS: u32 = EXP_POS - LOOKUP_BITS;
const SEED_POS: u32 = EXP_POS - 8;
const TABLE_SIZE: usize = 2 << LOOKUP_BITS;
const LOOKUP_MASK: u32 = TABLE_SIZE as u32 - 1;

/// Seed table: for each of the 512 mantissa prefixes (covering two exponent
/// parities), the top byte of the true inverse square root's bit pattern,
/// pre-shifted into seed position.
static SEED_TABLE: LazyLock<[u32; TABLE_SIZE]> = LazyLock::new(|| {
    let mut table = [0u32; TABLE_SIZE];
    for (i, entry) in table.iter_mut().enumerate() {
        let bits = ((EXP_BIAS - 1) << EXP_POS) | ((i as u32) << LOOKUP_POS);
        let f = f32::from_bits(bits);
        let inv = (1.0 / (f as f64).sqrt()) as f32;
        *entry = (((inv.to_bits() + (1u32 << (SEED_POS - 2))) >> SEED_POS) & 0xFF) << SEED_POS;
    }
    // The midpoint entry rounds up past the representable seed byte; pin it.
    table[TABLE_SIZE / 2] = 0xFF << SEED_POS;
    table
});

/// Approximate `1/sqrt(x)` for positive finite `x`.
///
/// Precondition: `x > 0`. Zero, negative, or non-finite inputs produce
/// garbage (the bit manipulation assumes a normal positive float).
pub fn inv_sqrt(x: f32) -> f32 {
    let a = x.to_bits();
    let y = x as f64 * 0.5;

    let exponent = ((3 * EXP_BIAS - 1) - ((a >> EXP_POS) & 0xFF)) >> 1;
    let seed = (exponent << EXP_POS) | SEED_TABLE[((a >> LOOKUP_POS) & LOOKUP_MASK) as usize];

    // Two Newton iterations in f64, matching the seeded estimate's widening.
    let mut r = f32::from_bits(seed) as f64;
    r = r * (1.5 - r * r * y);
    r = r * (1.5 - r * r * y);
    r as f32
}

/// Approximate `sqrt(x)` as `x * inv_sqrt(x)`.
///
/// Precondition: `x > 0`. Note `sqrt_fast(0.0)` is `0 * inf = NaN`, not 0.
pub fn sqrt_fast(x: f32) -> f32 {
    x * inv_sqrt(x)
}

/// Normalize `v` through the fast inverse square root.
///
/// Precondition: `v` must be nonzero; normalizing a zero vector yields NaN
/// components.
pub fn norm(v: Vec3) -> Vec3 {
    v * inv_sqrt(v.length_squared())
}

/// Magnitude of `v` through the fast kernel.
///
/// Precondition: `v` must be nonzero (see [`sqrt_fast`]).
pub fn mag(v: Vec3) -> f32 {
    sqrt_fast(v.dot(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inv_sqrt_accuracy() {
        // Sweep several decades of magnitude; relative error stays under 1e-3.
        let mut x = 1e-3f32;
        while x < 1e6 {
            let approx = inv_sqrt(x);
            let exact = 1.0 / (x as f64).sqrt();
            let rel = ((approx as f64 - exact) / exact).abs();
            assert!(rel < 1e-3, "x={x}: approx={approx}, exact={exact}, rel={rel}");
            x *= 1.37;
        }
    }

    #[test]
    fn test_inv_sqrt_known_values() {
        assert!((inv_sqrt(1.0) - 1.0).abs() < 1e-3);
        assert!((inv_sqrt(4.0) - 0.5).abs() < 1e-3);
        assert!((inv_sqrt(0.25) - 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_sqrt_fast() {
        assert!((sqrt_fast(9.0) - 3.0).abs() < 1e-2);
        assert!((sqrt_fast(2.0) - std::f32::consts::SQRT_2).abs() < 1e-3);
    }

    #[test]
    fn test_norm_idempotence() {
        let vs = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-4.0, 0.5, 0.01),
            Vec3::new(1000.0, -2000.0, 500.0),
            Vec3::new(0.0, 0.0, 1e-2),
        ];
        for v in vs {
            let n = norm(norm(v));
            assert!((mag(n) - 1.0).abs() < 1e-3, "v={v:?}, mag={}", mag(n));
        }
    }

    #[test]
    fn test_mag() {
        let v = Vec3::new(3.0, 4.0, 0.0);
        assert!((mag(v) - 5.0).abs() < 1e-2);
    }
}
