//! Pinhole camera.

use glint_math::{norm, Vec3};

/// Field-of-view factor baked into the magnitudes of `up` and `right`.
const FOV_SCALE: f32 = 1.5;

/// Camera position plus its viewing basis.
///
/// `forward` is unit length; `up` and `right` are scaled by [`FOV_SCALE`]
/// and are deliberately not unit vectors. Built once, never mutated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pos: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub right: Vec3,
}

impl Camera {
    /// Build a camera at `pos` looking toward `look_at`.
    ///
    /// The basis is derived by crossing `forward` with a fixed world-down
    /// vector, so a camera looking straight up or down is degenerate
    /// (zero cross product, NaN basis) -- a documented precondition.
    pub fn look_at(pos: Vec3, look_at: Vec3) -> Self {
        let forward = norm(look_at - pos);
        let down = Vec3::new(0.0, -1.0, 0.0);
        let right = FOV_SCALE * norm(forward.cross(down));
        let up = FOV_SCALE * norm(forward.cross(right));

        Self {
            pos,
            forward,
            up,
            right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::mag;

    #[test]
    fn test_forward_is_unit() {
        let cam = Camera::look_at(Vec3::new(3.0, 2.0, 4.0), Vec3::new(-1.0, 0.5, 0.0));
        assert!((mag(cam.forward) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_up_right_carry_fov_scale() {
        let cam = Camera::look_at(Vec3::new(3.0, 2.0, 4.0), Vec3::new(-1.0, 0.5, 0.0));
        assert!((mag(cam.right) - FOV_SCALE).abs() < 1e-2);
        assert!((mag(cam.up) - FOV_SCALE).abs() < 1e-2);
    }

    #[test]
    fn test_basis_is_orthogonal() {
        let cam = Camera::look_at(Vec3::new(3.0, 2.0, 4.0), Vec3::new(-1.0, 0.5, 0.0));
        assert!(cam.forward.dot(cam.right).abs() < 1e-3);
        assert!(cam.forward.dot(cam.up).abs() < 1e-3);
        assert!(cam.right.dot(cam.up).abs() < 1e-2);
    }

    #[test]
    fn test_forward_points_at_target() {
        let pos = Vec3::new(0.0, 0.0, 4.0);
        let cam = Camera::look_at(pos, Vec3::ZERO);
        assert!((cam.forward - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-3);
    }
}
