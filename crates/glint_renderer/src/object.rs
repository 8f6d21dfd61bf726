//! Scene geometry and ray intersection.

use crate::Surface;
use glint_math::{inv_sqrt, sqrt_fast, Ray, Vec3};

/// Result of a ray/object test.
///
/// Borrows the hit object from the scene and carries the originating ray so
/// the shader can recover the hit point from `dist` alone. Stack-lived.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    pub object: &'a SceneObject,
    pub ray: Ray,
    pub dist: f32,
}

/// A geometric object in the scene. The shape set is closed at two.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneObject {
    Sphere {
        center: Vec3,
        radius: f32,
        /// Precomputed radius squared, so the per-ray test never squares.
        radius_sq: f32,
        surface: Surface,
    },
    Plane {
        /// Unit normal of the plane equation `normal . p + offset = 0`.
        normal: Vec3,
        offset: f32,
        surface: Surface,
    },
}

impl SceneObject {
    /// Construct a sphere, caching its squared radius.
    pub fn sphere(center: Vec3, radius: f32, surface: Surface) -> Self {
        SceneObject::Sphere {
            center,
            radius,
            radius_sq: radius * radius,
            surface,
        }
    }

    /// Construct a plane from its unit normal and signed offset.
    pub fn plane(normal: Vec3, offset: f32, surface: Surface) -> Self {
        SceneObject::Plane {
            normal,
            offset,
            surface,
        }
    }

    pub fn surface(&self) -> Surface {
        match self {
            SceneObject::Sphere { surface, .. } => *surface,
            SceneObject::Plane { surface, .. } => *surface,
        }
    }

    /// Test `ray` against this object.
    ///
    /// Sphere: near root only. A ray starting inside the sphere, or a sphere
    /// behind the ray origin, reports no hit; the far root is never
    /// considered. Known simplification carried over from the reference
    /// scenes, which never put a ray origin inside a sphere.
    ///
    /// Plane: one-sided. Rays whose direction has a positive dot product
    /// with the plane normal face away from the front side and miss.
    pub fn intersect<'a>(&'a self, ray: &Ray) -> Option<Intersection<'a>> {
        match self {
            SceneObject::Sphere {
                center, radius_sq, ..
            } => {
                let eo = *center - ray.origin;
                let v = eo.dot(ray.direction);

                if v < 0.0 {
                    return None;
                }

                let disc = *radius_sq - (eo.dot(eo) - v * v);

                if disc < 0.0 {
                    return None;
                }

                Some(Intersection {
                    object: self,
                    ray: *ray,
                    dist: v - sqrt_fast(disc),
                })
            }
            SceneObject::Plane { normal, offset, .. } => {
                let denom = normal.dot(ray.direction);

                if denom > 0.0 {
                    return None;
                }

                Some(Intersection {
                    object: self,
                    ray: *ray,
                    dist: (normal.dot(ray.origin) + offset) / -denom,
                })
            }
        }
    }

    /// Surface normal at `pos`.
    ///
    /// For spheres `pos` is assumed to lie on the surface; the direction from
    /// the center is normalized through the fast inverse square root. Planes
    /// return their stored normal regardless of `pos`.
    pub fn normal(&self, pos: Vec3) -> Vec3 {
        match self {
            SceneObject::Sphere { center, .. } => {
                let v = pos - *center;
                v * inv_sqrt(v.length_squared())
            }
            SceneObject::Plane { normal, .. } => *normal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_head_on_hit() {
        let sphere = SceneObject::sphere(Vec3::new(0.0, 0.0, -5.0), 1.0, Surface::Shiny);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        let isect = sphere.intersect(&ray).expect("head-on ray must hit");
        // Origin is 5 away from the center, so the hit is at 5 - radius.
        assert!((isect.dist - 4.0).abs() < 1e-2, "dist={}", isect.dist);
    }

    #[test]
    fn test_sphere_behind_origin_misses() {
        let sphere = SceneObject::sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Surface::Shiny);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_grazing_miss() {
        let sphere = SceneObject::sphere(Vec3::new(0.0, 2.0, -5.0), 1.0, Surface::Shiny);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert!(sphere.intersect(&ray).is_none());
    }

    #[test]
    fn test_sphere_normal_points_outward() {
        let sphere = SceneObject::sphere(Vec3::new(0.0, 1.0, 0.0), 1.0, Surface::Shiny);
        let n = sphere.normal(Vec3::new(0.0, 2.0, 0.0));
        assert!((n - Vec3::Y).length() < 1e-3);
    }

    #[test]
    fn test_plane_front_side_hit() {
        let plane = SceneObject::plane(Vec3::Y, 0.0, Surface::Checkerboard);
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -1.0, 0.0));

        let isect = plane.intersect(&ray).expect("downward ray must hit");
        assert!((isect.dist - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_plane_is_one_sided() {
        let plane = SceneObject::plane(Vec3::Y, 0.0, Surface::Checkerboard);
        // Any direction with a positive dot against the normal never hits,
        // regardless of which side of the plane the origin is on.
        let dirs = [
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.5, 0.1, -0.5),
            Vec3::new(-1.0, 0.001, 0.0),
        ];
        for dir in dirs {
            let above = Ray::new(Vec3::new(0.0, 2.0, 0.0), dir);
            let below = Ray::new(Vec3::new(0.0, -2.0, 0.0), dir);
            assert!(plane.intersect(&above).is_none(), "dir={dir:?}");
            assert!(plane.intersect(&below).is_none(), "dir={dir:?}");
        }
    }

    #[test]
    fn test_plane_normal_is_constant() {
        let plane = SceneObject::plane(Vec3::Y, 0.0, Surface::Checkerboard);
        assert_eq!(plane.normal(Vec3::ZERO), Vec3::Y);
        assert_eq!(plane.normal(Vec3::new(100.0, 0.0, -42.0)), Vec3::Y);
    }

    #[test]
    fn test_sphere_caches_radius_squared() {
        let sphere = SceneObject::sphere(Vec3::ZERO, 3.0, Surface::Shiny);
        match sphere {
            SceneObject::Sphere { radius_sq, .. } => assert_eq!(radius_sq, 9.0),
            _ => unreachable!(),
        }
    }
}
