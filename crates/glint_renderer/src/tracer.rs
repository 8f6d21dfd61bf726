//! Recursive Whitted-style ray tracing.
//!
//! A ray is traced to its closest hit, shaded from every unoccluded light
//! (diffuse + specular terms gated independently), then extended with a
//! mirror bounce up to [`MAX_DEPTH`] levels deep. Past the depth bound a
//! flat grey term stands in for further reflection.

use crate::{Intersection, Scene, SceneObject};
use glint_math::{mag, norm, Color, Ray, Vec3, BACKGROUND, BLACK, GREY};

/// Maximum reflection recursion depth.
pub const MAX_DEPTH: u32 = 5;

/// Offset along the reflection direction before casting a bounce ray,
/// so the bounce cannot immediately re-hit the surface it left.
const REFLECT_EPSILON: f32 = 0.001;

/// Find the closest hit among all scene objects.
///
/// Brute-force linear scan, no early exit. NaN distances lose every
/// comparison and are skipped.
pub fn closest_intersection<'a>(ray: &Ray, scene: &'a Scene) -> Option<Intersection<'a>> {
    let mut closest: Option<Intersection> = None;

    for thing in &scene.things {
        if let Some(isect) = thing.intersect(ray) {
            if isect.dist < closest.as_ref().map_or(f32::MAX, |c| c.dist) {
                closest = Some(isect);
            }
        }
    }

    closest
}

/// Distance to the closest hit, or 0.0 when the ray escapes.
pub fn test_ray(ray: &Ray, scene: &Scene) -> f32 {
    closest_intersection(ray, scene).map_or(0.0, |i| i.dist)
}

/// Whether `pos` is occluded on the way to a light at `light_pos`.
///
/// A shadow ray is cast from `pos` toward the light; the point is lit when
/// nothing is hit (distance 0) or the hit lies beyond the light. The
/// light distance uses the fast-kernel magnitude, keeping one numeric
/// policy across the pipeline.
fn in_shadow(pos: Vec3, light_pos: Vec3, scene: &Scene) -> bool {
    let ldis = light_pos - pos;
    let livec = norm(ldis);
    let neat_isect = test_ray(&Ray::new(pos, livec), scene);
    !(neat_isect == 0.0 || neat_isect > mag(ldis))
}

/// Direct illumination at a surface point: for every unshadowed light,
/// a Lambert diffuse term plus a Phong-style specular term, each gated
/// independently by its own positive dot product.
fn natural_color(
    thing: &SceneObject,
    pos: Vec3,
    normal: Vec3,
    reflect_dir: Vec3,
    scene: &Scene,
) -> Color {
    let mut ret = BLACK;
    let rd_normalized = norm(reflect_dir);
    let surface = thing.surface();

    for light in &scene.lights {
        if in_shadow(pos, light.pos, scene) {
            continue;
        }

        let livec = norm(light.pos - pos);
        let illum = livec.dot(normal);
        let specular = livec.dot(rd_normalized);

        let lcolor = if illum > 0.0 {
            illum * light.color
        } else {
            BACKGROUND
        };
        let scolor = if specular > 0.0 {
            specular.powf(surface.roughness()) * light.color
        } else {
            BACKGROUND
        };

        ret += surface.diffuse(pos) * lcolor + surface.specular(pos) * scolor;
    }

    ret
}

/// Mirror bounce contribution: the surface reflectivity at `pos` scaling
/// whatever the bounce ray sees.
fn reflection_color(
    thing: &SceneObject,
    pos: Vec3,
    reflect_dir: Vec3,
    scene: &Scene,
    depth: u32,
) -> Color {
    thing.surface().reflect(pos) * trace_ray(&Ray::new(pos, reflect_dir), scene, depth + 1)
}

/// Shade one intersection.
///
/// Computes the hit point and mirror direction, accumulates direct
/// illumination, then either recurses for the reflection bounce or, at the
/// depth bound, adds a flat grey approximation instead.
pub fn shade(isect: &Intersection, scene: &Scene, depth: u32) -> Color {
    let d = isect.ray.direction;
    let pos = isect.dist * d + isect.ray.origin;
    let normal = isect.object.normal(pos);
    let reflect_dir = d - 2.0 * normal.dot(d) * normal;

    let ret = natural_color(isect.object, pos, normal, reflect_dir, scene);

    if depth >= MAX_DEPTH {
        return ret + GREY;
    }

    ret + reflection_color(
        isect.object,
        pos + REFLECT_EPSILON * reflect_dir,
        reflect_dir,
        scene,
        depth,
    )
}

/// Trace a ray into the scene: background color on a miss, shading on a hit.
pub fn trace_ray(ray: &Ray, scene: &Scene, depth: u32) -> Color {
    match closest_intersection(ray, scene) {
        Some(isect) => shade(&isect, scene, depth),
        None => BACKGROUND,
    }
}
