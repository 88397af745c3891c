pub mod aliases;
pub mod camera;
pub mod film;
pub mod hit_record;
pub mod hitable;
pub mod light;
pub mod material;
pub mod ray;
pub mod renderer;
pub mod sampling;
pub mod scatter_record;
pub mod scene;
pub mod setup;
pub mod shading;

use crate::aliases::{RandGen, Vec3};
use crate::ray::Ray;
use crate::scene::Scene;
use crate::setup::Setup;

// lower bound of the intersection range, avoids re-hitting the surface
// a ray just left ("shadow acne")
const T_EPSILON: f32 = 1.0e-6;

/// Calculates the radiance arriving along `ray`: direct lighting from the
/// active shading strategy, weighted by the reflected fraction (1 - Kt),
/// plus recursively gathered scattered light. Once `depth` reaches
/// `setup.max_depth` the recursion is cut off and the material's ambient
/// term stands in for the remaining bounces. A ray that escapes the scene
/// resolves to the vertical background gradient.
///
/// `ray.direction` must have nonzero length.
pub fn calc_color(ray: &Ray, scene: &Scene, setup: &Setup, rng: &mut RandGen, depth: i32) -> Vec3 {
    let unit_direction = ray.direction.normalize();
    let rec = scene.hitables.hit(ray, T_EPSILON, std::f32::MAX);
    if rec.is_none() {
        let t = 0.5 * (unit_direction[1] + 1.0);
        return (1.0 - t) * setup.down_background + t * setup.top_background;
    }
    let rec = rec.unwrap();
    // the shading strategy only accounts for reflected light; the
    // transmitted fraction is recovered below through scattering
    let direct = setup
        .shading
        .shade(scene, &rec, &ray.origin, &scene.lights, &setup.global_light);
    let mut color =
        direct.component_mul(&(Vec3::new(1.0, 1.0, 1.0) - rec.material.transmission()));
    if depth < setup.max_depth {
        if let Some(scatter) = rec.material.scatter(ray, &rec, rng) {
            color += calc_color(&scatter.ray, scene, setup, rng, depth + 1)
                .component_mul(&scatter.attenuation);
        }
    } else {
        color += setup.global_light.component_mul(&rec.material.ambient());
    }
    color
}
