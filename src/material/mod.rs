pub mod glass;
pub mod lambertian;
pub mod metal;

use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::ray::Ray;
use crate::scatter_record::ScatterRecord;

pub trait Material: Send + Sync {
    /// Calculates the scattered ray and its attenuation, or
    /// None when this Material does not scatter the incoming ray.
    fn scatter(&self, ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> Option<ScatterRecord>;
    /// Ambient reflection coefficient (Ka).
    fn ambient(&self) -> Vec3;
    /// Diffuse reflection coefficient (Kd).
    fn diffuse(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, 0.0)
    }
    /// Specular reflection coefficient (Ks).
    fn specular(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, 0.0)
    }
    /// Exponent of the specular highlight.
    fn shininess(&self) -> f32 {
        1.0
    }
    /// Fraction of incident light transmitted instead of reflected (Kt).
    /// Direct shading only accounts for reflected light, so the integrator
    /// weighs it by (1 - Kt) and recovers transmission through scattering.
    fn transmission(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, 0.0)
    }
}

/// * `n` - must be normalized
pub fn reflect(v: &Vec3, n: &Vec3) -> Vec3 {
    debug_assert!((n.norm() - 1.0).abs() < 1.0e-3);
    v - 2.0 * v.dot(&n) * n
}

pub fn refract(v: &Vec3, n: &Vec3, r: f32) -> Option<Vec3> {
    let uv = v.normalize();
    let dt = uv.dot(n);
    let d = 1.0 - r * r * (1.0 - dt * dt);
    if d > 0.0 {
        Some(r * (uv - n * dt) - n * f32::sqrt(d))
    } else {
        None
    }
}

/// Approximation formula of probability of reflection when a light enter into a material
pub fn schlick_formula(cosine: f32, ref_idx: f32) -> f32 {
    let r0 = ((1.0 - ref_idx) / (1.0 + ref_idx)).powf(2.0);
    r0 + (1.0 - r0) * f32::powf(1.0 - cosine, 5.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reflect_mirrors_about_normal() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        let n = Vec3::new(0.0, 1.0, 0.0);
        let r = reflect(&v, &n);
        assert!((r - Vec3::new(1.0, 1.0, 0.0)).norm() < 1.0e-5);
    }

    #[test]
    fn refract_straight_through_at_normal_incidence() {
        let v = Vec3::new(0.0, -1.0, 0.0);
        let n = Vec3::new(0.0, 1.0, 0.0);
        let refracted = refract(&v, &n, 1.0 / 1.5).unwrap();
        assert!((refracted.normalize() - Vec3::new(0.0, -1.0, 0.0)).norm() < 1.0e-5);
    }

    #[test]
    fn refract_total_internal_reflection() {
        // grazing exit from the dense side
        let v = Vec3::new(1.0, -0.05, 0.0);
        let n = Vec3::new(0.0, 1.0, 0.0);
        assert!(refract(&v, &n, 1.5).is_none());
    }

    #[test]
    fn schlick_is_one_at_grazing() {
        assert!((schlick_formula(0.0, 1.5) - 1.0).abs() < 1.0e-5);
    }
}
