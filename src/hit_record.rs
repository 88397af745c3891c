use crate::aliases::Vec3;
use crate::material::Material;

/// Result of the closest intersection query. Lives only for the duration of
/// one integrator step; the material is borrowed from the hit object.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    pub t: f32,
    pub point: Vec3,
    pub normal: Vec3,
    pub material: &'a dyn Material,
}
