use crate::aliases::Vec3;
use crate::ray::Ray;

/// Outcome of a successful scatter event.
pub struct ScatterRecord {
    // component-wise attenuation applied to the light returned along `ray`
    pub attenuation: Vec3,
    pub ray: Ray,
}
