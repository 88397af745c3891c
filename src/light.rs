use crate::aliases::Vec3;

/// A point light source. `color` is linear radiance.
pub struct Light {
    pub position: Vec3,
    pub color: Vec3,
}

impl Light {
    pub fn new(position: &Vec3, color: &Vec3) -> Self {
        Light {
            position: *position,
            color: *color,
        }
    }
}
