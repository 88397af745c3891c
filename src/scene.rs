use crate::camera::Camera;
use crate::hitable::Hitable;
use crate::light::Light;
use std::sync::Arc;

pub struct Scene {
    pub hitables: Arc<dyn Hitable>, // rendered hitables
    pub lights: Vec<Light>,
    pub camera: Camera,
}
