use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::ray::Ray;

pub struct Empty;

impl Empty {
    pub fn new() -> Self {
        Empty {}
    }
}

impl Hitable for Empty {
    fn hit<'s>(&'s self, _ray: &Ray, _t_min: f32, _t_max: f32) -> Option<HitRecord<'s>> {
        None
    }
    fn is_hit(&self, _ray: &Ray, _t_min: f32, _t_max: f32) -> bool {
        false
    }
}
