use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::ray::Ray;
use std::sync::Arc;

pub struct HitableList {
    pub list: Vec<Arc<dyn Hitable>>,
}

impl HitableList {
    pub fn new(objs: Vec<Arc<dyn Hitable>>) -> Self {
        HitableList { list: objs }
    }
}

impl Hitable for HitableList {
    fn hit<'s>(&'s self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'s>> {
        let mut res: Option<HitRecord> = None;
        let mut closest_so_far = t_max;
        for obj in &self.list {
            if let Some(ref tmp_rec) = obj.hit(ray, t_min, closest_so_far) {
                closest_so_far = tmp_rec.t;
                res = Some(*tmp_rec);
            }
        }
        return res;
    }
    fn is_hit(&self, ray: &Ray, t_min: f32, t_max: f32) -> bool {
        for obj in &self.list {
            if obj.is_hit(ray, t_min, t_max) {
                return true;
            }
        }
        false
    }
}
