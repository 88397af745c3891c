use crate::aliases::Vec3;
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::material::Material;
use crate::ray::Ray;
use std::sync::Arc;

pub struct Rectangle {
    origin: Vec3,
    // edge_0, edge_1: must be orthogonal.
    edge_0: Vec3,
    edge_1: Vec3,
    // normal must be (edge_0 x edge_1).normalize().
    // This defines the front side of Rectangle.
    normal: Vec3,
    material: Arc<dyn Material>,
}

impl Rectangle {
    pub fn new(origin: &Vec3, edge_0: &Vec3, edge_1: &Vec3, material: Arc<dyn Material>) -> Self {
        Rectangle {
            origin: *origin,
            edge_0: *edge_0,
            edge_1: *edge_1,
            normal: edge_0.cross(edge_1).normalize(),
            material: material,
        }
    }
}

impl Hitable for Rectangle {
    fn hit<'s>(&'s self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'s>> {
        let denom = ray.direction.dot(&self.normal);
        if denom == 0.0 {
            return None;
        }
        let t = (self.origin - ray.origin).dot(&self.normal) / denom;
        if t <= t_min || t_max <= t {
            return None;
        }
        let point = ray.evaluate(t);
        let rel_pt = point - self.origin;
        let u = rel_pt.dot(&self.edge_0) / self.edge_0.norm_squared();
        let v = rel_pt.dot(&self.edge_1) / self.edge_1.norm_squared();
        if 0.0 <= u && u <= 1.0 && 0.0 <= v && v <= 1.0 {
            Some(HitRecord {
                t: t,
                point: point,
                normal: self.normal,
                material: self.material.as_ref(),
            })
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::lambertian::Lambertian;

    fn floor() -> Rectangle {
        Rectangle::new(
            &Vec3::new(-1.0, 0.0, -1.0),
            &Vec3::new(2.0, 0.0, 0.0),
            &Vec3::new(0.0, 0.0, 2.0),
            Arc::new(Lambertian::new(&Vec3::new(0.5, 0.5, 0.5))),
        )
    }

    #[test]
    fn hit_inside_bounds() {
        let rect = floor();
        let ray = Ray::new(&Vec3::new(0.5, 1.0, 0.5), &Vec3::new(0.0, -1.0, 0.0));
        let rec = rect.hit(&ray, 1.0e-6, std::f32::MAX).unwrap();
        assert!((rec.t - 1.0).abs() < 1.0e-4);
    }

    #[test]
    fn miss_outside_bounds() {
        let rect = floor();
        let ray = Ray::new(&Vec3::new(5.0, 1.0, 0.5), &Vec3::new(0.0, -1.0, 0.0));
        assert!(rect.hit(&ray, 1.0e-6, std::f32::MAX).is_none());
    }

    #[test]
    fn parallel_ray_misses() {
        let rect = floor();
        let ray = Ray::new(&Vec3::new(0.0, 1.0, 0.0), &Vec3::new(1.0, 0.0, 0.0));
        assert!(rect.hit(&ray, 1.0e-6, std::f32::MAX).is_none());
    }
}
