use crate::aliases::Vec3;
use crate::hit_record::HitRecord;
use crate::hitable::Hitable;
use crate::material::Material;
use crate::ray::Ray;
use nalgebra as na;
use std::sync::Arc;

pub struct Sphere {
    center: Vec3,
    radius: f32,
    material: Arc<dyn Material>,
}

impl Sphere {
    pub fn new(center: &Vec3, radius: f32, material: Arc<dyn Material>) -> Self {
        Sphere {
            center: *center,
            radius: radius,
            material: material,
        }
    }
    /// Calculates the parameter t of the ray at which it hits this Sphere.
    pub fn hit_core(center: &Vec3, radius: f32, ray: &Ray, t_min: f32, t_max: f32) -> Option<f32> {
        let oc = ray.origin - center;
        let a = na::dot(&ray.direction, &ray.direction);
        let b = na::dot(&oc, &ray.direction);
        let c = na::dot(&oc, &oc) - radius * radius;
        let disc: f32 = b * b - a * c;
        if disc <= 0.0 {
            return None;
        }
        let disc_rt = f32::sqrt(disc);
        let mut t: f32;
        t = (-b - disc_rt) / a;
        if t_min < t && t < t_max {
            return Some(t);
        }
        t = (-b + disc_rt) / a;
        if t_min < t && t < t_max {
            return Some(t);
        }
        return None;
    }
}

impl Hitable for Sphere {
    fn hit<'s>(&'s self, ray: &Ray, t_min: f32, t_max: f32) -> Option<HitRecord<'s>> {
        Sphere::hit_core(&self.center, self.radius, ray, t_min, t_max).map(|t| {
            let point = ray.evaluate(t);
            let normal = (point - self.center) / self.radius;
            HitRecord {
                t: t,
                point: point,
                normal: normal,
                material: self.material.as_ref(),
            }
        })
    }
}
