use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::material::Material;
use crate::ray::Ray;
use crate::sampling::rnd_in_unit_sphere;
use crate::scatter_record::ScatterRecord;

pub struct Lambertian {
    pub albedo: Vec3,
}

impl Lambertian {
    pub fn new(albedo: &Vec3) -> Self {
        Lambertian { albedo: *albedo }
    }
}

impl Material for Lambertian {
    fn scatter(&self, _ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> Option<ScatterRecord> {
        let direction = rec.normal + rnd_in_unit_sphere(rng);
        Some(ScatterRecord {
            attenuation: self.albedo,
            ray: Ray::new(&rec.point, &direction),
        })
    }
    fn ambient(&self) -> Vec3 {
        self.albedo
    }
    fn diffuse(&self) -> Vec3 {
        self.albedo
    }
}
