use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::material::{reflect, refract, schlick_formula, Material};
use crate::ray::Ray;
use crate::scatter_record::ScatterRecord;
use rand::Rng;

pub struct Glass {
    pub ref_idx: f32,
    // Kt: fraction of incident light carried by the refracted branch
    pub transmission: Vec3,
}

impl Glass {
    pub fn new(ref_idx: f32, transmission: &Vec3) -> Self {
        Glass {
            ref_idx: ref_idx,
            transmission: *transmission,
        }
    }
}

impl Material for Glass {
    fn scatter(&self, ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> Option<ScatterRecord> {
        // r = relative refractive index
        // n = a normal vector
        // c = cosine(angle of incidence)
        let in_dir_dot_normal = ray.direction.dot(&rec.normal);
        let (r, n, c) = if in_dir_dot_normal > 0.0 {
            (
                self.ref_idx,
                -rec.normal,
                in_dir_dot_normal / ray.direction.norm(),
            )
        } else {
            (
                1.0 / self.ref_idx,
                rec.normal,
                -in_dir_dot_normal / ray.direction.norm(),
            )
        };
        let op_refracted = refract(&ray.direction, &n, r);
        let direction = match op_refracted {
            Some(refracted) if rng.gen::<f32>() > schlick_formula(c, r) => refracted,
            _ => reflect(&ray.direction, &n),
        };
        Some(ScatterRecord {
            attenuation: Vec3::new(1.0, 1.0, 1.0),
            ray: Ray::new(&rec.point, &direction),
        })
    }
    fn ambient(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, 0.0)
    }
    fn specular(&self) -> Vec3 {
        Vec3::new(1.0, 1.0, 1.0)
    }
    fn shininess(&self) -> f32 {
        96.0
    }
    fn transmission(&self) -> Vec3 {
        self.transmission
    }
}
