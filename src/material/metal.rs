use crate::aliases::{RandGen, Vec3};
use crate::hit_record::HitRecord;
use crate::material::Material;
use crate::ray::Ray;
use crate::sampling::rnd_in_unit_sphere;
use crate::scatter_record::ScatterRecord;

pub struct Metal {
    pub albedo: Vec3,
    pub fuzziness: f32,
    pub shininess: f32,
}

impl Metal {
    pub fn new(albedo: &Vec3, fuzziness: f32, shininess: f32) -> Self {
        Metal {
            albedo: *albedo,
            fuzziness: fuzziness,
            shininess: shininess,
        }
    }
}

impl Material for Metal {
    fn scatter(&self, ray: &Ray, rec: &HitRecord, rng: &mut RandGen) -> Option<ScatterRecord> {
        let dotted = ray.direction.dot(&rec.normal);
        let fuz = if self.fuzziness == 0.0 {
            Vec3::new(0.0, 0.0, 0.0)
        } else {
            self.fuzziness * rnd_in_unit_sphere(rng)
        };
        let reflected = ray.direction - 2.0 * dotted * rec.normal + fuz;
        if reflected.dot(&rec.normal) <= 0.0 {
            return None;
        }
        Some(ScatterRecord {
            attenuation: self.albedo,
            ray: Ray::new(&rec.point, &reflected),
        })
    }
    fn ambient(&self) -> Vec3 {
        self.albedo
    }
    fn specular(&self) -> Vec3 {
        self.albedo
    }
    fn shininess(&self) -> f32 {
        self.shininess
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn perfect_mirror_reflects() {
        let mat = Metal::new(&Vec3::new(0.9, 0.9, 0.9), 0.0, 64.0);
        let rec = HitRecord {
            t: 1.0,
            point: Vec3::new(0.0, 0.0, 0.0),
            normal: Vec3::new(0.0, 1.0, 0.0),
            material: &mat,
        };
        let ray = Ray::new(&Vec3::new(-1.0, 1.0, 0.0), &Vec3::new(1.0, -1.0, 0.0));
        let mut rng = RandGen::seed_from_u64(1);
        let scatter = mat.scatter(&ray, &rec, &mut rng).unwrap();
        assert!((scatter.ray.direction - Vec3::new(1.0, 1.0, 0.0)).norm() < 1.0e-5);
    }

    #[test]
    fn fuzzed_grazing_reflection_declines() {
        // grazing incidence: a large fuzz sphere can push the reflection
        // below the surface, in which case the ray is absorbed
        let mat = Metal::new(&Vec3::new(0.9, 0.9, 0.9), 1.0, 64.0);
        let rec = HitRecord {
            t: 1.0,
            point: Vec3::new(0.0, 0.0, 0.0),
            normal: Vec3::new(0.0, 1.0, 0.0),
            material: &mat,
        };
        let ray = Ray::new(&Vec3::new(-10.0, 0.01, 0.0), &Vec3::new(10.0, -0.01, 0.0));
        let mut rng = RandGen::seed_from_u64(1);
        let mut declined = false;
        for _ in 0..100 {
            if mat.scatter(&ray, &rec, &mut rng).is_none() {
                declined = true;
                break;
            }
        }
        assert!(declined);
    }
}
