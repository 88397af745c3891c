use crate::aliases::{RandGen, Vec2, Vec3};
use rand::Rng;

pub fn rnd_in_unit_sphere(rng: &mut RandGen) -> Vec3 {
    loop {
        let p = Vec3::new(
            2.0 * rng.gen::<f32>() - 1.0,
            2.0 * rng.gen::<f32>() - 1.0,
            2.0 * rng.gen::<f32>() - 1.0,
        );
        if p.norm() < 1.0 {
            return p;
        }
    }
}

pub fn rnd_in_unit_disc(rng: &mut RandGen) -> Vec2 {
    loop {
        let p = Vec2::new(2.0 * rng.gen::<f32>() - 1.0, 2.0 * rng.gen::<f32>() - 1.0);
        if p.norm() < 1.0 {
            return p;
        }
    }
}
