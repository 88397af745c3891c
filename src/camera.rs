use crate::aliases::{RandGen, Vec3};
use crate::ray::Ray;
use crate::sampling::rnd_in_unit_disc;
use std::f32::consts::PI;

pub struct Camera {
    lower_left_corner: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
    origin: Vec3,
    lens_radius: f32,
    u: Vec3, // a unit vector directing right
    v: Vec3, // a unit vector directing up
    pub viewport_width: u32,
    pub viewport_height: u32,
}

impl Camera {
    pub fn new(
        look_from: &Vec3,
        look_at: &Vec3,
        view_up: &Vec3,
        vfov: f32, // vertical field of view
        lens_radius: f32,
        focus_dist: f32,
        viewport_width: u32,
        viewport_height: u32,
    ) -> Self {
        let aspect = viewport_width as f32 / viewport_height as f32;
        let theta = vfov * PI / 180.0;
        let half_height = (theta * 0.5).tan();
        let half_width = aspect * half_height;
        let origin: Vec3 = *look_from;
        let w: Vec3 = (look_from - look_at).normalize();
        let u: Vec3 = view_up.cross(&w).normalize();
        let v: Vec3 = w.cross(&u);
        let lower_left_corner = origin - focus_dist * (half_width * u + half_height * v + w);
        let horizontal = u * 2.0 * focus_dist * half_width;
        let vertical = v * 2.0 * focus_dist * half_height;
        Camera {
            lower_left_corner: lower_left_corner,
            horizontal: horizontal,
            vertical: vertical,
            origin: origin,
            lens_radius: lens_radius,
            u: u,
            v: v,
            viewport_width: viewport_width,
            viewport_height: viewport_height,
        }
    }
    pub fn get_ray(&self, u: f32, v: f32, rng: &mut RandGen) -> Ray {
        let offset = if self.lens_radius == 0.0 {
            Vec3::new(0.0, 0.0, 0.0)
        } else {
            let r = self.lens_radius * rnd_in_unit_disc(rng);
            r.x * self.u + r.y * self.v
        };
        Ray::new(
            &(self.origin + offset),
            &(self.lower_left_corner + u * self.horizontal + v * self.vertical
                - self.origin
                - offset),
        )
    }
}
