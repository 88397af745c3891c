use lumen::aliases::Vec3;
use lumen::camera::Camera;
use lumen::hitable::hitable_list::HitableList;
use lumen::hitable::rectangle::Rectangle;
use lumen::hitable::sphere::Sphere;
use lumen::hitable::Hitable;
use lumen::light::Light;
use lumen::material::glass::Glass;
use lumen::material::lambertian::Lambertian;
use lumen::scene::Scene;
use std::sync::Arc;

/// A large glass sphere in front of a checker-less backdrop; exercises the
/// transmission path and hard shadows from a single strong light.
pub fn scene(width: u32, height: u32) -> Scene {
    let mut objs = Vec::<Arc<dyn Hitable>>::new();
    objs.push(Arc::new(Rectangle::new(
        &Vec3::new(-8.0, 0.0, -8.0),
        &Vec3::new(0.0, 0.0, 16.0),
        &Vec3::new(16.0, 0.0, 0.0),
        Arc::new(Lambertian::new(&Vec3::new(0.7, 0.7, 0.65))),
    ))); // floor
    objs.push(Arc::new(Rectangle::new(
        &Vec3::new(-8.0, 0.0, -3.0),
        &Vec3::new(16.0, 0.0, 0.0),
        &Vec3::new(0.0, 8.0, 0.0),
        Arc::new(Lambertian::new(&Vec3::new(0.3, 0.4, 0.6))),
    ))); // backdrop
    objs.push(Arc::new(Sphere::new(
        &Vec3::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Glass::new(1.5, &Vec3::new(0.95, 0.95, 0.95))),
    )));
    objs.push(Arc::new(Sphere::new(
        &Vec3::new(-2.0, 0.4, -1.0),
        0.4,
        Arc::new(Lambertian::new(&Vec3::new(0.8, 0.5, 0.2))),
    )));
    let lights = vec![Light::new(
        &Vec3::new(4.0, 6.0, 4.0),
        &Vec3::new(1.0, 1.0, 1.0),
    )];
    let camera = Camera::new(
        &Vec3::new(0.0, 1.5, 5.0),
        &Vec3::new(0.0, 1.0, 0.0),
        &Vec3::new(0.0, 1.0, 0.0),
        45.0,
        0.0,
        5.0,
        width,
        height,
    );
    Scene {
        hitables: Arc::new(HitableList::new(objs)),
        lights: lights,
        camera: camera,
    }
}
