use lumen::aliases::Vec3;
use lumen::camera::Camera;
use lumen::hitable::hitable_list::HitableList;
use lumen::hitable::rectangle::Rectangle;
use lumen::hitable::sphere::Sphere;
use lumen::hitable::Hitable;
use lumen::light::Light;
use lumen::material::glass::Glass;
use lumen::material::lambertian::Lambertian;
use lumen::material::metal::Metal;
use lumen::scene::Scene;
use std::sync::Arc;

/// Matte, metal and glass spheres on a grey floor, lit by two point lights.
pub fn scene(width: u32, height: u32) -> Scene {
    let mut objs = Vec::<Arc<dyn Hitable>>::new();
    objs.push(Arc::new(Rectangle::new(
        &Vec3::new(-10.0, 0.0, -10.0),
        &Vec3::new(0.0, 0.0, 20.0),
        &Vec3::new(20.0, 0.0, 0.0),
        Arc::new(Lambertian::new(&Vec3::new(0.6, 0.6, 0.6))),
    ))); // floor
    objs.push(Arc::new(Sphere::new(
        &Vec3::new(-1.1, 0.5, 0.0),
        0.5,
        Arc::new(Lambertian::new(&Vec3::new(0.7, 0.2, 0.2))),
    )));
    objs.push(Arc::new(Sphere::new(
        &Vec3::new(0.0, 0.5, 0.0),
        0.5,
        Arc::new(Glass::new(1.5, &Vec3::new(0.9, 0.9, 0.9))),
    )));
    objs.push(Arc::new(Sphere::new(
        &Vec3::new(1.1, 0.5, 0.0),
        0.5,
        Arc::new(Metal::new(&Vec3::new(0.8, 0.8, 0.9), 0.05, 64.0)),
    )));
    let lights = vec![
        Light::new(&Vec3::new(-3.0, 4.0, 2.0), &Vec3::new(0.9, 0.9, 0.9)),
        Light::new(&Vec3::new(3.0, 5.0, -1.0), &Vec3::new(0.4, 0.4, 0.5)),
    ];
    let camera = Camera::new(
        &Vec3::new(0.0, 1.2, 3.0),
        &Vec3::new(0.0, 0.5, 0.0),
        &Vec3::new(0.0, 1.0, 0.0),
        50.0,
        0.0,
        3.0,
        width,
        height,
    );
    Scene {
        hitables: Arc::new(HitableList::new(objs)),
        lights: lights,
        camera: camera,
    }
}
