use crate::aliases::Vec3;
use crate::hit_record::HitRecord;
use crate::light::Light;
use crate::material::reflect;
use crate::ray::Ray;
use crate::scene::Scene;

// epsilon pushing shadow rays off their surface
const SHADOW_EPS: f32 = 1.0e-4;

/// Direct-lighting strategies. The closed set replaces the strategy-factory
/// swap of a dynamic dispatch design: `resolve` picks the variant once at
/// render start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShadingStrategy {
    Flat,
    Shadowed,
}

impl ShadingStrategy {
    /// Reconciles the configured strategy with the shadow setting.
    /// Pure function; returns the strategy to use for the whole render.
    pub fn resolve(self, shadows_enabled: bool) -> ShadingStrategy {
        match (self, shadows_enabled) {
            (ShadingStrategy::Flat, true) => ShadingStrategy::Shadowed,
            (ShadingStrategy::Shadowed, false) => ShadingStrategy::Flat,
            (other, _) => other,
        }
    }

    /// Phong direct lighting at the hit point: ambient plus, per light,
    /// diffuse and specular terms. `Shadowed` additionally drops lights
    /// occluded between the hit point and the light position.
    pub fn shade(
        &self,
        scene: &Scene,
        rec: &HitRecord,
        ray_origin: &Vec3,
        lights: &[Light],
        global_light: &Vec3,
    ) -> Vec3 {
        let material = rec.material;
        let mut color = global_light.component_mul(&material.ambient());
        for light in lights {
            let to_light = light.position - rec.point;
            if let ShadingStrategy::Shadowed = self {
                // t = 1 at the light position, so farther geometry cannot occlude
                let shadow_ray = Ray::new(&rec.point, &to_light);
                if scene.hitables.is_hit(&shadow_ray, SHADOW_EPS, 1.0) {
                    continue;
                }
            }
            let light_dir = to_light.normalize();
            let cosine = rec.normal.dot(&light_dir);
            if cosine <= 0.0 {
                continue;
            }
            color += cosine * material.diffuse().component_mul(&light.color);
            let mirrored = reflect(&-light_dir, &rec.normal).normalize();
            let view_dir = (ray_origin - rec.point).normalize();
            let highlight = mirrored.dot(&view_dir);
            if highlight > 0.0 {
                color += highlight.powf(material.shininess())
                    * material.specular().component_mul(&light.color);
            }
        }
        color
    }
}
