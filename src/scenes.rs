pub mod glass_studio;
pub mod three_spheres;

use clap::ValueEnum;
use lumen::scene::Scene;

#[derive(Clone, Copy, ValueEnum)]
pub enum SceneKind {
    ThreeSpheres,
    GlassStudio,
}

pub fn get(kind: SceneKind, width: u32, height: u32) -> Scene {
    match kind {
        SceneKind::ThreeSpheres => three_spheres::scene(width, height),
        SceneKind::GlassStudio => glass_studio::scene(width, height),
    }
}
