use nalgebra as na;
use rand;

pub type Vec3 = na::Vector3<f32>;
pub type Vec2 = na::Vector2<f32>;
pub type RandGen = rand::rngs::SmallRng;
