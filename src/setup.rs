use crate::aliases::Vec3;
use crate::shading::ShadingStrategy;

/// Render configuration, fixed for the duration of one render.
pub struct Setup {
    pub samples: u32, // samples per pixel, >= 1
    pub max_depth: i32,
    pub top_background: Vec3,
    pub down_background: Vec3,
    pub global_light: Vec3,
    pub shadows: bool,
    pub shading: ShadingStrategy,
}

impl Setup {
    /// Reconciles the shading strategy with the shadow setting.
    /// Must run once before the frame loop; `shading` is stable afterwards.
    pub fn init_shading(&mut self) {
        self.shading = self.shading.resolve(self.shadows);
    }
}

impl Default for Setup {
    fn default() -> Self {
        Setup {
            samples: 16,
            max_depth: 10,
            top_background: Vec3::new(0.5, 0.7, 1.0),
            down_background: Vec3::new(1.0, 1.0, 1.0),
            global_light: Vec3::new(0.1, 0.1, 0.1),
            shadows: false,
            shading: ShadingStrategy::Flat,
        }
    }
}
