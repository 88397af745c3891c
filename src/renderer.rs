use crate::aliases::{RandGen, Vec3};
use crate::calc_color;
use crate::film::Film;
use crate::scene::Scene;
use crate::setup::Setup;
use log::info;
use rand::Rng;
use std::io::Write;

/// Clamps each channel to the displayable 0-255 range. Runs after gamma
/// correction and scaling, immediately before the pixel is written.
pub fn clamp_color(color: &Vec3) -> Vec3 {
    Vec3::new(
        color[0].min(255.0).max(0.0),
        color[1].min(255.0).max(0.0),
        color[2].min(255.0).max(0.0),
    )
}

/// Renders the whole frame: for every pixel, averages `setup.samples`
/// jittered radiance samples, gamma corrects (gamma = 2), scales to 0-255,
/// clamps and writes through the film. Scanlines run bottom-up over the
/// image-plane v coordinate; a progress line goes to stderr.
pub fn render(scene: &Scene, setup: &Setup, film: &mut dyn Film, rng: &mut RandGen) {
    let nx = scene.camera.viewport_width;
    let ny = scene.camera.viewport_height;
    debug_assert!(setup.samples >= 1);
    debug_assert!(film.width() == nx && film.height() == ny);
    info!(
        "rendering {}x{}, {} samples per pixel, max depth {}",
        nx, ny, setup.samples, setup.max_depth
    );
    for y in (0..ny).rev() {
        eprint!("\rScanlines remaining: {} ", y);
        let _ = std::io::stderr().flush();
        for x in 0..nx {
            let mut color = Vec3::new(0.0, 0.0, 0.0);
            // sub-rectangle of the image plane covered by this pixel
            let u = x as f32 / nx as f32;
            let v = (ny - y) as f32 / ny as f32;
            let i = (x + 1) as f32 / nx as f32;
            let o = ((ny - y) - 1) as f32 / ny as f32;
            for _ in 0..setup.samples {
                let su = u + rng.gen::<f32>() * (i - u);
                let sv = o + rng.gen::<f32>() * (v - o);
                let ray = scene.camera.get_ray(su, sv, rng);
                color += calc_color(&ray, scene, setup, rng, 0);
            }
            color /= setup.samples as f32;
            let corrected =
                255.0 * Vec3::new(color[0].sqrt(), color[1].sqrt(), color[2].sqrt());
            let clamped = clamp_color(&corrected);
            film.set_pixel(x, y, [clamped[0] as u8, clamped[1] as u8, clamped[2] as u8]);
        }
    }
    eprintln!("\nFinished.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::hitable::empty::Empty;
    use crate::shading::ShadingStrategy;
    use rand::SeedableRng;
    use std::sync::Arc;

    struct MockFilm {
        nx: u32,
        ny: u32,
        pixels: Vec<[u8; 3]>,
    }

    impl MockFilm {
        fn new(nx: u32, ny: u32) -> Self {
            MockFilm {
                nx: nx,
                ny: ny,
                pixels: vec![[0, 0, 0]; (nx * ny) as usize],
            }
        }
    }

    impl Film for MockFilm {
        fn width(&self) -> u32 {
            self.nx
        }
        fn height(&self) -> u32 {
            self.ny
        }
        fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
            self.pixels[(x + y * self.nx) as usize] = rgb;
        }
    }

    fn background_scene(nx: u32, ny: u32) -> Scene {
        Scene {
            hitables: Arc::new(Empty::new()),
            lights: vec![],
            camera: Camera::new(
                &Vec3::new(0.0, 0.0, 0.0),
                &Vec3::new(0.0, 0.0, -1.0),
                &Vec3::new(0.0, 1.0, 0.0),
                90.0,
                0.0,
                1.0,
                nx,
                ny,
            ),
        }
    }

    fn uniform_setup(samples: u32, background: Vec3) -> Setup {
        Setup {
            samples: samples,
            max_depth: 5,
            top_background: background,
            down_background: background,
            global_light: Vec3::new(0.0, 0.0, 0.0),
            shadows: false,
            shading: ShadingStrategy::Flat,
        }
    }

    #[test]
    fn clamp_color_pins_out_of_range_channels() {
        let clamped = clamp_color(&Vec3::new(-10.0, 0.0, 127.0));
        assert_eq!(
            [clamped[0] as u8, clamped[1] as u8, clamped[2] as u8],
            [0, 0, 127]
        );
        let clamped = clamp_color(&Vec3::new(255.0, 300.0, -10.0));
        assert_eq!(
            [clamped[0] as u8, clamped[1] as u8, clamped[2] as u8],
            [255, 255, 0]
        );
    }

    #[test]
    fn empty_scene_resolves_to_background_everywhere() {
        // uniform unit-radiance background: sqrt(1.0) * 255 = 255 per channel
        let scene = background_scene(2, 2);
        let setup = uniform_setup(1, Vec3::new(1.0, 1.0, 1.0));
        let mut film = MockFilm::new(2, 2);
        let mut rng = RandGen::seed_from_u64(0);
        render(&scene, &setup, &mut film, &mut rng);
        for pixel in &film.pixels {
            assert_eq!(*pixel, [255, 255, 255]);
        }
    }

    #[test]
    fn constant_radiance_averages_to_itself() {
        // every sample returns (1, 0, 0); the average must stay (1, 0, 0)
        // and map to (255, 0, 0) after gamma and scaling
        let scene = background_scene(1, 1);
        let setup = uniform_setup(4, Vec3::new(1.0, 0.0, 0.0));
        let mut film = MockFilm::new(1, 1);
        let mut rng = RandGen::seed_from_u64(0);
        render(&scene, &setup, &mut film, &mut rng);
        assert_eq!(film.pixels[0], [255, 0, 0]);
    }

    #[test]
    fn every_pixel_is_written() {
        let scene = background_scene(3, 2);
        let setup = uniform_setup(1, Vec3::new(0.25, 0.25, 0.25));
        let mut film = MockFilm::new(3, 2);
        let mut rng = RandGen::seed_from_u64(0);
        render(&scene, &setup, &mut film, &mut rng);
        // sqrt(0.25) * 255 = 127.5, truncated on the u8 cast
        for pixel in &film.pixels {
            assert_eq!(*pixel, [127, 127, 127]);
        }
    }
}
