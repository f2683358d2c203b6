use bytemuck::Zeroable;
use logo_particles_core::{Bitmap, LoadError, LogoError, LogoParticlesConfig, Scene};
use wasm_bindgen::prelude::*;

/// Per-frame uniforms for the point material: 32 bytes.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
struct GpuUniforms {
    color: [f32; 4], // 16 bytes, alpha already faded
    point_size: f32, //  4 bytes
    _pad: [f32; 3],  // 12 bytes
}

/// Screen-space point size of the particle material.
const POINT_SIZE: f32 = 1.5;

#[wasm_bindgen]
pub struct LogoParticles {
    scene: Scene,
    uniforms: GpuUniforms,
}

#[wasm_bindgen]
impl LogoParticles {
    /// Build from config JSON and the decoded logo bitmap.
    ///
    /// Throws when the config does not parse, the bitmap is malformed or it
    /// contains no pixels darker than the threshold.
    #[wasm_bindgen(constructor)]
    pub fn new(
        config_json: &str,
        width: u32,
        height: u32,
        rgba: Vec<u8>,
        seed: u32,
    ) -> Result<LogoParticles, JsError> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        let config = LogoParticlesConfig::from_json(config_json)?;
        let scene = Scene::new(config, decode_bitmap(width, height, rgba)?, seed as u64)?;

        let mut world = LogoParticles {
            scene,
            uniforms: GpuUniforms::zeroed(),
        };
        world.write_uniforms();
        Ok(world)
    }

    /// Apply a new config.
    ///
    /// `rgba` is only read when the logo, particle count, scale or threshold
    /// changed; pass `undefined` otherwise. A failed reload keeps the new
    /// config but leaves no particles to draw.
    #[wasm_bindgen]
    pub fn reconfigure(
        &mut self,
        config_json: &str,
        width: u32,
        height: u32,
        rgba: Option<Vec<u8>>,
    ) -> Result<(), JsError> {
        let config = LogoParticlesConfig::from_json(config_json)?;
        let bitmap = match rgba {
            Some(rgba) => Some(decode_bitmap(width, height, rgba)?),
            None => None,
        };
        let result = self.scene.reconfigure(config, bitmap);
        self.write_uniforms();
        Ok(result?)
    }

    #[wasm_bindgen]
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.scene.set_viewport(width, height);
    }

    /// Pointer position in client pixels.
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        self.scene.pointer_move(client_x, client_y);
    }

    #[wasm_bindgen]
    pub fn pointer_leave(&mut self) {
        self.scene.pointer_leave();
    }

    /// Advance one frame at host time `now` (seconds). Returns the time
    /// spent in milliseconds.
    #[wasm_bindgen]
    pub fn frame(&mut self, now: f64) -> f32 {
        let start = js_sys::Date::now();

        self.scene.frame(now);
        self.write_uniforms();

        (js_sys::Date::now() - start) as f32
    }

    #[wasm_bindgen]
    pub fn positions_ptr(&self) -> *const f32 {
        self.scene.positions_flat().as_ptr()
    }

    /// Number of `f32` values behind [`Self::positions_ptr`].
    #[wasm_bindgen]
    pub fn positions_len(&self) -> usize {
        self.scene.positions_flat().len()
    }

    #[wasm_bindgen]
    pub fn particle_count(&self) -> usize {
        self.scene.particle_count()
    }

    #[wasm_bindgen]
    pub fn opacity(&self) -> f32 {
        self.scene.opacity()
    }

    #[wasm_bindgen]
    pub fn transparent(&self) -> bool {
        self.scene.color().transparent
    }

    /// Packed `0xRRGGBB`.
    #[wasm_bindgen]
    pub fn color(&self) -> u32 {
        self.scene.color().hex()
    }

    #[wasm_bindgen]
    pub fn background_color(&self) -> String {
        self.scene.config().background_color.clone()
    }

    #[wasm_bindgen]
    pub fn uniforms_ptr(&self) -> *const u8 {
        bytemuck::bytes_of(&self.uniforms).as_ptr()
    }

    #[wasm_bindgen]
    pub fn uniforms_byte_length(&self) -> usize {
        std::mem::size_of::<GpuUniforms>()
    }
}

impl LogoParticles {
    fn write_uniforms(&mut self) {
        let [r, g, b, _] = self.scene.color().as_rgba_f32();
        self.uniforms = GpuUniforms {
            color: [r, g, b, self.scene.opacity()],
            point_size: POINT_SIZE,
            _pad: [0.0; 3],
        };
    }
}

fn decode_bitmap(width: u32, height: u32, rgba: Vec<u8>) -> Result<Bitmap, LogoError> {
    Ok(Bitmap::new(width, height, rgba).map_err(LoadError::from)?)
}
