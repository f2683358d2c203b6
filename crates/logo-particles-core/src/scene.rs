use glam::Vec3;

use crate::animation::InitAnimation;
use crate::bitmap::{Bitmap, MemoryImageSource};
use crate::camera::Camera;
use crate::color::ParticleColor;
use crate::config::LogoParticlesConfig;
use crate::error::{LoadError, LogoError};
use crate::input::PointerTracker;
use crate::logo::load_logo;
use crate::motion::{FrameInput, FrameOutput, MotionEngine, MotionParams};

/// Everything a host needs to drive one logo scene frame by frame:
/// configuration, motion engine, arrival timing, pointer and camera.
pub struct Scene {
    config: LogoParticlesConfig,
    color: ParticleColor,
    engine: MotionEngine,
    init: InitAnimation,
    pointer: PointerTracker,
    camera: Camera,
    viewport: (f32, f32),
    /// Host timestamp of the first frame, seconds.
    clock_start: Option<f64>,
    opacity: f32,
}

impl Scene {
    /// Build from a config and the host-decoded logo bitmap.
    pub fn new(
        config: LogoParticlesConfig,
        bitmap: Bitmap,
        seed: u64,
    ) -> Result<Scene, LogoError> {
        config.validate();
        let rest = extract_rest(&config, bitmap)?;
        let engine = MotionEngine::new(rest, MotionParams::from_config(&config), seed);
        log::info!("scene created: {} particles", engine.particle_count());

        Ok(Self {
            init: InitAnimation::new(config.init_animation_duration),
            color: ParticleColor::parse(&config.particle_color),
            config,
            engine,
            pointer: PointerTracker::new(),
            camera: Camera::default(),
            viewport: (1.0, 1.0),
            clock_start: None,
            opacity: 0.0,
        })
    }

    /// Apply a new config.
    ///
    /// Changes to the logo, particle count, scale or threshold restart the
    /// whole pipeline and need `bitmap`; anything else applies live. The new
    /// config is kept even when the reload fails, and a failed reload leaves
    /// the scene with no particles so the host draws nothing.
    pub fn reconfigure(
        &mut self,
        config: LogoParticlesConfig,
        bitmap: Option<Bitmap>,
    ) -> Result<(), LogoError> {
        config.validate();
        let reload = self.config.requires_reload(&config);

        if config.init_animation_duration != self.config.init_animation_duration {
            self.init = InitAnimation::new(config.init_animation_duration);
        }
        self.engine.params = MotionParams::from_config(&config);
        self.color = ParticleColor::parse(&config.particle_color);
        self.config = config;

        if !reload {
            return Ok(());
        }

        self.init.restart();
        let loaded = match bitmap {
            Some(bitmap) => extract_rest(&self.config, bitmap),
            None => Err(LoadError::NotFound(self.config.logo_path.clone()).into()),
        };
        match loaded {
            Ok(rest) => {
                self.engine.reset(rest);
                log::info!("scene reloaded: {} particles", self.engine.particle_count());
                Ok(())
            }
            Err(e) => {
                self.engine.reset(Vec::new());
                self.opacity = 0.0;
                Err(e)
            }
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = (width, height);
        self.camera.set_viewport(width, height);
    }

    /// Pointer position in client pixels.
    pub fn pointer_move(&mut self, client_x: f32, client_y: f32) {
        let (w, h) = self.viewport;
        self.pointer.move_client(client_x, client_y, w, h);
    }

    pub fn pointer_leave(&mut self) {
        self.pointer.clear();
    }

    /// Advance one frame at host time `now` (seconds).
    pub fn frame(&mut self, now: f64) -> FrameOutput {
        let t0 = *self.clock_start.get_or_insert(now);
        let pointer = self
            .pointer
            .advance_frame()
            .and_then(|(pos, vel)| self.camera.pointer_sample(pos, vel));

        let out = self.engine.step(&FrameInput {
            time: (now - t0) as f32,
            pointer,
            init_progress: self.init.progress(now),
        });
        self.opacity = out.opacity;
        out
    }

    pub fn config(&self) -> &LogoParticlesConfig {
        &self.config
    }

    pub fn color(&self) -> ParticleColor {
        self.color
    }

    pub fn engine(&self) -> &MotionEngine {
        &self.engine
    }

    pub fn particle_count(&self) -> usize {
        self.engine.particle_count()
    }

    pub fn positions(&self) -> &[Vec3] {
        self.engine.positions()
    }

    pub fn positions_flat(&self) -> &[f32] {
        self.engine.positions_flat()
    }

    /// Opacity from the most recent frame.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }
}

/// Extract rest positions from a host-decoded bitmap, treating an empty
/// result as a load failure.
fn extract_rest(config: &LogoParticlesConfig, bitmap: Bitmap) -> Result<Vec<Vec3>, LogoError> {
    let mut source = MemoryImageSource::new();
    source.insert(config.logo_path.clone(), bitmap);
    let logo = load_logo(config, &source).inspect_err(|e| {
        log::error!("failed to load logo: {}", e);
    })?;
    Ok(logo.particle_positions)
}
