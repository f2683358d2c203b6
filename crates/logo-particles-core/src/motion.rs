use std::f32::consts::TAU;

use glam::Vec3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::color::ParticleColor;
use crate::config::LogoParticlesConfig;
use crate::forces::pointer::{pointer_impulse, PointerSample};
use crate::forces::spring::Spring;
use crate::math::saturate;
use crate::particle::ParticleStates;

/// Motion parameters lifted from the configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
    pub random_amplitude: f32,
    pub random_speed: f32,
    pub init_amplitude: f32,
    pub wave_amplitude: f32,
    pub wave_frequency: f32,
    /// Alpha of the particle color; frame opacity fades in to this.
    pub alpha: f32,
    pub spring: Spring,
}

impl Default for MotionParams {
    fn default() -> Self {
        Self::from_config(&LogoParticlesConfig::default())
    }
}

impl MotionParams {
    pub fn from_config(config: &LogoParticlesConfig) -> Self {
        Self {
            random_amplitude: config.random_motion_amplitude,
            random_speed: config.random_motion_speed,
            init_amplitude: config.init_animation_amplitude,
            wave_amplitude: config.init_animation_wave_amplitude,
            wave_frequency: config.init_animation_wave_frequency,
            alpha: ParticleColor::parse(&config.particle_color).alpha,
            spring: Spring::default(),
        }
    }
}

/// Host input for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    /// Elapsed seconds, monotonic.
    pub time: f32,
    pub pointer: Option<PointerSample>,
    /// Eased arrival progress; 0 at start, settles at 1.
    pub init_progress: f32,
}

/// Frame-global output alongside the position buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutput {
    pub opacity: f32,
}

/// Drives every particle from its rest position to its render position
/// once per frame.
pub struct MotionEngine {
    pub states: ParticleStates,
    pub params: MotionParams,
    rng: StdRng,
    /// Arrival jitter drawn for the current frame, one value per particle.
    jitter: Vec<f32>,
}

impl MotionEngine {
    /// `seed` feeds both the fixed phases and the per-frame arrival jitter.
    pub fn new(rest: Vec<Vec3>, params: MotionParams, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let states = ParticleStates::new(rest, &mut rng);
        Self {
            states,
            params,
            rng,
            jitter: Vec::new(),
        }
    }

    /// Replace all particle state with a fresh set built from `rest`.
    pub fn reset(&mut self, rest: Vec<Vec3>) {
        self.states = ParticleStates::new(rest, &mut self.rng);
        self.jitter.clear();
    }

    pub fn particle_count(&self) -> usize {
        self.states.count
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.states.position
    }

    /// Positions as `x, y, z` triples, ready for upload.
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.states.position)
    }

    /// Advance one frame and write new render positions.
    pub fn step(&mut self, frame: &FrameInput) -> FrameOutput {
        let fade = saturate(frame.init_progress);
        let count = self.states.count;

        // Fresh jitter every frame while the arrival is visible.
        self.jitter.clear();
        if fade < 1.0 {
            let rng = &mut self.rng;
            self.jitter
                .extend((0..count).map(|_| rng.random::<f32>() - 0.5));
        } else {
            self.jitter.resize(count, 0.0);
        }

        let params = &self.params;
        let jitter = &self.jitter;
        let states = &mut self.states;
        let rest = &states.rest;
        let phase = &states.phase;

        #[cfg(feature = "parallel")]
        {
            states
                .position
                .par_iter_mut()
                .zip(states.velocity.par_iter_mut())
                .zip(states.displacement.par_iter_mut())
                .enumerate()
                .for_each(|(i, ((pos, vel), disp))| {
                    *pos = advance_particle(
                        rest[i],
                        phase[i],
                        vel,
                        disp,
                        jitter[i],
                        frame,
                        params,
                    );
                });
        }

        #[cfg(not(feature = "parallel"))]
        {
            for i in 0..count {
                states.position[i] = advance_particle(
                    rest[i],
                    phase[i],
                    &mut states.velocity[i],
                    &mut states.displacement[i],
                    jitter[i],
                    frame,
                    params,
                );
            }
        }

        FrameOutput {
            opacity: fade * params.alpha,
        }
    }
}

/// Ambient per-axis oscillation. Each axis has its own frequency and trig
/// function so particles never move in lockstep.
pub fn ambient_offset(phase: Vec3, time: f32, amplitude: f32, speed: f32) -> Vec3 {
    Vec3::new(
        amplitude * (time * 0.7 * speed + phase.x).sin(),
        amplitude * (time * 0.9 * speed + phase.y).cos(),
        amplitude * (time * 0.5 * speed + phase.z).sin(),
    )
}

/// Scalar arrival offset added to all three axes: decaying jitter plus a
/// position-dependent travelling wave. Zero once `progress` reaches 1.
///
/// `jitter` is a uniform draw in [-0.5, 0.5).
pub fn arrival_offset(rest: Vec3, progress: f32, jitter: f32, params: &MotionParams) -> f32 {
    let fade = saturate(progress);
    let init_offset = (1.0 - progress) * params.init_amplitude * jitter;

    let wave_phase = rest.x * params.wave_frequency + rest.y * params.wave_frequency;
    let wave_amplitude = (1.0 - progress) * params.wave_amplitude;
    let wave_offset = wave_amplitude * (wave_phase + progress * TAU).sin();

    init_offset * (1.0 - fade) + wave_offset
}

/// Full per-particle update for one frame. Mutates the spring state and
/// returns the render position.
pub fn advance_particle(
    rest: Vec3,
    phase: Vec3,
    velocity: &mut Vec3,
    displacement: &mut Vec3,
    jitter: f32,
    frame: &FrameInput,
    params: &MotionParams,
) -> Vec3 {
    let arrival = arrival_offset(rest, frame.init_progress, jitter, params);
    let ambient = ambient_offset(phase, frame.time, params.random_amplitude, params.random_speed);

    // Proximity uses rest + ambient + displacement only; the arrival offset
    // is left out.
    if let Some(pointer) = &frame.pointer {
        *displacement += pointer_impulse(rest + ambient + *displacement, pointer);
    }

    params.spring.step(displacement, velocity);

    rest + ambient + *displacement + Vec3::splat(arrival)
}
