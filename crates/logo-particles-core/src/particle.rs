use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

/// SoA particle storage for the motion engine.
///
/// All arrays have length `count` and are created and replaced together.
/// Particles never read each other's entries.
pub struct ParticleStates {
    pub count: usize,
    /// Extracted rest positions. Never mutated.
    pub rest: Vec<Vec3>,
    /// Per-axis phase offsets in [0, 2π) for ambient motion. Fixed at creation.
    pub phase: Vec<Vec3>,
    /// Spring velocity carried across frames.
    pub velocity: Vec<Vec3>,
    /// Pointer-driven offset from rest, relaxed by the spring.
    pub displacement: Vec<Vec3>,
    /// Render positions written each frame.
    pub position: Vec<Vec3>,
}

impl ParticleStates {
    pub fn new<R: Rng + ?Sized>(rest: Vec<Vec3>, rng: &mut R) -> Self {
        let count = rest.len();
        let phase = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.random_range(0.0..TAU),
                    rng.random_range(0.0..TAU),
                    rng.random_range(0.0..TAU),
                )
            })
            .collect();

        Self {
            count,
            position: rest.clone(),
            rest,
            phase,
            velocity: vec![Vec3::ZERO; count],
            displacement: vec![Vec3::ZERO; count],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
