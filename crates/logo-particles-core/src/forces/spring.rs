use glam::Vec3;

pub const SPRING_CONSTANT: f32 = 0.045;
pub const DAMPING: f32 = 0.91;

/// Damped spring pulling a displacement back to zero, one step per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f32,
    /// Velocity multiplier per step; below 1 for decay.
    pub damping: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            stiffness: SPRING_CONSTANT,
            damping: DAMPING,
        }
    }
}

impl Spring {
    /// Semi-implicit Euler: force, then damping, then position.
    #[inline]
    pub fn step(&self, displacement: &mut Vec3, velocity: &mut Vec3) {
        *velocity += -*displacement * self.stiffness;
        *velocity *= self.damping;
        *displacement += *velocity;
    }
}
