use glam::Vec3;

/// Pointer influence ends at this world-space distance.
pub const INFLUENCE_RADIUS: f32 = 0.425;

/// Impulse magnitude for a particle directly under the pointer.
pub const POINTER_STRENGTH: f32 = 0.19;

/// Pointer state for one frame, already in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    /// Where the pointer ray meets the z = 0 plane.
    pub position: Vec3,
    /// Normalized direction of recent pointer movement, or zero when the
    /// pointer has not moved.
    pub direction: Vec3,
}

/// Impulse added to a particle's displacement this frame.
///
/// `approx_pos` is the particle's rest position plus ambient motion plus
/// displacement. Falloff is linear from [`POINTER_STRENGTH`] at the pointer
/// to zero at [`INFLUENCE_RADIUS`]. The push follows the pointer's movement
/// direction, not the line from pointer to particle.
pub fn pointer_impulse(approx_pos: Vec3, pointer: &PointerSample) -> Vec3 {
    let dist = pointer.position.distance(approx_pos);
    if !(dist < INFLUENCE_RADIUS) {
        return Vec3::ZERO;
    }
    let strength = POINTER_STRENGTH * (1.0 - dist / INFLUENCE_RADIUS);
    pointer.direction * strength
}
