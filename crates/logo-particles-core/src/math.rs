use std::f32::consts::TAU;

/// Elastic ease-out used for the arrival animation.
///
/// Exactly 0 at `t = 0` and exactly 1 at `t = 1`. In between the curve
/// overshoots 1 a few times before settling, so callers must not assume the
/// result stays inside `[0, 1]`.
pub fn elastic_ease_out(t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    2.0_f32.powf(-10.0 * t) * ((t - 0.075) * TAU / 0.3).sin() + 1.0
}

/// Clamp to `[0, 1]`.
#[inline]
pub fn saturate(x: f32) -> f32 {
    x.clamp(0.0, 1.0)
}
