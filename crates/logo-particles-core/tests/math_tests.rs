use logo_particles_core::animation::InitAnimation;
use logo_particles_core::math::*;

#[test]
fn test_elastic_endpoints() {
    assert_eq!(elastic_ease_out(0.0), 0.0);
    assert_eq!(elastic_ease_out(1.0), 1.0);
    assert_eq!(elastic_ease_out(-0.5), 0.0);
    assert_eq!(elastic_ease_out(1.5), 1.0);
}

#[test]
fn test_elastic_overshoots_then_settles() {
    let max = (1..100)
        .map(|i| elastic_ease_out(i as f32 / 100.0))
        .fold(f32::MIN, f32::max);
    assert!(max > 1.0, "no overshoot, max = {}", max);
    assert!(max < 1.5, "overshoot too large: {}", max);

    let late = elastic_ease_out(0.9);
    assert!((late - 1.0).abs() < 0.01, "not settled at 0.9: {}", late);
}

#[test]
fn test_elastic_matches_formula() {
    let t = 0.3_f32;
    let expected = 2.0_f32.powf(-3.0) * ((t - 0.075) * std::f32::consts::TAU / 0.3).sin() + 1.0;
    assert!((elastic_ease_out(t) - expected).abs() < 1e-6);
}

#[test]
fn test_saturate() {
    assert_eq!(saturate(-1.0), 0.0);
    assert_eq!(saturate(0.25), 0.25);
    assert_eq!(saturate(3.0), 1.0);
}

#[test]
fn test_init_animation_uses_elastic_curve() {
    let mut anim = InitAnimation::new(4.0);
    anim.progress(10.0);
    let eased = anim.progress(11.2);
    assert!((eased - elastic_ease_out(0.3)).abs() < 1e-5);
}
