use glam::Vec3;
use logo_particles_core::bitmap::Bitmap;
use logo_particles_core::extract::{extract, grid_step, normalize, sample_dark_pixels};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

const BLACK: [u8; 4] = [0, 0, 0, 255];
const WHITE: [u8; 4] = [255, 255, 255, 255];

/// White bitmap with the listed pixels painted black.
fn bitmap_with_dark(width: u32, height: u32, dark: &[(u32, u32)]) -> Bitmap {
    let mut bitmap = Bitmap::filled(width, height, WHITE).expect("valid bitmap");
    for &(x, y) in dark {
        bitmap.set_rgba(x, y, BLACK);
    }
    bitmap
}

/// (min, max) of each axis.
fn extents(points: &[Vec3]) -> (Vec3, Vec3) {
    let min = points.iter().fold(Vec3::splat(f32::INFINITY), |a, p| a.min(*p));
    let max = points.iter().fold(Vec3::splat(f32::NEG_INFINITY), |a, p| a.max(*p));
    (min, max)
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_all_black_10x10_target_25() {
    let bitmap = Bitmap::filled(10, 10, BLACK).expect("valid bitmap");

    assert_eq!(grid_step(10, 10, 25), 2);
    let raw = sample_dark_pixels(&bitmap, 2, 128);
    assert_eq!(raw.len(), 25);

    let points = extract(&bitmap, 25, 128, 1.0);
    assert_eq!(points.len(), 25);

    // Sampled grid spans 0..=8 on both axes, fitted into [-2, 2].
    let (min, max) = extents(&points);
    assert!((min.x + 2.0).abs() < 1e-6, "min.x = {}", min.x);
    assert!((max.x - 2.0).abs() < 1e-6, "max.x = {}", max.x);
    assert!((min.y + 2.0).abs() < 1e-6, "min.y = {}", min.y);
    assert!((max.y - 2.0).abs() < 1e-6, "max.y = {}", max.y);
    assert!(points.iter().all(|p| p.z == 0.0));
}

#[test]
fn test_all_bright_yields_nothing() {
    let bitmap = Bitmap::filled(16, 16, WHITE).expect("valid bitmap");
    assert!(extract(&bitmap, 50, 128, 1.0).is_empty());
}

#[test]
fn test_zero_target_does_not_divide_by_zero() {
    let bitmap = Bitmap::filled(4, 4, BLACK).expect("valid bitmap");
    let points = extract(&bitmap, 0, 128, 1.0);
    assert_eq!(points.len(), 16);
    assert!(points.iter().all(|p| p.is_finite()));
}

#[test]
fn test_y_axis_is_flipped() {
    // Top-left and bottom-right dark pixels.
    let bitmap = bitmap_with_dark(10, 10, &[(0, 0), (9, 9)]);
    let points = extract(&bitmap, 100, 128, 1.0);
    assert_eq!(points.len(), 2);

    let top_left = points[0];
    let bottom_right = points[1];
    assert!(top_left.x < 0.0 && top_left.y > 0.0, "top-left mapped to {:?}", top_left);
    assert!(
        bottom_right.x > 0.0 && bottom_right.y < 0.0,
        "bottom-right mapped to {:?}",
        bottom_right
    );
}

#[test]
fn test_small_logo_is_not_upscaled() {
    // 3x3 block of dark pixels: box is 2 wide, 4/2 = 2 would upscale.
    let dark: Vec<(u32, u32)> = (4..7).flat_map(|y| (4..7).map(move |x| (x, y))).collect();
    let bitmap = bitmap_with_dark(20, 20, &dark);
    let points = extract(&bitmap, 400, 128, 1.0);

    let (min, max) = extents(&points);
    assert!((max.x - min.x - 2.0).abs() < 1e-6, "width {}", max.x - min.x);
    assert!((max.y - min.y - 2.0).abs() < 1e-6, "height {}", max.y - min.y);
}

#[test]
fn test_scale_multiplies_extent() {
    let bitmap = Bitmap::filled(10, 10, BLACK).expect("valid bitmap");
    let points = extract(&bitmap, 25, 128, 2.5);
    let (min, max) = extents(&points);
    assert!((max.x - min.x - 10.0).abs() < 1e-5);
}

#[test]
fn test_vertical_line_falls_back_to_image_frame() {
    let dark: Vec<(u32, u32)> = (0..10).map(|y| (3, y)).collect();
    let bitmap = bitmap_with_dark(10, 10, &dark);
    let points = extract(&bitmap, 100, 128, 1.0);

    assert_eq!(points.len(), 10);
    for p in &points {
        assert!(p.is_finite(), "non-finite point {:?}", p);
        // (3 - 10/2) * 4/10
        assert!((p.x + 0.8).abs() < 1e-6, "x = {}", p.x);
    }
    // Row 0 -> -(0 - 5) * 0.4 = 2.0
    assert!((points[0].y - 2.0).abs() < 1e-6);
}

#[test]
fn test_single_pixel_falls_back_to_image_frame() {
    let bitmap = bitmap_with_dark(8, 4, &[(6, 1)]);
    let points = extract(&bitmap, 32, 128, 1.0);
    assert_eq!(points.len(), 1);
    // x: (6 - 4) * 4/8 = 1.0, y: -((1 - 2) * 4/4) = 1.0
    assert!((points[0] - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-6);
}

#[test]
fn test_threshold_is_strict() {
    let mut bitmap = Bitmap::filled(2, 1, WHITE).expect("valid bitmap");
    bitmap.set_rgba(0, 0, [128, 128, 128, 255]);
    bitmap.set_rgba(1, 0, [127, 128, 128, 255]);
    let raw = sample_dark_pixels(&bitmap, 1, 128);
    assert_eq!(raw.len(), 1);
    assert_eq!(raw[0].x, 1);
}

#[test]
fn test_normalize_empty() {
    assert!(normalize(&[], 10, 10, 1.0).is_empty());
}

#[test]
fn test_bitmap_rejects_bad_length() {
    assert!(Bitmap::new(2, 2, vec![0; 15]).is_err());
    assert!(Bitmap::new(0, 2, Vec::new()).is_err());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

fn mask_bitmap(width: u32, height: u32, mask: &[bool]) -> Bitmap {
    let mut bitmap = Bitmap::filled(width, height, WHITE).expect("valid bitmap");
    for y in 0..height {
        for x in 0..width {
            if mask[(y * width + x) as usize] {
                bitmap.set_rgba(x, y, BLACK);
            }
        }
    }
    bitmap
}

proptest! {
    #[test]
    fn prop_extract_is_pure_bounded_and_centered(
        width in 1u32..16,
        height in 1u32..16,
        mask in prop::collection::vec(any::<bool>(), 256),
        target in 0u32..300,
        scale in 0.5f32..3.0,
    ) {
        let bitmap = mask_bitmap(width, height, &mask);
        let a = extract(&bitmap, target, 128, scale);
        let b = extract(&bitmap, target, 128, scale);
        prop_assert_eq!(&a, &b);

        let step = grid_step(width, height, target);
        let expected = sample_dark_pixels(&bitmap, step, 128).len();
        prop_assert_eq!(a.len(), expected);

        if a.is_empty() {
            return Ok(());
        }
        prop_assert!(a.iter().all(|p| p.is_finite()));

        let (min, max) = extents(&a);
        let size = max - min;
        prop_assert!(size.x <= 4.0 * scale + 1e-4, "width {} > {}", size.x, 4.0 * scale);
        prop_assert!(size.y <= 4.0 * scale + 1e-4, "height {} > {}", size.y, 4.0 * scale);

        if size.x > 0.0 && size.y > 0.0 {
            let center = (max + min) * 0.5;
            prop_assert!(center.x.abs() < 1e-4, "center.x = {}", center.x);
            prop_assert!(center.y.abs() < 1e-4, "center.y = {}", center.y);
        }
    }
}
