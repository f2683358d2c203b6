use glam::{UVec2, Vec3};

use crate::bitmap::Bitmap;

/// Half-extent of the canonical box that extracted logos are fitted into.
pub const CANONICAL_EXTENT: f32 = 4.0;

/// Axis-aligned bounds of the selected pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PixelBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl PixelBounds {
    /// `None` for an empty set.
    pub fn of(pixels: &[UVec2]) -> Option<Self> {
        let first = pixels.first()?;
        let mut bounds = Self {
            min_x: first.x as f32,
            min_y: first.y as f32,
            max_x: first.x as f32,
            max_y: first.y as f32,
        };
        for p in &pixels[1..] {
            bounds.min_x = bounds.min_x.min(p.x as f32);
            bounds.min_y = bounds.min_y.min(p.y as f32);
            bounds.max_x = bounds.max_x.max(p.x as f32);
            bounds.max_y = bounds.max_y.max(p.y as f32);
        }
        Some(bounds)
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Zero extent on either axis.
    pub fn is_degenerate(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }
}

/// Sampling stride for a `width x height` image and an advisory target
/// count. Never below 1, also for a zero target.
pub fn grid_step(width: u32, height: u32, target_count: u32) -> u32 {
    if target_count == 0 {
        return 1;
    }
    let total = width as f64 * height as f64;
    let step = (total / target_count as f64).sqrt().floor();
    (step as u32).max(1)
}

/// Visit the pixel grid at `step` and keep every pixel darker than
/// `threshold`.
pub fn sample_dark_pixels(bitmap: &Bitmap, step: u32, threshold: u8) -> Vec<UVec2> {
    let step = step.max(1) as usize;
    let threshold = threshold as f32;
    let mut selected = Vec::new();

    for y in (0..bitmap.height()).step_by(step) {
        for x in (0..bitmap.width()).step_by(step) {
            if bitmap.brightness(x, y) < threshold {
                selected.push(UVec2::new(x, y));
            }
        }
    }
    selected
}

/// Map pixel coordinates into render space: centered on the origin, fitted
/// into the canonical box, then multiplied by `scale`. Y is flipped because
/// image rows run top-down.
///
/// Sparse or small logos are never upscaled past one unit per pixel. When
/// the selection has no extent on an axis the whole image is used as the
/// reference frame instead.
pub fn normalize(pixels: &[UVec2], image_width: u32, image_height: u32, scale: f32) -> Vec<Vec3> {
    let Some(bounds) = PixelBounds::of(pixels) else {
        return Vec::new();
    };

    if bounds.is_degenerate() {
        let w = image_width.max(1) as f32;
        let h = image_height.max(1) as f32;
        let sx = CANONICAL_EXTENT / w * scale;
        let sy = CANONICAL_EXTENT / h * scale;
        return pixels
            .iter()
            .map(|p| {
                Vec3::new(
                    (p.x as f32 - w / 2.0) * sx,
                    -((p.y as f32 - h / 2.0) * sy),
                    0.0,
                )
            })
            .collect();
    }

    let (w, h) = (bounds.width(), bounds.height());
    let s = (CANONICAL_EXTENT / w).min(CANONICAL_EXTENT / h).min(1.0) * scale;

    pixels
        .iter()
        .map(|p| {
            Vec3::new(
                (p.x as f32 - bounds.min_x - w / 2.0) * s,
                -((p.y as f32 - bounds.min_y - h / 2.0) * s),
                0.0,
            )
        })
        .collect()
}

/// Turn the dark pixels of `bitmap` into rest positions.
///
/// `target_count` only sets the sampling density. The number of points
/// returned depends on how much of the image is darker than `threshold`, and
/// may be zero.
pub fn extract(bitmap: &Bitmap, target_count: u32, threshold: u8, scale: f32) -> Vec<Vec3> {
    let step = grid_step(bitmap.width(), bitmap.height(), target_count);
    let selected = sample_dark_pixels(bitmap, step, threshold);
    let points = normalize(&selected, bitmap.width(), bitmap.height(), scale);

    log::debug!(
        "extracted {} particles from {}x{} bitmap (target {}, step {})",
        points.len(),
        bitmap.width(),
        bitmap.height(),
        target_count,
        step
    );
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_step_clamps() {
        assert_eq!(grid_step(10, 10, 25), 2);
        assert_eq!(grid_step(10, 10, 0), 1);
        assert_eq!(grid_step(10, 10, 10_000), 1);
        assert_eq!(grid_step(100, 100, 100), 10);
    }

    #[test]
    fn test_bounds_of_empty_is_none() {
        assert!(PixelBounds::of(&[]).is_none());
    }

    #[test]
    fn test_single_pixel_is_degenerate() {
        let b = PixelBounds::of(&[UVec2::new(3, 4)]).expect("one pixel");
        assert!(b.is_degenerate());
    }
}
