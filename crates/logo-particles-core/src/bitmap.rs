use std::collections::HashMap;

use crate::error::{BitmapError, LoadError};

/// A decoded RGBA8 image, row-major, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Bitmap {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, BitmapError> {
        if width == 0 || height == 0 {
            return Err(BitmapError::EmptyDimensions { width, height });
        }
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(BitmapError::LengthMismatch {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A bitmap filled with a single color.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, BitmapError> {
        let count = width as usize * height as usize;
        Self::new(width, height, rgba.repeat(count))
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// RGBA at `(x, y)`. Panics when out of bounds.
    pub fn rgba(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Mean of R, G and B at `(x, y)`. Alpha is ignored.
    pub fn brightness(&self, x: u32, y: u32) -> f32 {
        let [r, g, b, _] = self.rgba(x, y);
        (r as f32 + g as f32 + b as f32) / 3.0
    }

    pub fn set_rgba(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        let i = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[i..i + 4].copy_from_slice(&rgba);
    }
}

/// Resolves a logo path to a decoded bitmap.
pub trait ImageSource {
    fn load(&self, path: &str) -> Result<Bitmap, LoadError>;
}

/// Bitmaps registered up front, keyed by path.
#[derive(Default)]
pub struct MemoryImageSource {
    images: HashMap<String, Bitmap>,
}

impl MemoryImageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, path: impl Into<String>, bitmap: Bitmap) {
        self.images.insert(path.into(), bitmap);
    }
}

impl ImageSource for MemoryImageSource {
    fn load(&self, path: &str) -> Result<Bitmap, LoadError> {
        self.images
            .get(path)
            .cloned()
            .ok_or_else(|| LoadError::NotFound(path.to_string()))
    }
}

/// Decodes images from disk with the `image` crate.
///
/// Logo paths are web-style (`/logos/logo.png`); they are resolved
/// relative to `root` with any leading `/` stripped.
#[cfg(feature = "image")]
pub struct FileImageSource {
    root: std::path::PathBuf,
}

#[cfg(feature = "image")]
impl FileImageSource {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn resolve(&self, path: &str) -> std::path::PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }
}

#[cfg(feature = "image")]
impl ImageSource for FileImageSource {
    fn load(&self, path: &str) -> Result<Bitmap, LoadError> {
        let full = self.resolve(path);
        let image = image::open(&full).map_err(|e| match e {
            image::ImageError::IoError(source) => LoadError::Io {
                path: path.to_string(),
                source,
            },
            other => LoadError::Decode {
                path: path.to_string(),
                message: other.to_string(),
            },
        })?;
        let rgba = image.to_rgba8();
        let (width, height) = rgba.dimensions();
        log::debug!("decoded {} ({}x{})", full.display(), width, height);
        Ok(Bitmap::new(width, height, rgba.into_raw())?)
    }
}
