//! Error types for logo particle generation.

use thiserror::Error;

/// Problems with a decoded pixel buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitmapError {
    #[error("bitmap has a zero dimension ({width}x{height})")]
    EmptyDimensions { width: u32, height: u32 },

    #[error("pixel buffer holds {actual} bytes, expected {expected} for {width}x{height} RGBA")]
    LengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// The image source could not produce a decoded bitmap.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to load image {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode image {path}: {message}")]
    Decode { path: String, message: String },

    #[error("image {0} not found")]
    NotFound(String),

    #[error("invalid bitmap: {0}")]
    Bitmap(#[from] BitmapError),
}

/// Failure to turn a configured logo into particles.
#[derive(Error, Debug)]
pub enum LogoError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("No particles generated from {path}")]
    EmptyExtraction { path: String },

    #[error("malformed logo data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Configuration JSON could not be parsed.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
