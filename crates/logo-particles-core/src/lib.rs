//! Turn a raster logo into an animated point cloud.
//!
//! [`extract`] samples a bitmap's dark pixels into rest positions;
//! [`motion::MotionEngine`] animates them once per host frame with ambient
//! jitter, pointer pushes with spring-back, and a one-time arrival
//! transient.
pub mod animation;
pub mod bitmap;
pub mod camera;
pub mod color;
pub mod config;
pub mod error;
pub mod extract;
pub mod forces;
pub mod input;
pub mod logo;
pub mod math;
pub mod motion;
pub mod particle;
pub mod sanitize;
pub mod scene;

pub use bitmap::{Bitmap, ImageSource, MemoryImageSource};
#[cfg(feature = "image")]
pub use bitmap::FileImageSource;
pub use config::LogoParticlesConfig;
pub use error::{BitmapError, ConfigError, LoadError, LogoError};
pub use extract::extract;
pub use logo::{load_logo, LoadOutcome, LogoData};
pub use motion::{FrameInput, FrameOutput, MotionEngine, MotionParams};
pub use scene::Scene;
