use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Scene configuration supplied by the host.
///
/// Field names follow the host's JSON (`particleCount`, `logoPath`, ...).
/// Every field is optional in JSON and falls back to [`Default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogoParticlesConfig {
    /// Target particle density. Advisory, see [`crate::extract::extract`].
    pub particle_count: u32,
    pub random_motion_amplitude: f32,
    pub random_motion_speed: f32,
    pub logo_scale: f32,
    /// Presentation only; carried through for the host.
    pub background_color: String,
    /// `rgba(r,g,b,a)`, `rgb(r,g,b)`, `#rrggbb` or `#rgb`.
    pub particle_color: String,
    pub logo_path: String,
    /// Pixels with mean RGB below this become particles.
    pub threshold: u8,
    /// Seconds.
    pub init_animation_duration: f32,
    pub init_animation_amplitude: f32,
    pub init_animation_wave_amplitude: f32,
    pub init_animation_wave_frequency: f32,
}

impl Default for LogoParticlesConfig {
    fn default() -> Self {
        Self {
            particle_count: 4160,
            random_motion_amplitude: 0.04,
            random_motion_speed: 1.0,
            logo_scale: 1.0,
            background_color: "#2B2E35".to_string(),
            particle_color: "rgba(250,250,250,0.75)".to_string(),
            logo_path: "/logos/logo.png".to_string(),
            threshold: 128,
            init_animation_duration: 6.0,
            init_animation_amplitude: 2.5,
            init_animation_wave_amplitude: 1.2,
            init_animation_wave_frequency: 0.8,
        }
    }
}

impl LogoParticlesConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Names of fields outside their documented range.
    ///
    /// Out-of-range values are still used as given; they only degrade the
    /// visual result.
    pub fn out_of_range(&self) -> Vec<&'static str> {
        let checks: [(&'static str, f32, f32, f32); 8] = [
            ("particleCount", self.particle_count as f32, 1.0, 100_000.0),
            ("randomMotionAmplitude", self.random_motion_amplitude, 0.0, 1.0),
            ("randomMotionSpeed", self.random_motion_speed, 0.0, 10.0),
            ("logoScale", self.logo_scale, 0.5, 3.0),
            ("initAnimationDuration", self.init_animation_duration, 2.0, 10.0),
            ("initAnimationAmplitude", self.init_animation_amplitude, 1.0, 5.0),
            ("initAnimationWaveAmplitude", self.init_animation_wave_amplitude, 0.5, 3.0),
            ("initAnimationWaveFrequency", self.init_animation_wave_frequency, 0.3, 2.0),
        ];

        checks
            .iter()
            .filter(|(_, value, min, max)| !(value >= min && value <= max))
            .map(|(name, ..)| *name)
            .collect()
    }

    /// Log a warning for every out-of-range field. Never fails.
    pub fn validate(&self) {
        for field in self.out_of_range() {
            log::warn!("config field {} is outside its supported range", field);
        }
    }

    /// Whether switching from `self` to `other` needs a full
    /// extract / initialize / init-animation restart.
    pub fn requires_reload(&self, other: &Self) -> bool {
        self.logo_path != other.logo_path
            || self.particle_count != other.particle_count
            || self.logo_scale != other.logo_scale
            || self.threshold != other.threshold
    }
}
