use std::path::Path;

use glam::Vec3;
use serde::Deserialize;

use crate::bitmap::ImageSource;
use crate::config::LogoParticlesConfig;
use crate::error::LogoError;
use crate::extract::extract;
use crate::sanitize::{sanitize_positions, RawPosition};

/// Nominal on-screen size recorded for raster logos.
const DEFAULT_LOGO_SIZE: u32 = 200;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogoKind {
    Svg,
    Png,
}

impl LogoKind {
    fn from_path(path: &str) -> Self {
        match Path::new(path).extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => Self::Svg,
            _ => Self::Png,
        }
    }
}

/// A logo ready to be animated.
#[derive(Clone, Debug, PartialEq)]
pub struct LogoData {
    pub id: String,
    pub name: String,
    pub url: String,
    pub kind: LogoKind,
    pub width: u32,
    pub height: u32,
    /// Rest positions. Never empty.
    pub particle_positions: Vec<Vec3>,
    pub original_path: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SerializedLogo {
    id: String,
    name: String,
    url: String,
    #[serde(rename = "type")]
    kind: LogoKind,
    width: u32,
    height: u32,
    #[serde(default)]
    particle_positions: Vec<RawPosition>,
    #[serde(default)]
    original_path: Option<String>,
}

impl LogoData {
    /// Parse previously serialized logo data. Malformed particle entries are
    /// skipped individually; see [`sanitize_positions`].
    pub fn from_json(json: &str) -> Result<Self, LogoError> {
        let raw: SerializedLogo = serde_json::from_str(json)?;
        Ok(Self {
            id: raw.id,
            name: raw.name,
            url: raw.url,
            kind: raw.kind,
            width: raw.width,
            height: raw.height,
            particle_positions: sanitize_positions(&raw.particle_positions),
            original_path: raw.original_path,
        })
    }

    pub fn particle_count(&self) -> usize {
        self.particle_positions.len()
    }
}

/// Display name derived from a path: the file stem, or `"Logo"`.
pub fn logo_name(path: &str) -> String {
    path.rsplit('/')
        .next()
        .and_then(|file| file.split('.').next())
        .filter(|stem| !stem.is_empty())
        .unwrap_or("Logo")
        .to_string()
}

/// Lowercased name with whitespace runs replaced by `-`.
pub fn logo_id(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Load the configured logo and extract its rest positions.
///
/// An image that decodes but yields no dark pixels is reported as
/// [`LogoError::EmptyExtraction`], not returned as an empty logo.
pub fn load_logo<S: ImageSource + ?Sized>(
    config: &LogoParticlesConfig,
    source: &S,
) -> Result<LogoData, LogoError> {
    let path = config.logo_path.as_str();
    let bitmap = source.load(path)?;
    let positions = extract(
        &bitmap,
        config.particle_count,
        config.threshold,
        config.logo_scale,
    );

    if positions.is_empty() {
        return Err(LogoError::EmptyExtraction {
            path: path.to_string(),
        });
    }

    let name = logo_name(path);
    log::info!("loaded logo {:?} with {} particles", name, positions.len());

    Ok(LogoData {
        id: logo_id(&name),
        name,
        url: path.to_string(),
        kind: LogoKind::from_path(path),
        width: DEFAULT_LOGO_SIZE,
        height: DEFAULT_LOGO_SIZE,
        particle_positions: positions,
        original_path: Some(path.to_string()),
    })
}

/// Host-facing form of a load attempt: `success = false` plus a message on
/// failure.
#[derive(Clone, Debug)]
pub struct LoadOutcome {
    pub success: bool,
    pub data: Option<LogoData>,
    pub error: Option<String>,
}

impl From<Result<LogoData, LogoError>> for LoadOutcome {
    fn from(result: Result<LogoData, LogoError>) -> Self {
        match result {
            Ok(data) => Self {
                success: true,
                data: Some(data),
                error: None,
            },
            Err(e) => {
                log::error!("failed to load logo: {}", e);
                Self {
                    success: false,
                    data: None,
                    error: Some(e.to_string()),
                }
            }
        }
    }
}
