use glam::Vec3;
use serde::Deserialize;

/// A particle position as it arrives from serialized logo data.
///
/// Either `[x, y, z, ...]` or `{ "x": .., "y": .., "z": .. }`. Coordinates
/// may be missing, `null` or non-finite; such entries are dropped by
/// [`sanitize_positions`].
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawPosition {
    Array(Vec<Option<f32>>),
    Object {
        x: Option<f32>,
        y: Option<f32>,
        z: Option<f32>,
    },
    /// Anything else (strings, numbers, nested garbage).
    Invalid(serde_json::Value),
}

impl RawPosition {
    /// The position when all three coordinates are present and finite.
    pub fn to_vec3(&self) -> Option<Vec3> {
        let (x, y, z) = match self {
            Self::Array(coords) if coords.len() >= 3 => (coords[0]?, coords[1]?, coords[2]?),
            Self::Object { x, y, z } => ((*x)?, (*y)?, (*z)?),
            _ => return None,
        };
        let v = Vec3::new(x, y, z);
        v.is_finite().then_some(v)
    }
}

impl From<Vec3> for RawPosition {
    fn from(v: Vec3) -> Self {
        Self::Array(vec![Some(v.x), Some(v.y), Some(v.z)])
    }
}

/// Keep the well-formed positions.
///
/// Never returns an empty buffer: when nothing survives, a single particle
/// at the origin stands in so the renderer always has something to upload.
pub fn sanitize_positions<'a, I>(raw: I) -> Vec<Vec3>
where
    I: IntoIterator<Item = &'a RawPosition>,
{
    let mut skipped = 0usize;
    let mut positions: Vec<Vec3> = raw
        .into_iter()
        .filter_map(|p| {
            let v = p.to_vec3();
            if v.is_none() {
                skipped += 1;
            }
            v
        })
        .collect();

    if skipped > 0 {
        log::warn!("skipped {} malformed particle entries", skipped);
    }
    if positions.is_empty() {
        log::warn!("no valid particle positions, using placeholder at origin");
        positions.push(Vec3::ZERO);
    }
    positions
}
