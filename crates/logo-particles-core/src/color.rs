/// Particle color parsed from the configured color string.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleColor {
    pub rgb: [u8; 3],
    /// Taken as given, including 0: a fully transparent color keeps the
    /// particles invisible rather than falling back to opaque.
    pub alpha: f32,
    /// `true` when `alpha < 1.0`; the renderer needs blending enabled.
    pub transparent: bool,
}

impl Default for ParticleColor {
    fn default() -> Self {
        Self::opaque([255, 255, 255])
    }
}

impl ParticleColor {
    pub fn opaque(rgb: [u8; 3]) -> Self {
        Self {
            rgb,
            alpha: 1.0,
            transparent: false,
        }
    }

    /// Parse `rgba(r,g,b,a)`, `rgb(r,g,b)`, `#rrggbb` or `#rgb`.
    ///
    /// Anything else yields opaque white and a warning.
    pub fn parse(input: &str) -> Self {
        let s = input.trim();
        let parsed = if let Some(hex) = s.strip_prefix('#') {
            parse_hex(hex).map(Self::opaque)
        } else {
            parse_functional(s)
        };

        parsed.unwrap_or_else(|| {
            log::warn!("unrecognized particle color {:?}, using white", input);
            Self::default()
        })
    }

    /// Packed `0xRRGGBB`.
    pub fn hex(&self) -> u32 {
        let [r, g, b] = self.rgb;
        (r as u32) << 16 | (g as u32) << 8 | b as u32
    }

    /// Normalized `[r, g, b, a]` for uniform upload.
    pub fn as_rgba_f32(&self) -> [f32; 4] {
        let [r, g, b] = self.rgb;
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            self.alpha,
        ]
    }
}

fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => {
            let value = u32::from_str_radix(hex, 16).ok()?;
            Some([(value >> 16) as u8, (value >> 8) as u8, value as u8])
        }
        3 => {
            let mut rgb = [0u8; 3];
            for (slot, c) in rgb.iter_mut().zip(hex.chars()) {
                let nibble = c.to_digit(16)? as u8;
                *slot = nibble << 4 | nibble;
            }
            Some(rgb)
        }
        _ => None,
    }
}

fn parse_functional(s: &str) -> Option<ParticleColor> {
    let body = s
        .strip_prefix("rgba(")
        .or_else(|| s.strip_prefix("rgb("))?
        .strip_suffix(')')?;

    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let mut rgb = [0u8; 3];
    for (slot, part) in rgb.iter_mut().zip(&parts) {
        *slot = part.parse::<u8>().ok()?;
    }

    let alpha = match parts.get(3) {
        Some(a) => a.parse::<f32>().ok().filter(|a| a.is_finite())?.clamp(0.0, 1.0),
        None => 1.0,
    };

    Some(ParticleColor {
        rgb,
        alpha,
        transparent: alpha < 1.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_with_alpha() {
        let c = ParticleColor::parse("rgba(250,250,250,0.75)");
        assert_eq!(c.rgb, [250, 250, 250]);
        assert!((c.alpha - 0.75).abs() < 1e-6);
        assert!(c.transparent);
    }

    #[test]
    fn test_hex_is_opaque() {
        let c = ParticleColor::parse("#ffffff");
        assert_eq!(c.rgb, [255, 255, 255]);
        assert_eq!(c.alpha, 1.0);
        assert!(!c.transparent);
    }

    #[test]
    fn test_short_hex_and_spaces() {
        assert_eq!(ParticleColor::parse("#f80").rgb, [0xff, 0x88, 0x00]);
        let c = ParticleColor::parse("rgb(1, 2, 3)");
        assert_eq!(c.rgb, [1, 2, 3]);
        assert_eq!(c.alpha, 1.0);
        assert_eq!(c.hex(), 0x010203);
    }

    #[test]
    fn test_garbage_falls_back_to_white() {
        assert_eq!(ParticleColor::parse("cornflowerblue"), ParticleColor::default());
        assert_eq!(ParticleColor::parse("#12345"), ParticleColor::default());
        assert_eq!(ParticleColor::parse("rgba(300,0,0,1)"), ParticleColor::default());
    }
}
