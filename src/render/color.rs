//! RGBA colors for the drawing surface.

/// An RGBA color with components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn from_rgb(rgb: (f32, f32, f32)) -> Self {
        Self::opaque(rgb.0, rgb.1, rgb.2)
    }

    /// Same color with its alpha multiplied by `opacity`.
    pub fn faded(self, opacity: f32) -> Self {
        Self {
            a: self.a * opacity.clamp(0.0, 1.0),
            ..self
        }
    }
}

pub const BLACK: Rgba = Rgba::opaque(0.0, 0.0, 0.0);
pub const WHITE: Rgba = Rgba::opaque(1.0, 1.0, 1.0);

/// Emphasis red for the current stroke in a stroke-order diagram (#ef4444).
pub const STROKE_EMPHASIS: Rgba = Rgba::opaque(0.937, 0.267, 0.267);

/// Muted gray for already-drawn strokes in a stroke-order diagram (#9ca3af).
pub const STROKE_MUTED: Rgba = Rgba::opaque(0.612, 0.639, 0.686);

/// Gray-blue used for pinyin over trace cells (#97a2b6).
pub const PINYIN_TRACE: Rgba = Rgba::opaque(0.592, 0.635, 0.714);

/// Parse a `#rrggbb` hex color into an RGB triple in 0.0..=1.0.
pub fn parse_hex_rgb(spec: &str) -> Option<(f32, f32, f32)> {
    let hex = spec.strip_prefix('#')?;
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (r, g, b) = (channel(0)?, channel(2)?, channel(4)?);
    let scale = |v: u8| v as f32 / 255.0;
    Some((scale(r), scale(g), scale(b)))
}
