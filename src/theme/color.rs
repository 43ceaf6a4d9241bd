use std::fmt;

use ratatui::style::Color;
use thiserror::Error;

/// Errors produced when parsing a hex colour string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("expected 6 hex digits, got {0:?}")]
    Length(String),
    #[error("invalid hex digit in {0:?}")]
    Digit(String),
}

enum HexError {
    Length,
    Digit,
}

const fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

const fn parse_bytes(bytes: &[u8]) -> Result<Rgb, HexError> {
    let start = if !bytes.is_empty() && bytes[0] == b'#' { 1 } else { 0 };
    if bytes.len() - start != 6 {
        return Err(HexError::Length);
    }

    let mut out = [0u8; 3];
    let mut i = 0;
    while i < 3 {
        let hi = match hex_value(bytes[start + 2 * i]) {
            Some(v) => v,
            None => return Err(HexError::Digit),
        };
        let lo = match hex_value(bytes[start + 2 * i + 1]) {
            Some(v) => v,
            None => return Err(HexError::Digit),
        };
        out[i] = hi * 16 + lo;
        i += 1;
    }

    Ok(Rgb {
        r: out[0],
        g: out[1],
        b: out[2],
    })
}

/// An opaque 24-bit colour.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build a colour from a `#RRGGBB` literal at compile time.
    ///
    /// A malformed literal fails const evaluation, so palette constants are
    /// checked by the compiler.
    pub const fn from_hex(hex: &str) -> Self {
        match parse_bytes(hex.as_bytes()) {
            Ok(rgb) => rgb,
            Err(_) => panic!("invalid #RRGGBB colour literal"),
        }
    }

    /// Parse a 6-hex-digit colour; the leading `#` is optional.
    pub fn parse(hex: &str) -> Result<Self, ColorError> {
        let trimmed = hex.trim();
        parse_bytes(trimmed.as_bytes()).map_err(|e| match e {
            HexError::Length => ColorError::Length(trimmed.to_string()),
            HexError::Digit => ColorError::Digit(trimmed.to_string()),
        })
    }

    /// Attach an alpha value (clamped to `[0, 1]`).
    pub fn with_opacity(self, opacity: f32) -> Rgba {
        let alpha = if opacity.is_nan() {
            0.0
        } else {
            opacity.clamp(0.0, 1.0)
        };
        Rgba { rgb: self, alpha }
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::Rgb(c.r, c.g, c.b)
    }
}

/// A colour with an alpha fraction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub alpha: f32,
}

impl Rgba {
    /// Alpha-blend onto an opaque `background`.
    pub fn over(self, background: Rgb) -> Rgb {
        let a = self.alpha;
        let mix = |fg: u8, bg: u8| (fg as f32 * a + bg as f32 * (1.0 - a)).round() as u8;
        Rgb {
            r: mix(self.rgb.r, background.r),
            g: mix(self.rgb.g, background.g),
            b: mix(self.rgb.b, background.b),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.rgb.r, self.rgb.g, self.rgb.b, self.alpha
        )
    }
}

/// Parse `hex` and return the same colour with the given opacity.
///
/// `with_opacity("#0A84FF", 0.1)` displays as `rgba(10, 132, 255, 0.1)`.
pub fn with_opacity(hex: &str, opacity: f32) -> Result<Rgba, ColorError> {
    Ok(Rgb::parse(hex)?.with_opacity(opacity))
}
