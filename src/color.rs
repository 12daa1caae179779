//! Color types for glyph and background fills.
//!
//! Provides an RGBA color representation plus parsing of `#RRGGBB`-style
//! hex strings, the form overlay configurations arrive in.

use crate::error::{Error, Result};

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Create a color with modified alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self::new(self.r, self.g, self.b, a)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }

    /// Parse a hex color string: `#RGB`, `#RRGGBB`, or `#RRGGBBAA`.
    ///
    /// The leading `#` is optional.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidColor`] if the string is not one of the
    /// accepted forms or contains non-hex digits.
    ///
    /// # Example
    ///
    /// ```
    /// use ascii_dither::color::Rgba;
    ///
    /// assert_eq!(Rgba::from_hex("#000000").unwrap(), Rgba::BLACK);
    /// assert_eq!(Rgba::from_hex("fff").unwrap(), Rgba::WHITE);
    /// ```
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        let invalid = || Error::InvalidColor(s.to_string());
        if !hex.is_ascii() {
            return Err(invalid());
        }

        let parse2 = |slice: &str| u8::from_str_radix(slice, 16).map_err(|_| invalid());
        let parse1 = |slice: &str| {
            u8::from_str_radix(slice, 16)
                .map(|v| v * 17)
                .map_err(|_| invalid())
        };

        match hex.len() {
            3 => Ok(Self::rgb(
                parse1(&hex[0..1])?,
                parse1(&hex[1..2])?,
                parse1(&hex[2..3])?,
            )),
            6 => Ok(Self::rgb(
                parse2(&hex[0..2])?,
                parse2(&hex[2..4])?,
                parse2(&hex[4..6])?,
            )),
            8 => Ok(Self::new(
                parse2(&hex[0..2])?,
                parse2(&hex[2..4])?,
                parse2(&hex[4..6])?,
                parse2(&hex[6..8])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Linear interpolation between two colors.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;

        Self::new(
            (f32::from(self.r) * inv_t + f32::from(other.r) * t) as u8,
            (f32::from(self.g) * inv_t + f32::from(other.g) * t) as u8,
            (f32::from(self.b) * inv_t + f32::from(other.b) * t) as u8,
            (f32::from(self.a) * inv_t + f32::from(other.a) * t) as u8,
        )
    }
}
