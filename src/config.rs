//! Overlay configuration.
//!
//! A [`DitherConfig`] is fixed at attach time; only opacity can change
//! afterwards, through the overlay control surface. Defaults reproduce the
//! viewport overlay constants; [`DitherConfig::element_defaults`] carries
//! the element-scoped variant.

use crate::color::Rgba;

/// Default glyph ramp, intensity-ranked from blank to densest.
pub const DEFAULT_RAMP: [char; 8] = [' ', '.', ':', ';', '+', '*', '#', '@'];

/// Intensity at or below which no glyph is drawn.
pub const INTENSITY_THRESHOLD: f32 = 0.2;

/// Immutable configuration for one dithering overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct DitherConfig {
    /// Glyph characters ordered by intensity, lowest to highest.
    pub chars: Vec<char>,
    /// Glyph size in pixels.
    pub font_size: u32,
    /// Glyph fill color.
    pub color: Rgba,
    /// Grid spacing in pixels between sample points. May be fractional.
    pub spacing: f32,
    /// Stacking order index.
    pub z_index: i32,
    /// Overlay opacity in [0, 1].
    pub opacity: f32,
}

impl Default for DitherConfig {
    fn default() -> Self {
        Self {
            chars: DEFAULT_RAMP.to_vec(),
            font_size: 8,
            color: Rgba::BLACK,
            spacing: 7.5,
            z_index: -1000,
            opacity: 0.3,
        }
    }
}

impl DitherConfig {
    /// Create a configuration with the viewport defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration constants used by element-scoped overlays.
    #[must_use]
    pub fn element_defaults() -> Self {
        Self {
            spacing: 7.8,
            z_index: 0,
            opacity: 0.15,
            ..Self::default()
        }
    }

    /// Set the glyph ramp, ordered from lowest to highest intensity.
    ///
    /// An empty ramp is ignored; a draw pass needs at least one glyph slot.
    #[must_use]
    pub fn chars<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        let chars: Vec<char> = chars.into_iter().collect();
        if !chars.is_empty() {
            self.chars = chars;
        }
        self
    }

    /// Set the glyph size in pixels.
    #[must_use]
    pub fn font_size(mut self, px: u32) -> Self {
        self.font_size = px;
        self
    }

    /// Set the glyph fill color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Set the grid spacing in pixels.
    ///
    /// Non-positive values are ignored: the raster pass requires a positive
    /// step and the builder keeps the previous value rather than erroring.
    #[must_use]
    pub fn spacing(mut self, px: f32) -> Self {
        if px > 0.0 {
            self.spacing = px;
        }
        self
    }

    /// Set the stacking order index.
    #[must_use]
    pub fn z_index(mut self, z: i32) -> Self {
        self.z_index = z;
        self
    }

    /// Set the overlay opacity, clamped to [0, 1].
    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }
}
