//! The radial dithering renderer.
//!
//! Maps distance-from-center to a normalized intensity, intensity to a
//! ramp glyph, and rasters the result over a sample grid. The math is
//! exposed as free functions so the selection law is testable without any
//! surface at all.

use crate::color::Rgba;
use crate::config::{DitherConfig, INTENSITY_THRESHOLD};
use crate::surface::Surface;

/// Background fill painted before any glyphs.
pub const BACKGROUND: Rgba = Rgba::WHITE;

/// Normalized radial intensity of sample point `(x, y)` on a `width` x
/// `height` surface.
///
/// 1.0 at the geometric center, falling linearly to 0.0 at the corners;
/// never negative. Distances are measured against the center-to-corner
/// distance `sqrt((w/2)^2 + (h/2)^2)`.
#[must_use]
pub fn intensity(x: f32, y: f32, width: f32, height: f32) -> f32 {
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let distance = ((x - center_x).powi(2) + (y - center_y).powi(2)).sqrt();
    let max_distance = (center_x * center_x + center_y * center_y).sqrt();
    if max_distance == 0.0 {
        // 0x0 surface; the raster pass never samples it anyway
        return 1.0;
    }
    (1.0 - distance / max_distance).max(0.0)
}

/// Ramp slot for an intensity: `floor(intensity * (len - 1))`, clamped to
/// `[0, len - 1]`.
///
/// In-bounds for every intensity in [0, 1] and any `ramp_len >= 1`.
#[must_use]
pub fn glyph_index(intensity: f32, ramp_len: usize) -> usize {
    let last = ramp_len.saturating_sub(1);
    let idx = (intensity * last as f32).floor() as isize;
    idx.clamp(0, last as isize) as usize
}

/// Full glyph selection law: threshold gate, ramp lookup, blank skip.
///
/// Returns `None` when `intensity <= 0.2` (the boundary is exclusive),
/// when the ramp is empty, or when the selected glyph is the blank
/// character.
#[must_use]
pub fn glyph_for(intensity: f32, ramp: &[char]) -> Option<char> {
    if ramp.is_empty() || intensity <= INTENSITY_THRESHOLD {
        return None;
    }
    let ch = ramp[glyph_index(intensity, ramp.len())];
    (ch != ' ').then_some(ch)
}

/// Number of sample columns (or rows) for a dimension: `ceil(dim / spacing)`.
#[must_use]
pub fn sample_count(dimension: f32, spacing: f32) -> u32 {
    (dimension / spacing).ceil() as u32
}

/// Fully repaint a surface with the dithering pattern.
///
/// Clears to [`BACKGROUND`], then walks sample points row by row with
/// floating-point accumulation by `config.spacing`, drawing each selected
/// glyph top-left anchored at its sample point. Deterministic given the
/// surface dimensions and config; a zero-size surface is left as the
/// background fill.
///
/// Precondition: `config.spacing > 0` (the builder enforces this; a
/// hand-built config with non-positive spacing would never terminate).
pub fn render<S: Surface>(surface: &mut S, config: &DitherConfig) {
    surface.clear(BACKGROUND);

    let width = surface.width() as f32;
    let height = surface.height() as f32;

    let mut y = 0.0_f32;
    while y < height {
        let mut x = 0.0_f32;
        while x < width {
            if let Some(ch) = glyph_for(intensity(x, y, width, height), &config.chars) {
                surface.draw_glyph(ch, x, y);
            }
            x += config.spacing;
        }
        y += config.spacing;
    }
}
