//! Drawing surface capability trait and its two built-in targets.
//!
//! [`Surface`] is the seam between the renderer and whatever actually
//! holds pixels: [`PixelSurface`] rasterizes ramp glyphs into a
//! [`Framebuffer`] through the bitmap atlas, [`TextSurface`] snaps them
//! into a character-cell grid for terminal preview and headless tests.

use crate::color::Rgba;
use crate::config::DitherConfig;
use crate::error::Result;
use crate::font::{self, GLYPH_SIZE};
use crate::framebuffer::Framebuffer;

/// A 2D drawing target the renderer can paint glyphs onto.
///
/// One surface is owned per overlay; it is resized in place on container
/// resize, never replaced.
pub trait Surface {
    /// Create a surface sized to its container.
    ///
    /// Either dimension may be zero.
    ///
    /// # Errors
    ///
    /// Implementations may fail on allocation or configuration grounds.
    fn create(width: u32, height: u32, config: &DitherConfig) -> Result<Self>
    where
        Self: Sized;

    /// Current width in pixels.
    fn width(&self) -> u32;

    /// Current height in pixels.
    fn height(&self) -> u32;

    /// Reassign the surface dimensions, discarding prior contents.
    fn resize(&mut self, width: u32, height: u32);

    /// Fill the entire surface with one color.
    fn clear(&mut self, color: Rgba);

    /// Draw a glyph with its top-left corner at `(x, y)` surface pixels.
    fn draw_glyph(&mut self, ch: char, x: f32, y: f32);
}

// ============================================================================
// Pixel surface
// ============================================================================

/// Framebuffer-backed surface drawing atlas glyphs at a configured size.
#[derive(Debug, Clone)]
pub struct PixelSurface {
    fb: Framebuffer,
    glyph_px: u32,
    color: Rgba,
}

impl PixelSurface {
    /// The backing framebuffer.
    #[must_use]
    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Consume the surface, returning the backing framebuffer.
    #[must_use]
    pub fn into_framebuffer(self) -> Framebuffer {
        self.fb
    }

    /// Composite this surface over a destination with a uniform opacity.
    ///
    /// This is where overlay opacity takes effect; the surface itself is
    /// always painted fully opaque.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination dimensions differ.
    pub fn composite_over(&self, dst: &mut Framebuffer, opacity: f32) -> Result<()> {
        dst.blend_over(&self.fb, opacity)
    }
}

impl Surface for PixelSurface {
    fn create(width: u32, height: u32, config: &DitherConfig) -> Result<Self> {
        Ok(Self {
            fb: Framebuffer::new(width, height),
            glyph_px: config.font_size,
            color: config.color,
        })
    }

    fn width(&self) -> u32 {
        self.fb.width()
    }

    fn height(&self) -> u32 {
        self.fb.height()
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.fb.resize(width, height);
    }

    fn clear(&mut self, color: Rgba) {
        self.fb.clear(color);
    }

    fn draw_glyph(&mut self, ch: char, x: f32, y: f32) {
        let Some(rows) = font::glyph(ch) else {
            return;
        };

        let base_x = x.round().max(0.0) as u32;
        let base_y = y.round().max(0.0) as u32;

        // Nearest-neighbour scale of the 8x8 cell to glyph_px. Each atlas
        // pixel maps to the rect [gx*s/8, (gx+1)*s/8); sub-cell sizes can
        // collapse a pixel to zero width, which fill_rect drops.
        for (gy, row) in rows.iter().enumerate() {
            if *row == 0 {
                continue;
            }
            let y0 = base_y + (gy as u32 * self.glyph_px) / GLYPH_SIZE;
            let y1 = base_y + ((gy as u32 + 1) * self.glyph_px) / GLYPH_SIZE;
            for gx in 0..GLYPH_SIZE {
                if (*row >> gx) & 1 == 0 {
                    continue;
                }
                let x0 = base_x + (gx * self.glyph_px) / GLYPH_SIZE;
                let x1 = base_x + ((gx + 1) * self.glyph_px) / GLYPH_SIZE;
                self.fb.fill_rect(x0, y0, x1 - x0, y1 - y0, self.color);
            }
        }
    }
}

// ============================================================================
// Text surface
// ============================================================================

/// Character-cell surface: one cell per sample-grid step.
///
/// Glyphs snap to the nearest cell, so a pattern rendered with the same
/// spacing the surface was created with lands one glyph per cell.
#[derive(Debug, Clone)]
pub struct TextSurface {
    width: u32,
    height: u32,
    cell: f32,
    cols: usize,
    rows: usize,
    cells: Vec<char>,
}

impl TextSurface {
    /// Number of character columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of character rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Character at cell `(col, row)`, or `None` out of bounds.
    #[must_use]
    pub fn glyph_at(&self, col: usize, row: usize) -> Option<char> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Render the grid as text, one line per row.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity((self.cols + 1) * self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                out.push(self.cells[row * self.cols + col]);
            }
            out.push('\n');
        }
        out
    }

    fn grid_for(width: u32, height: u32, cell: f32) -> (usize, usize) {
        let cols = (width as f32 / cell).ceil() as usize;
        let rows = (height as f32 / cell).ceil() as usize;
        (cols, rows)
    }
}

impl Surface for TextSurface {
    fn create(width: u32, height: u32, config: &DitherConfig) -> Result<Self> {
        let cell = config.spacing;
        let (cols, rows) = Self::grid_for(width, height, cell);
        Ok(Self {
            width,
            height,
            cell,
            cols,
            rows,
            cells: vec![' '; cols * rows],
        })
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        let (cols, rows) = Self::grid_for(width, height, self.cell);
        self.cols = cols;
        self.rows = rows;
        self.cells.clear();
        self.cells.resize(cols * rows, ' ');
    }

    fn clear(&mut self, _color: Rgba) {
        self.cells.fill(' ');
    }

    fn draw_glyph(&mut self, ch: char, x: f32, y: f32) {
        if self.cols == 0 || self.rows == 0 {
            return;
        }
        let col = ((x / self.cell).round() as usize).min(self.cols - 1);
        let row = ((y / self.cell).round() as usize).min(self.rows - 1);
        self.cells[row * self.cols + col] = ch;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DitherConfig {
        DitherConfig::default()
    }

    #[test]
    fn test_pixel_surface_draws_glyph_pixels() {
        let mut surface = PixelSurface::create(32, 32, &config()).unwrap();
        surface.clear(Rgba::WHITE);
        surface.draw_glyph('@', 4.0, 4.0);

        // font_size == atlas size, so atlas pixels map 1:1
        let mut dark = 0;
        for y in 0..32 {
            for x in 0..32 {
                if surface.framebuffer().get_pixel(x, y) == Some(Rgba::BLACK) {
                    dark += 1;
                }
            }
        }
        assert_eq!(dark, crate::font::density('@'));
    }

    #[test]
    fn test_pixel_surface_unknown_glyph_is_noop() {
        let mut surface = PixelSurface::create(16, 16, &config()).unwrap();
        surface.clear(Rgba::WHITE);
        surface.draw_glyph('q', 0.0, 0.0);
        assert_eq!(surface.framebuffer().get_pixel(0, 0), Some(Rgba::WHITE));
    }

    #[test]
    fn test_pixel_surface_clips_at_edges() {
        let mut surface = PixelSurface::create(10, 10, &config()).unwrap();
        surface.clear(Rgba::WHITE);
        // Glyph hangs past the right and bottom edges; must not panic
        surface.draw_glyph('@', 7.0, 7.0);
    }

    #[test]
    fn test_pixel_surface_resize() {
        let mut surface = PixelSurface::create(10, 10, &config()).unwrap();
        surface.resize(20, 5);
        assert_eq!(surface.width(), 20);
        assert_eq!(surface.height(), 5);
    }

    #[test]
    fn test_composite_over_applies_opacity() {
        let mut overlay = PixelSurface::create(4, 4, &config()).unwrap();
        overlay.clear(Rgba::BLACK);

        let mut page = Framebuffer::new(4, 4);
        page.clear(Rgba::WHITE);
        overlay.composite_over(&mut page, 0.5).unwrap();

        let px = page.get_pixel(0, 0).unwrap();
        assert!(px.r > 100 && px.r < 155, "expected mid gray, got {px:?}");
    }

    #[test]
    fn test_text_surface_grid_shape() {
        let surface = TextSurface::create(100, 100, &config()).unwrap();
        // ceil(100 / 7.5) == 14
        assert_eq!(surface.cols(), 14);
        assert_eq!(surface.rows(), 14);
    }

    #[test]
    fn test_text_surface_draw_and_clear() {
        let mut surface = TextSurface::create(100, 100, &config()).unwrap();
        surface.draw_glyph('@', 15.0, 7.5);
        assert_eq!(surface.glyph_at(2, 1), Some('@'));

        surface.clear(Rgba::WHITE);
        assert_eq!(surface.glyph_at(2, 1), Some(' '));
    }

    #[test]
    fn test_text_surface_zero_size() {
        let mut surface = TextSurface::create(0, 0, &config()).unwrap();
        assert_eq!(surface.cols(), 0);
        surface.draw_glyph('@', 0.0, 0.0);
        assert!(surface.to_text().is_empty());
    }

    #[test]
    fn test_text_surface_to_text_lines() {
        let surface = TextSurface::create(15, 15, &config()).unwrap();
        let text = surface.to_text();
        assert_eq!(text.lines().count(), surface.rows());
    }
}
