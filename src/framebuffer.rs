//! RGBA pixel buffer backing the pixel surface.
//!
//! Rows are padded to a 64-byte stride so clears and compositing can run
//! over SIMD-friendly chunks; `blend_over` uses trueno for the blend math.
//! Zero-dimension buffers are valid: a surface may be sized to an empty
//! container and is simply left blank.

use crate::color::Rgba;
use crate::error::{Error, Result};
use trueno::Vector;

/// Row alignment in bytes (64 bytes = 16 RGBA pixels, AVX-512 width).
const SIMD_ALIGNMENT: usize = 64;

/// SIMD-aligned RGBA framebuffer.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order, 4 bytes per pixel.
    pixels: Vec<u8>,
    /// Row stride in bytes, including alignment padding.
    stride: usize,
}

impl Framebuffer {
    /// Create a framebuffer with the given dimensions.
    ///
    /// Either dimension may be zero, yielding an empty buffer.
    ///
    /// # Example
    ///
    /// ```
    /// use ascii_dither::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600);
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let stride = Self::stride_for(width);
        let pixels = vec![0u8; stride * height as usize];
        Self { width, height, pixels, stride }
    }

    /// Reassign the buffer's dimensions, discarding prior contents.
    ///
    /// Pixels come back zeroed; callers redraw immediately after.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.stride = Self::stride_for(width);
        self.pixels.clear();
        self.pixels.resize(self.stride * height as usize, 0);
    }

    fn stride_for(width: u32) -> usize {
        let row_bytes = (width as usize) * 4;
        (row_bytes + SIMD_ALIGNMENT - 1) & !(SIMD_ALIGNMENT - 1)
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row stride in bytes, including alignment padding.
    #[must_use]
    pub const fn stride(&self) -> usize {
        self.stride
    }

    /// Raw pixel data, including stride padding.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// One row of pixels, without the stride padding.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = (y as usize) * self.stride;
        Some(&self.pixels[start..start + (self.width as usize) * 4])
    }

    /// Clear the whole buffer to a solid color.
    ///
    /// Writes a 16-pixel pattern in 64-byte chunks so the copy vectorizes.
    pub fn clear(&mut self, color: Rgba) {
        let [r, g, b, a] = color.to_array();

        let pattern: [u8; 64] = {
            let mut p = [0u8; 64];
            for i in 0..16 {
                p[i * 4] = r;
                p[i * 4 + 1] = g;
                p[i * 4 + 2] = b;
                p[i * 4 + 3] = a;
            }
            p
        };

        for y in 0..self.height {
            let row_start = (y as usize) * self.stride;
            let row_end = row_start + (self.width as usize) * 4;
            let row = &mut self.pixels[row_start..row_end];

            let mut offset = 0;
            while offset + 64 <= row.len() {
                row[offset..offset + 64].copy_from_slice(&pattern);
                offset += 64;
            }
            for chunk in row[offset..].chunks_exact_mut(4) {
                chunk.copy_from_slice(&[r, g, b, a]);
            }
        }
    }

    /// Fill a rectangle with a solid color, clamped to the buffer bounds.
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x1 = x.min(self.width);
        let y1 = y.min(self.height);
        let x2 = x.saturating_add(w).min(self.width);
        let y2 = y.saturating_add(h).min(self.height);

        if x1 >= x2 || y1 >= y2 {
            return;
        }

        let [r, g, b, a] = color.to_array();
        let rect_width = (x2 - x1) as usize;

        for row_y in y1..y2 {
            let row_start = (row_y as usize) * self.stride + (x1 as usize) * 4;
            let row = &mut self.pixels[row_start..row_start + rect_width * 4];
            for chunk in row.chunks_exact_mut(4) {
                chunk.copy_from_slice(&[r, g, b, a]);
            }
        }
    }

    /// Color at a pixel coordinate, or `None` out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set a pixel; out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = self.pixel_index(x, y);
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
    }

    /// Blend another framebuffer over this one with a uniform opacity.
    ///
    /// `out = src * alpha + dst * (1 - alpha)`, computed per channel with
    /// trueno's SIMD vector operations, one row at a time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the buffers differ in size.
    pub fn blend_over(&mut self, src: &Framebuffer, alpha: f32) -> Result<()> {
        if self.width != src.width || self.height != src.height {
            return Err(Error::InvalidDimensions {
                width: src.width,
                height: src.height,
            });
        }

        let alpha = alpha.clamp(0.0, 1.0);
        let inv_alpha = 1.0 - alpha;

        for y in 0..self.height {
            let row_start = (y as usize) * self.stride;
            let row_bytes = (self.width as usize) * 4;
            if row_bytes == 0 {
                continue;
            }

            let dst_f32: Vec<f32> = self.pixels[row_start..row_start + row_bytes]
                .iter()
                .map(|&v| f32::from(v))
                .collect();
            let src_f32: Vec<f32> = src.pixels[row_start..row_start + row_bytes]
                .iter()
                .map(|&v| f32::from(v))
                .collect();

            let dst_vec = Vector::from_vec(dst_f32);
            let src_vec = Vector::from_vec(src_f32);

            if let (Ok(src_scaled), Ok(dst_scaled)) = (
                src_vec.mul(&Vector::from_vec(vec![alpha; row_bytes])),
                dst_vec.mul(&Vector::from_vec(vec![inv_alpha; row_bytes])),
            ) {
                if let Ok(result) = src_scaled.add(&dst_scaled) {
                    let row = &mut self.pixels[row_start..row_start + row_bytes];
                    for (i, &v) in result.as_slice().iter().enumerate() {
                        row[i] = v.clamp(0.0, 255.0) as u8;
                    }
                }
            }
        }

        Ok(())
    }

    /// Pixel data without stride padding, for encoders that expect tightly
    /// packed rows.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        let row_bytes = (self.width as usize) * 4;
        if self.stride == row_bytes {
            return self.pixels[..row_bytes * (self.height as usize)].to_vec();
        }

        let mut compact = Vec::with_capacity(row_bytes * (self.height as usize));
        for y in 0..self.height {
            let start = (y as usize) * self.stride;
            compact.extend_from_slice(&self.pixels[start..start + row_bytes]);
        }
        compact
    }

    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * self.stride + (x as usize) * 4
    }
}
