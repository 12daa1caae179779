//! WebAssembly bindings for ascii-dither.
//!
//! Exposes the pattern renderer to JavaScript as PNG bytes, so a page can
//! drop the overlay into an `<img>` or canvas without shipping any
//! JavaScript rendering code of its own.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { DitherOptions, dither_pattern } from 'ascii-dither';
//!
//! await init();
//!
//! const png = dither_pattern(
//!     new DitherOptions().width(1280).height(720).color('#000000')
//! );
//! const blob = new Blob([png], { type: 'image/png' });
//! document.getElementById('bg').src = URL.createObjectURL(blob);
//! ```

use wasm_bindgen::prelude::*;

use crate::color::Rgba;
use crate::config::DitherConfig;
use crate::output::PngEncoder;
use crate::pattern;
use crate::surface::{PixelSurface, Surface};

/// Initialize the WASM module.
///
/// Call this before using any other functions.
#[wasm_bindgen(start)]
pub fn init() {
    // WASM module initialized
}

/// Options for pattern rendering.
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DitherOptions {
    width: u32,
    height: u32,
    color: String,
    font_size: u32,
    spacing: f32,
}

#[wasm_bindgen]
impl DitherOptions {
    /// Create default options: an 800x600 pattern with the stock ramp.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: 800,
            height: 600,
            color: "#000000".to_string(),
            font_size: 8,
            spacing: 7.5,
        }
    }

    /// Set surface width in pixels.
    #[wasm_bindgen]
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Set surface height in pixels.
    #[wasm_bindgen]
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Set the glyph color (hex format: #RRGGBB).
    #[wasm_bindgen]
    #[must_use]
    pub fn color(mut self, color: &str) -> Self {
        self.color = color.to_string();
        self
    }

    /// Set the glyph size in pixels.
    #[wasm_bindgen]
    #[must_use]
    pub fn font_size(mut self, px: u32) -> Self {
        self.font_size = px;
        self
    }

    /// Set the sample-grid spacing in pixels.
    #[wasm_bindgen]
    #[must_use]
    pub fn spacing(mut self, px: f32) -> Self {
        self.spacing = px;
        self
    }
}

impl Default for DitherOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Render the dithering pattern and return it as PNG bytes.
///
/// # Errors
///
/// Returns a JS error string if the color fails to parse or PNG encoding
/// fails.
#[wasm_bindgen]
pub fn dither_pattern(options: &DitherOptions) -> Result<Vec<u8>, JsValue> {
    let color =
        Rgba::from_hex(&options.color).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let config = DitherConfig::new()
        .color(color)
        .font_size(options.font_size)
        .spacing(options.spacing);

    let mut surface = PixelSurface::create(options.width, options.height, &config)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    pattern::render(&mut surface, &config);

    PngEncoder::to_bytes(surface.framebuffer()).map_err(|e| JsValue::from_str(&e.to_string()))
}
