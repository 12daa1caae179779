//! # ascii-dither
//!
//! Headless radial ASCII dithering overlays for 2D surfaces.
//!
//! Paints a static dithering pattern — a radial brightness gradient
//! approximated by increasingly dense ASCII glyphs toward the center —
//! onto a drawing surface, either viewport-wide or scoped to a single
//! element. The renderer and lifecycle layer see the host through small
//! capability traits, so everything runs and tests without a real
//! rendering environment.
//!
//! ## Quick Start
//!
//! ```rust
//! use ascii_dither::config::DitherConfig;
//! use ascii_dither::host::SimpleDocument;
//! use ascii_dither::registry::{OverlayRegistry, VIEWPORT_KEY};
//! use ascii_dither::surface::PixelSurface;
//!
//! let doc = SimpleDocument::new(800, 600);
//! let mut registry: OverlayRegistry<PixelSurface> = OverlayRegistry::new();
//!
//! registry.attach_viewport(&doc, DitherConfig::default())?;
//!
//! // Host resize: re-measure and redraw every live overlay
//! doc.viewport_container().set_size(1024, 768);
//! registry.dispatch_resize();
//!
//! // Runtime controls
//! if let Some(overlay) = registry.get_mut(VIEWPORT_KEY) {
//!     overlay.set_opacity(0.5);
//!     overlay.toggle();
//! }
//! registry.remove(VIEWPORT_KEY);
//! # Ok::<(), ascii_dither::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `wasm`: WebAssembly bindings returning the pattern as PNG bytes

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types for glyph and background fills.
pub mod color;

/// Overlay configuration.
pub mod config;

/// Bitmap glyph atlas for the ramp characters.
pub mod font;

/// RGBA pixel buffer backing the pixel surface.
pub mod framebuffer;

/// The radial dithering renderer.
pub mod pattern;

// ============================================================================
// Surface & Lifecycle Modules
// ============================================================================

/// Drawing surface capability trait and built-in targets.
pub mod surface;

/// Host environment capabilities (containers, document, ready state).
pub mod host;

/// A single live overlay instance.
pub mod overlay;

/// Overlay registry and identity keys.
pub mod registry;

// ============================================================================
// Output Modules
// ============================================================================

/// Output encoders (PNG).
pub mod output;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for ascii-dither operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use ascii_dither::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::{DitherConfig, DEFAULT_RAMP, INTENSITY_THRESHOLD};
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::host::{Container, Document, FixedContainer, ReadyState, SimpleDocument};
    pub use crate::output::PngEncoder;
    pub use crate::overlay::{Overlay, Target};
    pub use crate::registry::{element_key, OverlayRegistry, VIEWPORT_KEY};
    pub use crate::surface::{PixelSurface, Surface, TextSurface};
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
