//! Error types for ascii-dither operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ascii-dither operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Dimension mismatch between two surfaces being composited.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// An overlay already exists for the given identity key.
    #[error("Overlay already exists for key '{key}'")]
    DuplicateOverlay {
        /// Identity key of the existing overlay.
        key: String,
    },

    /// Element-scoped attach found no matching container.
    #[error("Target element '{selector}' not found")]
    TargetNotFound {
        /// The selector that matched nothing.
        selector: String,
    },
}
