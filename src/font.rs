//! Bitmap glyph atlas for the ramp characters.
//!
//! Each glyph is an 8x8 bitmap stored as one row mask per scanline, with
//! bit `x` set when column `x` (left to right) is filled. The atlas covers
//! the characters used by the built-in ramps; anything else samples as
//! empty, which the raster pass treats as "draw nothing".

/// Glyph cell width and height in atlas pixels.
pub const GLYPH_SIZE: u32 = 8;

/// Row masks for one glyph, top scanline first.
pub type GlyphRows = [u8; 8];

/// Characters the atlas has bitmaps for, in codepoint order.
const ATLAS_CHARS: &str = " #%*+-.:;=@";

// One entry per ATLAS_CHARS character.
const ATLAS_ROWS: [GlyphRows; 11] = [
    // ' '
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
    // '#'
    [0x24, 0x7E, 0x24, 0x24, 0x24, 0x7E, 0x24, 0x00],
    // '%'
    [0x46, 0x26, 0x10, 0x08, 0x64, 0x62, 0x00, 0x00],
    // '*'
    [0x00, 0x18, 0x5A, 0x3C, 0x3C, 0x5A, 0x18, 0x00],
    // '+'
    [0x00, 0x00, 0x18, 0x7E, 0x7E, 0x18, 0x00, 0x00],
    // '-'
    [0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00],
    // '.'
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00],
    // ':'
    [0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x00],
    // ';'
    [0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x08],
    // '='
    [0x00, 0x00, 0x7E, 0x00, 0x7E, 0x00, 0x00, 0x00],
    // '@'
    [0x3E, 0x63, 0x7B, 0x7B, 0x7B, 0x03, 0x1E, 0x00],
];

/// Look up the row masks for a character.
///
/// Returns `None` for characters outside the atlas.
#[must_use]
pub fn glyph(ch: char) -> Option<&'static GlyphRows> {
    ATLAS_CHARS.find(ch).map(|idx| &ATLAS_ROWS[idx])
}

/// Test whether atlas pixel `(x, y)` of a glyph is filled.
///
/// Out-of-atlas characters and out-of-cell coordinates sample as empty.
#[must_use]
pub fn sample(ch: char, x: u32, y: u32) -> bool {
    if x >= GLYPH_SIZE || y >= GLYPH_SIZE {
        return false;
    }
    match glyph(ch) {
        Some(rows) => (rows[y as usize] >> x) & 1 == 1,
        None => false,
    }
}

/// Number of filled pixels in a glyph's bitmap.
#[must_use]
pub fn density(ch: char) -> u32 {
    match glyph(ch) {
        Some(rows) => rows.iter().map(|row| row.count_ones()).sum(),
        None => 0,
    }
}

/// All atlas characters sorted by density, sparsest first.
///
/// Ties break on codepoint so the ordering is deterministic.
#[must_use]
pub fn density_ramp() -> Vec<char> {
    let mut ramp: Vec<char> = ATLAS_CHARS.chars().collect();
    ramp.sort_by_key(|&ch| (density(ch), ch));
    ramp
}
