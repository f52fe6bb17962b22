//! 8x8 glyph table
//!
//! The `font8x8` tables are row-major with the least significant bit as
//! the leftmost pixel. The SSD1306 takes one byte per column with bit 0
//! at the top of the page, so every glyph is transposed once when the
//! table is built.

use font8x8::legacy::{BASIC_LEGACY, CONTROL_LEGACY, LATIN_LEGACY};

/// Glyph width in columns (and height in rows)
pub const GLYPH_WIDTH: usize = 8;

/// One character as eight column bytes
pub type Glyph = [u8; GLYPH_WIDTH];

/// Code rendered for characters the table does not cover
pub const REPLACEMENT: u8 = b'?';

/// Glyphs for character codes 0-255
///
/// 0x00-0x7F ASCII, 0x80-0x9F C1 controls (blank), 0xA0-0xFF Latin-1.
pub struct GlyphTable {
    glyphs: [Glyph; 256],
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self::new()
    }
}

impl GlyphTable {
    /// Build the table from the font8x8 legacy sets
    pub fn new() -> Self {
        let mut glyphs = [[0u8; GLYPH_WIDTH]; 256];

        load(&mut glyphs, 0x00, &BASIC_LEGACY);
        load(&mut glyphs, 0x80, &CONTROL_LEGACY);
        load(&mut glyphs, 0xA0, &LATIN_LEGACY);

        Self { glyphs }
    }

    /// Column bitmap for a character code
    pub fn glyph(&self, code: u8) -> &Glyph {
        &self.glyphs[code as usize]
    }

    /// Table index for a character
    ///
    /// Code points up to U+00FF index the table directly.
    pub fn code_for(ch: char) -> u8 {
        u8::try_from(u32::from(ch)).unwrap_or(REPLACEMENT)
    }
}

fn load(glyphs: &mut [Glyph; 256], base: usize, set: &[[u8; 8]]) {
    for (i, rows) in set.iter().enumerate() {
        glyphs[base + i] = transpose(rows);
    }
}

/// Row-major (LSB left) to column-major (LSB top)
fn transpose(rows: &[u8; 8]) -> Glyph {
    let mut columns = [0u8; GLYPH_WIDTH];
    for (col, out) in columns.iter_mut().enumerate() {
        for (row, bits) in rows.iter().enumerate() {
            *out |= ((bits >> col) & 1) << row;
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_a_columns() {
        let table = GlyphTable::new();
        assert_eq!(
            table.glyph(b'A'),
            &[0x7C, 0x7E, 0x13, 0x13, 0x7E, 0x7C, 0x00, 0x00]
        );
    }

    #[test]
    fn test_blank_glyphs() {
        let table = GlyphTable::new();
        assert_eq!(table.glyph(b' '), &[0u8; 8]);
        assert_eq!(table.glyph(0x00), &[0u8; 8]);
        assert_eq!(table.glyph(0x85), &[0u8; 8]);
    }

    #[test]
    fn test_digits_are_drawn() {
        let table = GlyphTable::new();
        for code in b'0'..=b'9' {
            assert!(table.glyph(code).iter().any(|&c| c != 0), "digit {}", code);
        }
        assert!(table.glyph(b'%').iter().any(|&c| c != 0));
    }

    #[test]
    fn test_code_for() {
        assert_eq!(GlyphTable::code_for('M'), b'M');
        assert_eq!(GlyphTable::code_for('\u{00E9}'), 0xE9);
        assert_eq!(GlyphTable::code_for('\u{00FF}'), 0xFF);
        assert_eq!(GlyphTable::code_for('\u{263A}'), REPLACEMENT);
    }

    #[test]
    fn test_transpose_single_pixel() {
        // Top-left pixel
        let mut rows = [0u8; 8];
        rows[0] = 0x01;
        assert_eq!(transpose(&rows), [0x01, 0, 0, 0, 0, 0, 0, 0]);

        // Bottom-right pixel
        let mut rows = [0u8; 8];
        rows[7] = 0x80;
        assert_eq!(transpose(&rows), [0, 0, 0, 0, 0, 0, 0, 0x80]);
    }
}
