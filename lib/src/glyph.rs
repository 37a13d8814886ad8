//! 8x8 bitmap glyphs for the ramp characters
//!
//! The PNG exporter draws text without a font rasterizer. Each row below is
//! one byte, most significant bit on the left.

/// Native glyph size in pixels
pub const GLYPH_SIZE: u32 = 8;

type Bitmap = [u8; 8];

const AT: Bitmap = [0x3C, 0x42, 0x9A, 0xAA, 0xBC, 0x80, 0x7C, 0x00];
const PERCENT: Bitmap = [0xC2, 0xC4, 0x08, 0x10, 0x20, 0x46, 0x86, 0x00];
const HASH: Bitmap = [0x24, 0x24, 0x7E, 0x24, 0x7E, 0x24, 0x24, 0x00];
const STAR: Bitmap = [0x00, 0x54, 0x38, 0x7C, 0x38, 0x54, 0x00, 0x00];
const PLUS: Bitmap = [0x00, 0x10, 0x10, 0x7C, 0x10, 0x10, 0x00, 0x00];
const EQUALS: Bitmap = [0x00, 0x00, 0x7C, 0x00, 0x7C, 0x00, 0x00, 0x00];
const MINUS: Bitmap = [0x00, 0x00, 0x00, 0x7C, 0x00, 0x00, 0x00, 0x00];
const COLON: Bitmap = [0x00, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x00];
const PERIOD: Bitmap = [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00];
const BLANK: Bitmap = [0x00; 8];
const BOX: Bitmap = [0x00, 0x7E, 0x42, 0x42, 0x42, 0x42, 0x7E, 0x00];

fn bitmap(ch: char) -> &'static Bitmap {
    match ch {
        '@' => &AT,
        '%' => &PERCENT,
        '#' => &HASH,
        '*' => &STAR,
        '+' => &PLUS,
        '=' => &EQUALS,
        '-' => &MINUS,
        ':' => &COLON,
        '.' => &PERIOD,
        ' ' | '\u{00A0}' => &BLANK,
        // Anything outside the ramp draws as an outlined box
        _ => &BOX,
    }
}

/// Whether the glyph for `ch` covers pixel (x, y) of its 8x8 cell
pub fn covers(ch: char, x: u32, y: u32) -> bool {
    if x >= GLYPH_SIZE || y >= GLYPH_SIZE {
        return false;
    }
    bitmap(ch)[y as usize] & (0x80 >> x) != 0
}

/// Like [`covers`], for a cell of `size` x `size` pixels
///
/// Uses nearest-neighbour scaling of the 8x8 bitmap.
pub fn covers_scaled(ch: char, x: u32, y: u32, size: u32) -> bool {
    if size == 0 || x >= size || y >= size {
        return false;
    }
    covers(ch, x * GLYPH_SIZE / size, y * GLYPH_SIZE / size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lut::RAMP;

    fn ink(ch: char) -> usize {
        (0..GLYPH_SIZE)
            .flat_map(|y| (0..GLYPH_SIZE).map(move |x| (x, y)))
            .filter(|&(x, y)| covers(ch, x, y))
            .count()
    }

    #[test]
    fn test_space_is_blank() {
        assert_eq!(ink(' '), 0);
        assert_eq!(ink('\u{00A0}'), 0);
    }

    #[test]
    fn test_every_dark_ramp_char_has_ink() {
        for &ch in RAMP.iter().filter(|&&c| c != ' ') {
            assert!(ink(ch) > 0, "glyph for {ch:?} is empty");
        }
    }

    #[test]
    fn test_minus_is_horizontal() {
        assert!(covers('-', 1, 3));
        assert!(covers('-', 5, 3));
        assert!(!covers('-', 3, 2));
    }

    #[test]
    fn test_out_of_cell() {
        assert!(!covers('@', 8, 0));
        assert!(!covers('@', 0, 8));
    }

    #[test]
    fn test_scaled_matches_native_at_size_8() {
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(covers_scaled('#', x, y, 8), covers('#', x, y));
            }
        }
    }

    #[test]
    fn test_scaled_doubles() {
        // '.' covers (3..=4, 5..=6) natively
        assert!(covers_scaled('.', 6, 10, 16));
        assert!(covers_scaled('.', 9, 13, 16));
        assert!(!covers_scaled('.', 5, 10, 16));
    }
}
