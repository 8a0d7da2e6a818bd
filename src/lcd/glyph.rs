//! Fixed 8x8 bitmap font.
//!
//! Only the characters a clock face needs are defined. Lookups for anything
//! else return `None`, and rendering falls back to [`Glyph::BLANK`].

/// Glyph cell width and height in pixels.
pub const GLYPH_SIZE: usize = 8;

/// An 8x8 monochrome bitmap, one byte per row, MSB = leftmost column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph(pub [u8; GLYPH_SIZE]);

impl Glyph {
    /// Every pixel in background color.
    pub const BLANK: Glyph = Glyph([0; GLYPH_SIZE]);

    /// Returns the row bitmaps, top to bottom.
    #[inline]
    pub const fn rows(&self) -> &[u8; GLYPH_SIZE] {
        &self.0
    }

    /// Returns true if the pixel at (`col`, `row`) is in the foreground.
    ///
    /// Positions outside the 8x8 cell are never set.
    #[inline]
    pub fn is_set(&self, col: usize, row: usize) -> bool {
        col < GLYPH_SIZE && row < GLYPH_SIZE && self.0[row] & (0x80 >> col) != 0
    }

    /// Looks up the glyph for `ch`, if the font defines one.
    ///
    /// # Examples
    ///
    /// ```
    /// use spi_lcd_clock::lcd::Glyph;
    ///
    /// assert!(Glyph::lookup('7').is_some());
    /// assert!(Glyph::lookup('a').is_none());
    /// ```
    pub fn lookup(ch: char) -> Option<&'static Glyph> {
        let glyph = match ch {
            'H' => &H,
            'E' => &E,
            'L' => &L,
            'O' => &O,
            ' ' => &BLANK,
            'W' => &W,
            'R' => &R,
            'D' => &D,
            '*' => &STAR,
            '-' => &MINUS,
            '0' => &DIGITS[0],
            '1' => &DIGITS[1],
            '2' => &DIGITS[2],
            '3' => &DIGITS[3],
            '4' => &DIGITS[4],
            '5' => &DIGITS[5],
            '6' => &DIGITS[6],
            '7' => &DIGITS[7],
            '8' => &DIGITS[8],
            '9' => &DIGITS[9],
            'X' => &X,
            'Y' => &Y,
            '+' => &PLUS,
            ':' => &COLON,
            'S' => &S,
            _ => return None,
        };
        Some(glyph)
    }

    /// Like [`lookup`](Self::lookup), but unsupported characters yield [`Glyph::BLANK`].
    #[inline]
    pub fn for_char(ch: char) -> &'static Glyph {
        Self::lookup(ch).unwrap_or(&BLANK)
    }
}

static BLANK: Glyph = Glyph::BLANK;

/// Every character the font defines, in no particular order.
pub const SUPPORTED_CHARS: &str = "0123456789DEHLORSWXY :+-*";

static H: Glyph = Glyph([0b10000010, 0b10000010, 0b10000010, 0b11111110, 0b10000010, 0b10000010, 0b10000010, 0b00000000]);
static E: Glyph = Glyph([0b11111110, 0b10000000, 0b10000000, 0b11111110, 0b10000000, 0b10000000, 0b11111110, 0b00000000]);
static L: Glyph = Glyph([0b10000000, 0b10000000, 0b10000000, 0b10000000, 0b10000000, 0b10000000, 0b11111110, 0b00000000]);
static O: Glyph = Glyph([0b01111100, 0b10000010, 0b10000010, 0b10000010, 0b10000010, 0b10000010, 0b01111100, 0b00000000]);
static W: Glyph = Glyph([0b10000010, 0b10000010, 0b10000010, 0b10000010, 0b10010010, 0b10101010, 0b11000110, 0b00000000]);
static R: Glyph = Glyph([0b11111100, 0b10000010, 0b10000010, 0b11111100, 0b10001000, 0b10000100, 0b10000010, 0b00000000]);
static D: Glyph = Glyph([0b11111100, 0b10000010, 0b10000010, 0b10000010, 0b10000010, 0b10000010, 0b11111100, 0b00000000]);
static S: Glyph = Glyph([0b00111100, 0b01000010, 0b10000000, 0b01111100, 0b00000010, 0b10000010, 0b01111100, 0b00000000]);
static X: Glyph = Glyph([0b10000010, 0b01000100, 0b00101000, 0b00010000, 0b00101000, 0b01000100, 0b10000010, 0b00000000]);
static Y: Glyph = Glyph([0b10000010, 0b01000100, 0b00101000, 0b00010000, 0b00010000, 0b00010000, 0b00010000, 0b00000000]);
static STAR: Glyph = Glyph([0b00001000, 0b00000100, 0b11100010, 0b00000010, 0b11100010, 0b00000100, 0b00001000, 0b00000000]);
static MINUS: Glyph = Glyph([0b00000000, 0b00000000, 0b00000000, 0b01111100, 0b00000000, 0b00000000, 0b00000000, 0b00000000]);
static PLUS: Glyph = Glyph([0b00010000, 0b00010000, 0b00010000, 0b11111110, 0b00010000, 0b00010000, 0b00010000, 0b00000000]);
static COLON: Glyph = Glyph([0b00000000, 0b00000000, 0b00010000, 0b00000000, 0b00010000, 0b00000000, 0b00000000, 0b00000000]);

static DIGITS: [Glyph; 10] = [
    Glyph([0b01111100, 0b10000110, 0b10001010, 0b10010010, 0b10100010, 0b11000010, 0b01111100, 0b00000000]),
    Glyph([0b00010000, 0b00110000, 0b01010000, 0b00010000, 0b00010000, 0b00010000, 0b01111100, 0b00000000]),
    Glyph([0b01111100, 0b10000010, 0b00000010, 0b00011100, 0b01100000, 0b10000000, 0b11111110, 0b00000000]),
    Glyph([0b11111110, 0b00000010, 0b00000100, 0b00011100, 0b00000010, 0b10000010, 0b01111100, 0b00000000]),
    Glyph([0b00001100, 0b00110100, 0b01000100, 0b10000100, 0b11111110, 0b00000100, 0b00000100, 0b00000000]),
    Glyph([0b11111110, 0b10000000, 0b11111100, 0b00000010, 0b00000010, 0b10000010, 0b01111100, 0b00000000]),
    Glyph([0b00111100, 0b01000000, 0b10000000, 0b11111100, 0b10000010, 0b10000010, 0b01111100, 0b00000000]),
    Glyph([0b11111110, 0b00000010, 0b00000100, 0b00001000, 0b00010000, 0b00100000, 0b01000000, 0b00000000]),
    Glyph([0b01111100, 0b10000010, 0b10000010, 0b01111100, 0b10000010, 0b10000010, 0b01111100, 0b00000000]),
    Glyph([0b01111100, 0b10000010, 0b10000010, 0b01111110, 0b00000010, 0b00000100, 0b01111000, 0b00000000]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_supported_char_resolves() {
        for ch in SUPPORTED_CHARS.chars() {
            assert!(Glyph::lookup(ch).is_some(), "missing glyph for {ch:?}");
        }
    }

    #[test]
    fn unsupported_chars_fall_back_to_blank() {
        for ch in ['a', 'z', 'A', 'Q', '!', '\n', '\u{e9}', '\u{1F682}'] {
            assert!(Glyph::lookup(ch).is_none());
            assert_eq!(*Glyph::for_char(ch), Glyph::BLANK);
        }
    }

    #[test]
    fn space_is_blank() {
        assert_eq!(Glyph::lookup(' '), Some(&Glyph::BLANK));
    }

    #[test]
    fn h_top_row_bits() {
        let h = Glyph::for_char('H');
        let row0: [bool; 8] = core::array::from_fn(|col| h.is_set(col, 0));
        assert_eq!(row0, [true, false, false, false, false, false, true, false]);
    }

    #[test]
    fn bottom_row_is_empty_for_all_glyphs() {
        for ch in SUPPORTED_CHARS.chars() {
            assert_eq!(Glyph::for_char(ch).rows()[7], 0, "{ch:?}");
        }
    }

    #[test]
    fn out_of_cell_positions_are_clear() {
        let full = Glyph([0xFF; GLYPH_SIZE]);
        assert!(full.is_set(7, 7));
        assert!(!full.is_set(8, 0));
        assert!(!full.is_set(0, 8));
    }

    #[test]
    fn digits_are_distinct() {
        for a in '0'..='9' {
            for b in '0'..='9' {
                if a != b {
                    assert_ne!(Glyph::for_char(a), Glyph::for_char(b));
                }
            }
        }
    }
}
