//! 7-segment font table
//!
//! Segment layout and TM1637 bit assignment:
//!
//! ```text
//!    AAAAA
//!   F     B
//!   F     B
//!    GGGGG
//!   E     C
//!   E     C
//!    DDDDD   DP
//! ```
//!
//! Bit 0 is segment A through bit 6 for segment G; bit 7 is the decimal
//! point (wired to the colon on clock-style modules).

/// Segment A (top)
pub const SEG_A: u8 = 0b0000_0001;
/// Segment B (top right)
pub const SEG_B: u8 = 0b0000_0010;
/// Segment C (bottom right)
pub const SEG_C: u8 = 0b0000_0100;
/// Segment D (bottom)
pub const SEG_D: u8 = 0b0000_1000;
/// Segment E (bottom left)
pub const SEG_E: u8 = 0b0001_0000;
/// Segment F (top left)
pub const SEG_F: u8 = 0b0010_0000;
/// Segment G (middle)
pub const SEG_G: u8 = 0b0100_0000;
/// Decimal point
pub const SEG_DP: u8 = 0b1000_0000;

/// One character of a segment font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    /// ASCII code of the character
    pub ascii: u8,
    /// Segment mask in TM1637 bit order
    pub mask: u8,
}

impl Glyph {
    const fn new(ascii: u8, mask: u8) -> Self {
        Self { ascii, mask }
    }
}

/// Decimal digits plus the symbols and letters used for status text
pub static FONT_7SEG_DECNUMS: [Glyph; 30] = [
    Glyph::new(b'0', SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F),
    Glyph::new(b'1', SEG_B | SEG_C),
    Glyph::new(b'2', SEG_A | SEG_B | SEG_D | SEG_E | SEG_G),
    Glyph::new(b'3', SEG_A | SEG_B | SEG_C | SEG_D | SEG_G),
    Glyph::new(b'4', SEG_B | SEG_C | SEG_F | SEG_G),
    Glyph::new(b'5', SEG_A | SEG_C | SEG_D | SEG_F | SEG_G),
    Glyph::new(b'6', SEG_A | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G),
    Glyph::new(b'7', SEG_A | SEG_B | SEG_C),
    Glyph::new(b'8', SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G),
    Glyph::new(b'9', SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G),
    Glyph::new(b' ', 0),
    Glyph::new(b'-', SEG_G),
    Glyph::new(b'_', SEG_D),
    Glyph::new(b'=', SEG_D | SEG_G),
    // Degree sign
    Glyph::new(b'*', SEG_A | SEG_B | SEG_F | SEG_G),
    Glyph::new(b'A', SEG_A | SEG_B | SEG_C | SEG_E | SEG_F | SEG_G),
    Glyph::new(b'b', SEG_C | SEG_D | SEG_E | SEG_F | SEG_G),
    Glyph::new(b'C', SEG_A | SEG_D | SEG_E | SEG_F),
    Glyph::new(b'c', SEG_D | SEG_E | SEG_G),
    Glyph::new(b'd', SEG_B | SEG_C | SEG_D | SEG_E | SEG_G),
    Glyph::new(b'E', SEG_A | SEG_D | SEG_E | SEG_F | SEG_G),
    Glyph::new(b'F', SEG_A | SEG_E | SEG_F | SEG_G),
    Glyph::new(b'H', SEG_B | SEG_C | SEG_E | SEG_F | SEG_G),
    Glyph::new(b'L', SEG_D | SEG_E | SEG_F),
    Glyph::new(b'n', SEG_C | SEG_E | SEG_G),
    Glyph::new(b'o', SEG_C | SEG_D | SEG_E | SEG_G),
    Glyph::new(b'P', SEG_A | SEG_B | SEG_E | SEG_F | SEG_G),
    Glyph::new(b'r', SEG_E | SEG_G),
    Glyph::new(b't', SEG_D | SEG_E | SEG_F | SEG_G),
    Glyph::new(b'U', SEG_B | SEG_C | SEG_D | SEG_E | SEG_F),
];

/// Segment mask for `ch`, blank if the font has no glyph for it
pub fn lookup(font: &[Glyph], ch: char) -> u8 {
    if !ch.is_ascii() {
        return 0;
    }
    let ascii = ch as u8;
    font.iter()
        .find(|glyph| glyph.ascii == ascii)
        .map_or(0, |glyph| glyph.mask)
}
