//! Seven-segment glyph patterns for the strip display.
//!
//! Patterns are `u8` bitmasks positionally aligned with the segment geometry
//! lists in [`crate::layout`]: bit `i` is slot `i` of a position's segment
//! list. The slot order follows the strip wiring, not the classic ABCDEFG
//! convention:
//!
//! ```text
//!            2
//!         -------
//!         |     |
//!     3   |     |  1
//!         -------
//!         |  7  |
//!     4   |     |  6
//!         -------
//!            5
//! ```
//!
//! Displaying a `1` lights slots 1 and 6; an `8` lights all seven.

use core::array;

/// Number of segment slots per digit position.
pub const SLOT_COUNT: usize = 7;

/// Glyph pattern constants and lookup.
pub struct Glyphs;

impl Glyphs {
    /// Slot 1: right-top.
    pub const SLOT_1: u8 = 0b_0000_0001;
    /// Slot 2: top.
    pub const SLOT_2: u8 = 0b_0000_0010;
    /// Slot 3: left-top.
    pub const SLOT_3: u8 = 0b_0000_0100;
    /// Slot 4: left-bottom.
    pub const SLOT_4: u8 = 0b_0000_1000;
    /// Slot 5: bottom.
    pub const SLOT_5: u8 = 0b_0001_0000;
    /// Slot 6: right-bottom.
    pub const SLOT_6: u8 = 0b_0010_0000;
    /// Slot 7: middle.
    pub const SLOT_7: u8 = 0b_0100_0000;

    /// Patterns for the digits 0-9, indexed by value.
    pub const DIGITS: [u8; 10] = [
        0b_0011_1111, // 0
        0b_0010_0001, // 1
        0b_0101_1011, // 2
        0b_0111_0011, // 3
        0b_0110_0101, // 4
        0b_0111_0110, // 5
        0b_0111_1110, // 6
        0b_0010_0011, // 7
        0b_0111_1111, // 8
        0b_0111_0111, // 9
    ];

    /// Representation of a blank space.
    pub const SPACE: u8 = 0b_0000_0000;

    /// Look up the pattern for a character, `None` when the character has no
    /// seven-segment rendering.
    #[must_use]
    pub const fn glyph(ch: char) -> Option<u8> {
        let pattern = match ch {
            ' ' => Self::SPACE,

            '0' => Self::DIGITS[0],
            '1' => Self::DIGITS[1],
            '2' => Self::DIGITS[2],
            '3' => Self::DIGITS[3],
            '4' => Self::DIGITS[4],
            '5' => Self::DIGITS[5],
            '6' => Self::DIGITS[6],
            '7' => Self::DIGITS[7],
            '8' => Self::DIGITS[8],
            '9' => Self::DIGITS[9],

            'a' => 0b_0110_1111,
            'b' => 0b_0111_1100,
            'c' => 0b_0001_1110,
            'd' => 0b_0111_1001,
            'e' => 0b_0101_1110,
            'f' => 0b_0100_1110,
            'g' => 0b_0011_1110,
            'h' => 0b_0110_1101,
            'i' => 0b_0000_1100,
            'j' => 0b_0011_1001,
            'k' => 0b_0100_1100,
            'l' => 0b_0000_0000,
            'm' => 0b_0010_1111,
            'n' => 0b_0110_1000,
            'o' => 0b_0111_1000,
            'p' => 0b_0100_1111,
            'q' => 0b_0111_0111,
            'r' => 0b_0100_1000,
            's' => 0b_0111_0110,
            't' => 0b_0101_1100,
            'u' => 0b_0011_1000,
            'v' => 0b_0011_1101,
            'w' => 0b_0111_1101,
            'x' => 0b_0110_1101,
            'y' => 0b_0111_0101,
            'z' => 0b_0001_1011,

            '-' => Self::SLOT_7,
            '_' => Self::SLOT_5,
            '=' => 0b_0101_0000,
            '°' => 0b_0100_0111,
            '(' | '[' => 0b_0001_1110,
            ')' | '}' => 0b_0011_0011,
            '?' => 0b_0100_1011,
            '"' => 0b_0000_0101,
            '\'' => Self::SLOT_3,

            _ => return None,
        };
        Some(pattern)
    }
}

/// Expand a glyph pattern into its seven positional on/off flags.
#[inline]
#[must_use]
pub fn flag_iter(mut pattern: u8) -> array::IntoIter<bool, SLOT_COUNT> {
    let mut flags = [false; SLOT_COUNT];
    for flag in &mut flags {
        *flag = pattern & 1 == 1;
        pattern >>= 1;
    }
    flags.into_iter()
}
