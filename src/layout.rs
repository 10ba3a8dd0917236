//! Segment geometry: which physical segments compose each digit position.
//!
//! The strip snakes through four seven-segment digit positions plus a middle
//! "colon" segment used as the seconds indicator. Segment numbers are
//! 1-indexed; `0` marks a slot with no physical segment behind it.
//!
//! ```text
//!        --- HourTens     --- HourOnes       --- MinuteTens      --- MinuteOnes
//!        |                |                  |                   |
//!        v                v                  v                   v
//!
//!              7          6        5         4         3         2
//!          --------- --------- --------- --------- --------- ---------
//!         |         |         |         |         |         |         |
//!       8 |         |23       |26       |27       |30       |31       | 1
//!         |         |         |         |         |         |         |
//!          --------- --------- --------- --------- --------- ---------
//!         |    22   |    21   |    20   |    19   |    18   |    17   |
//!       9 |         |24       |25       |28       |29       |32       | 16
//!         |         |         |         |         |         |         |
//!          --------- --------- --------- --------- --------- ---------
//!             10         11        12        13        14        15
//! ```
//!
//! The hour-tens position has only its two right-hand verticals (8 and 9), so
//! it can show nothing but blank or a `1`.

use crate::glyphs::SLOT_COUNT;

/// Number of digit positions on the display.
pub const DIGIT_COUNT: usize = 4;

/// Sentinel segment number: "no physical segment at this slot".
pub const NO_SEGMENT: usize = 0;

/// One of the four display slots, hour-tens through minute-ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitPosition {
    /// Leading position; physically only two segments, shows blank or `1`.
    HourTens,
    HourOnes,
    MinuteTens,
    MinuteOnes,
}

impl DigitPosition {
    /// All positions in render order.
    pub const ALL: [Self; DIGIT_COUNT] = [
        Self::HourTens,
        Self::HourOnes,
        Self::MinuteTens,
        Self::MinuteOnes,
    ];

    /// The ordered segment numbers composing this position, one per glyph
    /// slot. Entries of [`NO_SEGMENT`] have no physical segment.
    #[must_use]
    pub const fn segments(self) -> [usize; SLOT_COUNT] {
        match self {
            Self::HourTens => [8, 0, 0, 0, 0, 9, 0],
            Self::HourOnes => [26, 6, 23, 24, 11, 25, 21],
            Self::MinuteTens => [30, 4, 27, 28, 13, 29, 19],
            Self::MinuteOnes => [1, 2, 31, 32, 15, 16, 17],
        }
    }
}
