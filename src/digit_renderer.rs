//! Renders whole digit positions by combining segment geometry with the
//! glyph table.

use crate::error::{Error, Result};
use crate::glyphs::{Glyphs, flag_iter};
use crate::layout::{DigitPosition, NO_SEGMENT};
use crate::pixel_strip::{OFF, PixelStrip, Rgb};
use crate::segmented_strip::SegmentedStrip;

/// Paints characters onto digit positions of a [`SegmentedStrip`].
///
/// Every render touches all seven slots of a position (sentinel slots are
/// skipped) and ends in exactly one flush, so a digit changes on the physical
/// strip in a single visible step rather than segment by segment.
pub struct DigitRenderer<S> {
    strip: SegmentedStrip<S>,
}

impl<S: PixelStrip> DigitRenderer<S> {
    /// Wrap an addressed strip.
    pub const fn new(strip: SegmentedStrip<S>) -> Self {
        Self { strip }
    }

    /// Shared access to the underlying strip.
    pub const fn strip(&self) -> &SegmentedStrip<S> {
        &self.strip
    }

    /// Mutable access to the underlying strip.
    pub fn strip_mut(&mut self) -> &mut SegmentedStrip<S> {
        &mut self.strip
    }

    /// Turn off every physical segment of a position. One flush at the end.
    ///
    /// # Errors
    ///
    /// `InvalidSegment` when the position's geometry references a segment the
    /// strip does not have (a configuration error).
    pub fn clear_digit(&mut self, position: DigitPosition) -> Result<()> {
        for segment_num in position.segments() {
            if segment_num == NO_SEGMENT {
                continue;
            }
            self.strip.clear_segment(segment_num, false)?;
        }
        self.strip.flush();
        Ok(())
    }

    /// Render a character at a position: each physical slot is painted
    /// `color` where the glyph flag is on and the off color where it is not,
    /// then the whole position is flushed once.
    ///
    /// Writing the off slots too means a render fully replaces whatever
    /// character was there before; no separate clear is needed and repeating
    /// a render is idempotent.
    ///
    /// # Errors
    ///
    /// `UnknownGlyph` when the character has no table entry.
    /// `InvalidDigitForPosition` when the hour-tens position is asked for
    /// anything but its two renderable states, blank and `'1'`.
    pub fn show_char(&mut self, position: DigitPosition, glyph: char, color: Rgb) -> Result<()> {
        if matches!(position, DigitPosition::HourTens) && glyph != '1' && glyph != ' ' {
            return Err(Error::InvalidDigitForPosition { glyph });
        }
        let pattern = Glyphs::glyph(glyph).ok_or(Error::UnknownGlyph { glyph })?;

        for (flag, segment_num) in flag_iter(pattern).zip(position.segments()) {
            if segment_num == NO_SEGMENT {
                continue;
            }
            let slot_color = if flag { color } else { OFF };
            self.strip.set_segment_color(segment_num, slot_color, false)?;
        }
        self.strip.flush();
        Ok(())
    }
}
