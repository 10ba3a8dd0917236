//! The addressing layer: segment numbers to pixel ranges.

use crate::error::{Error, Result};
use crate::layout::NO_SEGMENT;
use crate::pixel_strip::{OFF, PixelStrip, Rgb};

/// A pixel strip carved into fixed-width logical segments.
///
/// Segments are 1-indexed: segment `s` covers the pixel range
/// `(s-1)*leds_per_segment .. s*leds_per_segment`. Segment number `0` is the
/// layout sentinel for "no segment here" and the painting primitives accept
/// it as a no-op, so geometry tables can be applied without special-casing.
///
/// Mutating operations stage pixels in the device buffer; nothing reaches the
/// physical strip until a flush (`flush: true`, [`clear`](Self::clear), or
/// [`flush`](Self::flush)).
pub struct SegmentedStrip<S> {
    device: S,
    num_segments: usize,
    leds_per_segment: usize,
}

impl<S: PixelStrip> SegmentedStrip<S> {
    /// Take ownership of a pixel device and carve it into `num_segments`
    /// segments of `leds_per_segment` pixels each.
    ///
    /// Initializes the device (exactly one `begin` call) on success.
    ///
    /// # Errors
    ///
    /// `InsufficientPixels` when the device buffer is smaller than the
    /// segment layout requires. The device is dropped in that case; there is
    /// no partially initialized strip.
    pub fn new(mut device: S, num_segments: usize, leds_per_segment: usize) -> Result<Self> {
        let required = num_segments.saturating_mul(leds_per_segment);
        let available = device.num_pixels();
        if available < required {
            return Err(Error::InsufficientPixels {
                required,
                available,
            });
        }
        device.begin();
        Ok(Self {
            device,
            num_segments,
            leds_per_segment,
        })
    }

    /// Number of segments the strip is carved into.
    #[must_use]
    pub const fn num_segments(&self) -> usize {
        self.num_segments
    }

    /// Pixels per segment.
    #[must_use]
    pub const fn leds_per_segment(&self) -> usize {
        self.leds_per_segment
    }

    /// Shared access to the underlying device.
    pub const fn device(&self) -> &S {
        &self.device
    }

    /// First pixel index of a segment.
    ///
    /// `segment_num == num_segments` is the valid upper boundary;
    /// `num_segments + 1` is the first invalid number.
    ///
    /// # Errors
    ///
    /// `InvalidSegment` for `segment_num > num_segments`, and for the
    /// [`NO_SEGMENT`] sentinel: a slot with no physical segment never maps to
    /// a pixel range.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "segment_num >= 1 is checked first; the product fit the buffer at construction"
    )]
    pub fn index_for_segment(&self, segment_num: usize) -> Result<usize> {
        if segment_num == NO_SEGMENT || segment_num > self.num_segments {
            return Err(Error::InvalidSegment {
                segment_num,
                num_segments: self.num_segments,
            });
        }
        Ok((segment_num - 1) * self.leds_per_segment)
    }

    /// Paint every pixel of a segment, staging only unless `flush` is set.
    ///
    /// The [`NO_SEGMENT`] sentinel is a complete no-op: no pixels, no flush.
    ///
    /// # Errors
    ///
    /// `InvalidSegment` for `segment_num > num_segments`.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "The range end is at most num_segments * leds_per_segment, which fit at construction"
    )]
    pub fn set_segment_color(&mut self, segment_num: usize, color: Rgb, flush: bool) -> Result<()> {
        if segment_num == NO_SEGMENT {
            return Ok(());
        }
        let start = self.index_for_segment(segment_num)?;
        for index in start..start + self.leds_per_segment {
            self.device.set_pixel_color(index, color);
        }
        if flush {
            self.device.show();
        }
        Ok(())
    }

    /// Paint a segment with the off color.
    ///
    /// # Errors
    ///
    /// `InvalidSegment` for `segment_num > num_segments`.
    pub fn clear_segment(&mut self, segment_num: usize, flush: bool) -> Result<()> {
        self.set_segment_color(segment_num, OFF, flush)
    }

    /// Turn the whole strip off: every device pixel (segmented or not) is set
    /// to the off color, and the result is flushed unconditionally.
    pub fn clear(&mut self) {
        for index in 0..self.device.num_pixels() {
            self.device.set_pixel_color(index, OFF);
        }
        self.device.show();
    }

    /// Push the staged buffer to the physical strip.
    pub fn flush(&mut self) {
        self.device.show();
    }
}
