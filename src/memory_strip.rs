//! An in-memory pixel device for host tests and simulation.

use crate::pixel_strip::{Frame, PixelStrip, Rgb};

/// A virtual [`PixelStrip`] backed by two frames: the staged buffer that
/// mutating operations write into, and the frame most recently made visible
/// by [`show`](PixelStrip::show).
///
/// Tracking both frames plus begin/show counters lets tests assert not just
/// final pixel values but *when* they became visible and how many flushes it
/// took to get there.
pub struct MemoryStrip<const N: usize> {
    staged: Frame<N>,
    shown: Frame<N>,
    begin_count: usize,
    show_count: usize,
}

impl<const N: usize> MemoryStrip<N> {
    /// Create a strip with all pixels off and nothing shown yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            staged: Frame::new(),
            shown: Frame::new(),
            begin_count: 0,
            show_count: 0,
        }
    }

    /// The staged buffer: what has been written but not necessarily flushed.
    #[must_use]
    pub const fn staged(&self) -> &Frame<N> {
        &self.staged
    }

    /// The frame made visible by the most recent flush.
    #[must_use]
    pub const fn shown(&self) -> &Frame<N> {
        &self.shown
    }

    /// How many times [`show`](PixelStrip::show) has run.
    #[must_use]
    pub const fn show_count(&self) -> usize {
        self.show_count
    }

    /// How many times [`begin`](PixelStrip::begin) has run.
    #[must_use]
    pub const fn begin_count(&self) -> usize {
        self.begin_count
    }
}

impl<const N: usize> Default for MemoryStrip<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> PixelStrip for MemoryStrip<N> {
    fn begin(&mut self) {
        self.begin_count = self.begin_count.saturating_add(1);
    }

    fn num_pixels(&self) -> usize {
        N
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.staged.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        self.shown = self.staged;
        self.show_count = self.show_count.saturating_add(1);
    }
}
