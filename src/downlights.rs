//! Auxiliary downlights bank: a second strip driven as one uniform fill.

use crate::pixel_strip::{OFF, PixelStrip, Rgb};

/// A bank of downlight pixels that only ever shows one color at a time.
///
/// Cleared on construction so stale pixels from a previous run never stay lit.
pub struct Downlights<S> {
    device: S,
}

impl<S: PixelStrip> Downlights<S> {
    /// Take ownership of a pixel device, initialize it, and start dark.
    pub fn new(mut device: S) -> Self {
        device.begin();
        let mut bank = Self { device };
        bank.clear_all();
        bank
    }

    /// Fill every pixel with `color` and flush.
    pub fn set_all(&mut self, color: Rgb) {
        for index in 0..self.device.num_pixels() {
            self.device.set_pixel_color(index, color);
        }
        self.device.show();
    }

    /// Turn the whole bank off and flush.
    pub fn clear_all(&mut self) {
        self.set_all(OFF);
    }

    /// Shared access to the underlying device.
    pub const fn device(&self) -> &S {
        &self.device
    }
}
