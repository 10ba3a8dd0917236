//! The hardware seam: an opaque pixel device plus the frame buffer it owns.
//!
//! Everything above this module addresses pixels through [`PixelStrip`]; the
//! power-on sequence, signal timing, and DMA/PWM transmission all live on the
//! driver side of the trait.

use smart_leds::{RGB8, SmartLedsWrite};

/// RGB color representation re-exported from `smart_leds`.
pub type Rgb = RGB8;

/// The "off" color written by every clear operation.
pub const OFF: Rgb = Rgb::new(0, 0, 0);

/// An addressable pixel device.
///
/// This is the device contract the clock renders against: set individual
/// pixels in an internal buffer, then [`show`](PixelStrip::show) to push the
/// buffer to the physical strip. Implementations own their buffer exclusively.
///
/// Flush failures are the driver's concern; these methods are infallible from
/// the caller's point of view.
pub trait PixelStrip {
    /// One-time device initialization. Called exactly once before first use.
    fn begin(&mut self) {}

    /// Number of pixels in the device's buffer.
    fn num_pixels(&self) -> usize;

    /// Write one pixel into the buffer. `index` must be below
    /// [`num_pixels`](PixelStrip::num_pixels); callers validate before calling.
    fn set_pixel_color(&mut self, index: usize, color: Rgb);

    /// Push the in-memory buffer to the physical strip.
    fn show(&mut self);
}

/// Frame of [`Rgb`] values for a 1D pixel strip.
///
/// Derefs to `[Rgb; N]`, so pixels can be read and mutated directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame<const N: usize>(pub [Rgb; N]);

impl<const N: usize> Frame<N> {
    /// Create a new blank (all off) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([OFF; N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: Rgb) -> Self {
        Self([color; N])
    }
}

impl<const N: usize> core::ops::Deref for Frame<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> core::ops::DerefMut for Frame<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Adapter from any [`SmartLedsWrite`] driver to [`PixelStrip`].
///
/// Owns the frame buffer; [`show`](PixelStrip::show) streams it to the driver.
/// A write error from the driver is dropped here on purpose: per-pixel writes
/// and flushes are infallible at this layer, and transport faults belong to
/// the driver.
pub struct SmartLedsStrip<D, const N: usize> {
    driver: D,
    frame: Frame<N>,
}

impl<D, const N: usize> SmartLedsStrip<D, N>
where
    D: SmartLedsWrite<Color = Rgb>,
{
    /// Wrap a `smart_leds` driver in the [`PixelStrip`] contract.
    pub const fn new(driver: D) -> Self {
        Self {
            driver,
            frame: Frame::new(),
        }
    }

    /// Consume the adapter and return the underlying driver.
    pub fn into_driver(self) -> D {
        self.driver
    }
}

impl<D, const N: usize> PixelStrip for SmartLedsStrip<D, N>
where
    D: SmartLedsWrite<Color = Rgb>,
{
    fn num_pixels(&self) -> usize {
        N
    }

    fn set_pixel_color(&mut self, index: usize, color: Rgb) {
        if let Some(pixel) = self.frame.get_mut(index) {
            *pixel = color;
        }
    }

    fn show(&mut self) {
        let _ = self.driver.write(self.frame.iter().copied());
    }
}
