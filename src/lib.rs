//! Seven-segment clock engine for segmented addressable LED strips.
//!
//! A strip of WS2812-style pixels is carved into fixed-width logical
//! segments; four groups of up to seven segments form the digit positions of
//! a 12-hour clock, one dedicated segment blinks the seconds, and an optional
//! second strip acts as a downlights bank. The layers, bottom up:
//!
//! - [`pixel_strip`] - the opaque hardware device ([`PixelStrip`]) plus an
//!   adapter for any `smart_leds` driver.
//! - [`segmented_strip`] - segment-number to pixel-range addressing.
//! - [`glyphs`] + [`layout`] - character patterns and per-position geometry.
//! - [`digit_renderer`] - paints a whole digit position, one flush per digit.
//! - [`clock`] - the controller: diffing redraw, seconds indicator, shutdown.
//! - [`jobs`] - the two periodic loops sharing the controller via a mutex.
//!
//! # Example
//!
//! ```
//! use strip_clock::{ClockConfig, ClockController, MemoryStrip, TimeDigits};
//!
//! let device = MemoryStrip::<288>::new();
//! let mut clock = ClockController::new(device, ClockConfig::default())?;
//! clock.render_digits(TimeDigits::from_hour_minute(12, 34))?;
//! clock.toggle_second_indicator()?;
//! # Ok::<(), strip_clock::Error>(())
//! ```
#![no_std]

pub mod clock;
pub mod clock_time;
pub mod digit_renderer;
pub mod downlights;
mod error;
pub mod glyphs;
pub mod jobs;
pub mod layout;
pub mod memory_strip;
pub mod pixel_strip;
pub mod segmented_strip;

pub use clock::{ClockConfig, ClockController, TimeDigits};
pub use clock_time::{ClockTime, ONE_MINUTE, ONE_SECOND};
pub use digit_renderer::DigitRenderer;
pub use downlights::Downlights;
pub use error::{Error, Result};
pub use glyphs::Glyphs;
pub use layout::{DigitPosition, NO_SEGMENT};
pub use memory_strip::MemoryStrip;
pub use pixel_strip::{Frame, OFF, PixelStrip, Rgb, SmartLedsStrip};
pub use segmented_strip::SegmentedStrip;
