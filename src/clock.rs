//! The clock controller: current-time digits, incremental redraw, and the
//! seconds indicator.

#[cfg(feature = "display-trace")]
use defmt::info;

use crate::clock_time::ClockTime;
use crate::digit_renderer::DigitRenderer;
use crate::error::{Error, Result};
use crate::layout::{DigitPosition, NO_SEGMENT};
use crate::pixel_strip::{OFF, PixelStrip, Rgb};
use crate::segmented_strip::SegmentedStrip;

/// Configuration for a [`ClockController`], resolved once at construction.
///
/// Device parameters (GPIO pin, PWM channel, signal frequency...) belong to
/// the [`PixelStrip`] implementation the application constructs; they are not
/// interpreted here.
#[derive(Debug, Clone, Copy)]
pub struct ClockConfig {
    /// Number of logical segments on the strip.
    pub num_segments: usize,
    /// Pixels per segment.
    pub leds_per_segment: usize,
    /// Color of lit digit segments.
    pub digit_color: Rgb,
    /// Color of the seconds indicator while lit (typically dim).
    pub second_indicator_color: Rgb,
    /// The dedicated segment the seconds indicator blinks.
    pub second_indicator_segment: usize,
    /// UTC offset in minutes for the displayed local time.
    pub utc_offset_minutes: i32,
}

impl Default for ClockConfig {
    /// The original wall build: 32 segments of 9 pixels, blue digits, a dim
    /// white seconds indicator on segment 20, UTC.
    fn default() -> Self {
        Self {
            num_segments: 32,
            leds_per_segment: 9,
            digit_color: Rgb::new(0, 0, 255),
            second_indicator_color: Rgb::new(30, 30, 30),
            second_indicator_segment: 20,
            utc_offset_minutes: 0,
        }
    }
}

/// The four display digits of a zero-padded 12-hour `HH:MM` reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeDigits {
    pub hour_tens: u8,
    pub hour_ones: u8,
    pub minute_tens: u8,
    pub minute_ones: u8,
}

impl TimeDigits {
    /// Decompose an `(hour, minute)` pair, hour in `1..=12`.
    #[expect(
        clippy::integer_division_remainder_used,
        clippy::arithmetic_side_effects,
        reason = "Hour <= 12 and minute < 60 keep the divisions trivially safe"
    )]
    #[must_use]
    pub const fn from_hour_minute(hour: u8, minute: u8) -> Self {
        Self {
            hour_tens: hour / 10,
            hour_ones: hour % 10,
            minute_tens: minute / 10,
            minute_ones: minute % 10,
        }
    }

    const fn value(self, position: DigitPosition) -> u8 {
        match position {
            DigitPosition::HourTens => self.hour_tens,
            DigitPosition::HourOnes => self.hour_ones,
            DigitPosition::MinuteTens => self.minute_tens,
            DigitPosition::MinuteOnes => self.minute_ones,
        }
    }
}

/// Last value successfully rendered at each position, or unset.
#[derive(Debug, Default, Clone, Copy)]
struct RenderedDigits {
    hour_tens: Option<u8>,
    hour_ones: Option<u8>,
    minute_tens: Option<u8>,
    minute_ones: Option<u8>,
}

impl RenderedDigits {
    fn slot_mut(&mut self, position: DigitPosition) -> &mut Option<u8> {
        match position {
            DigitPosition::HourTens => &mut self.hour_tens,
            DigitPosition::HourOnes => &mut self.hour_ones,
            DigitPosition::MinuteTens => &mut self.minute_tens,
            DigitPosition::MinuteOnes => &mut self.minute_ones,
        }
    }
}

/// Drives the four time digits and the seconds indicator on one strip.
///
/// Redraws are incremental: a tick repaints only the positions whose digit
/// changed since the last successful render, so an idle minute costs zero
/// device writes from the digit path. Each repainted position is rendered
/// completely (all seven slots, then one flush) before the next position
/// starts.
pub struct ClockController<S> {
    renderer: DigitRenderer<S>,
    clock_time: ClockTime,
    digit_color: Rgb,
    second_indicator_color: Rgb,
    second_indicator_segment: usize,
    second_indicator_is_on: bool,
    rendered: RenderedDigits,
}

impl<S: PixelStrip> ClockController<S> {
    /// Take ownership of a pixel device and build the controller around it.
    ///
    /// # Errors
    ///
    /// `InsufficientPixels` when the device buffer cannot hold the segment
    /// layout. `InvalidSegment` when the configured seconds-indicator segment
    /// or any segment in the digit geometry falls outside
    /// `1..=num_segments`. Either way the device is released unused.
    pub fn new(device: S, config: ClockConfig) -> Result<Self> {
        let strip = SegmentedStrip::new(device, config.num_segments, config.leds_per_segment)?;

        let validate = |segment_num: usize| -> Result<()> {
            if segment_num == NO_SEGMENT || segment_num > config.num_segments {
                return Err(Error::InvalidSegment {
                    segment_num,
                    num_segments: config.num_segments,
                });
            }
            Ok(())
        };
        validate(config.second_indicator_segment)?;
        for position in DigitPosition::ALL {
            for segment_num in position.segments() {
                if segment_num != NO_SEGMENT {
                    validate(segment_num)?;
                }
            }
        }

        Ok(Self {
            renderer: DigitRenderer::new(strip),
            clock_time: ClockTime::new(config.utc_offset_minutes),
            digit_color: config.digit_color,
            second_indicator_color: config.second_indicator_color,
            second_indicator_segment: config.second_indicator_segment,
            second_indicator_is_on: false,
            rendered: RenderedDigits::default(),
        })
    }

    /// The local time source, e.g. for synchronization on time-sync events.
    pub fn clock_time_mut(&mut self) -> &mut ClockTime {
        &mut self.clock_time
    }

    /// Synchronize the displayed time to a UTC Unix timestamp.
    pub fn set_time_from_unix(&mut self, unix_seconds: i64) {
        self.clock_time.set_from_unix(unix_seconds);
    }

    /// Shared access to the strip (and through it, the device).
    pub const fn strip(&self) -> &SegmentedStrip<S> {
        self.renderer.strip()
    }

    /// Render the current local time. The once-per-tick entry point.
    ///
    /// # Errors
    ///
    /// Propagates renderer errors; all of them indicate configuration
    /// mistakes, not transient conditions.
    pub fn render_current_time(&mut self) -> Result<()> {
        let (hour, minute) = self.clock_time.hour_minute();
        self.render_digits(TimeDigits::from_hour_minute(hour, minute))
    }

    /// Render an explicit set of digits, repainting only changed positions.
    ///
    /// Exposed separately from [`render_current_time`](Self::render_current_time)
    /// so callers (and tests) can inject digits directly.
    ///
    /// # Errors
    ///
    /// Propagates renderer errors. A position's stored state is updated only
    /// after its render succeeds.
    pub fn render_digits(&mut self, digits: TimeDigits) -> Result<()> {
        #[cfg(feature = "display-trace")]
        info!(
            "render digits {}{}:{}{}",
            digits.hour_tens, digits.hour_ones, digits.minute_tens, digits.minute_ones
        );
        for position in DigitPosition::ALL {
            let value = digits.value(position);
            if *self.rendered.slot_mut(position) == Some(value) {
                continue;
            }
            if matches!(position, DigitPosition::HourTens) && value == 0 {
                self.renderer.clear_digit(position)?;
            } else {
                self.renderer
                    .show_char(position, digit_char(value), self.digit_color)?;
            }
            *self.rendered.slot_mut(position) = Some(value);
        }
        Ok(())
    }

    /// Whether the seconds indicator is currently lit.
    #[must_use]
    pub const fn second_indicator_is_on(&self) -> bool {
        self.second_indicator_is_on
    }

    /// Flip the seconds indicator and flush immediately.
    ///
    /// # Errors
    ///
    /// `InvalidSegment` cannot occur for a constructed controller (the
    /// segment was validated), but the renderer contract still surfaces it.
    pub fn toggle_second_indicator(&mut self) -> Result<()> {
        let color = if self.second_indicator_is_on {
            OFF
        } else {
            self.second_indicator_color
        };
        self.renderer
            .strip_mut()
            .set_segment_color(self.second_indicator_segment, color, true)?;
        self.second_indicator_is_on = !self.second_indicator_is_on;
        Ok(())
    }

    /// Turn the whole strip off, flushed, and forget rendered state so a
    /// later render repaints from scratch.
    ///
    /// Safe to call from a termination path and idempotent; the owner calls
    /// it exactly once as part of the shutdown contract.
    pub fn shutdown(&mut self) {
        self.renderer.strip_mut().clear();
        self.rendered = RenderedDigits::default();
        self.second_indicator_is_on = false;
    }
}

const fn digit_char(value: u8) -> char {
    (b'0'.saturating_add(value)) as char
}
