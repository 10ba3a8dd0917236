//! Lightweight local time-of-day tracking.
//!
//! Tracks wall-clock time as [`Instant::now()`](embassy_time::Instant::now)
//! plus an offset, localized with a UTC offset in minutes. Synchronize it
//! once (system clock, NTP, RTC) via [`ClockTime::set_from_unix`]; afterwards
//! [`ClockTime::hour_minute`] yields the zero-padded 12-hour reading the
//! display renders.

#[cfg(feature = "display-trace")]
use defmt::info;
use embassy_time::{Duration, Instant};

/// Duration representing one second.
pub const ONE_SECOND: Duration = Duration::from_secs(1);
/// Duration representing one minute.
pub const ONE_MINUTE: Duration = Duration::from_secs(60);
/// Duration representing one day.
pub const ONE_DAY: Duration = Duration::from_secs(60 * 60 * 24);

const TICKS_IN_ONE_DAY: u64 = ONE_DAY.as_ticks();

/// Local time of day derived from the monotonic clock.
///
/// Starts at 12:00 until synchronized.
pub struct ClockTime {
    offset: Duration,
    offset_minutes: i32,
}

impl ClockTime {
    /// Create a clock localized to the given UTC offset in minutes
    /// (e.g. `-300` for US Eastern standard time).
    #[must_use]
    pub const fn new(utc_offset_minutes: i32) -> Self {
        Self {
            offset: Duration::from_millis(12 * 3600 * 1000),
            offset_minutes: utc_offset_minutes,
        }
    }

    /// The configured UTC offset in minutes.
    #[must_use]
    pub const fn offset_minutes(&self) -> i32 {
        self.offset_minutes
    }

    /// Synchronize to a UTC Unix timestamp, applying the configured offset.
    #[expect(
        clippy::integer_division_remainder_used,
        clippy::arithmetic_side_effects,
        reason = "Modulo keeps every intermediate inside one day"
    )]
    pub fn set_from_unix(&mut self, unix_seconds: i64) {
        let local_seconds = unix_seconds + i64::from(self.offset_minutes) * 60;
        let seconds_since_midnight = local_seconds.rem_euclid(86_400) as u64;
        let millis_since_midnight = seconds_since_midnight * 1000;

        let current_instant_ticks = Instant::now().as_ticks() % TICKS_IN_ONE_DAY;
        let target_ticks =
            Duration::from_millis(millis_since_midnight).as_ticks() % TICKS_IN_ONE_DAY;

        let offset_ticks = if target_ticks >= current_instant_ticks {
            target_ticks - current_instant_ticks
        } else {
            TICKS_IN_ONE_DAY + target_ticks - current_instant_ticks
        };

        self.offset = Duration::from_ticks(offset_ticks % TICKS_IN_ONE_DAY);
        #[cfg(feature = "display-trace")]
        info!(
            "Set time from Unix: {} -> offset: {:?}",
            unix_seconds,
            self.offset.as_millis()
        );
    }

    /// Change the UTC offset, shifting the displayed time accordingly.
    /// Useful for daylight saving transitions.
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "Offset deltas stay well inside the i32 range"
    )]
    pub fn set_offset_minutes(&mut self, offset_minutes: i32) {
        let delta_minutes = offset_minutes - self.offset_minutes;
        let delta_seconds = delta_minutes * 60;

        if delta_seconds >= 0 {
            self.offset += Duration::from_secs(delta_seconds as u64);
        } else {
            self.offset -= Duration::from_secs((-delta_seconds) as u64);
        }

        self.offset_minutes = offset_minutes;
    }

    /// Current local time as zero-padded 12-hour clock parts:
    /// hour in `1..=12`, minute in `0..=59`.
    #[expect(
        clippy::cast_possible_truncation,
        clippy::integer_division_remainder_used,
        clippy::arithmetic_side_effects,
        reason = "Modulo keeps every intermediate inside one day"
    )]
    #[must_use]
    pub fn hour_minute(&self) -> (u8, u8) {
        let elapsed_seconds = self.now().as_secs();
        let hour = (elapsed_seconds / 3600 + 11) % 12 + 1;
        let minute = (elapsed_seconds % 3600) / 60;
        (hour as u8, minute as u8)
    }

    /// Time of day as a duration since local midnight.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        reason = "Modulo keeps every intermediate inside one day"
    )]
    #[inline]
    fn now(&self) -> Duration {
        let ticks = Instant::now().as_ticks() % TICKS_IN_ONE_DAY
            + self.offset.as_ticks() % TICKS_IN_ONE_DAY;
        Duration::from_ticks(ticks % TICKS_IN_ONE_DAY)
    }
}
