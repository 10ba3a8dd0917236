//! Periodic jobs sharing one clock controller.
//!
//! Two activities touch the strip concurrently: the digit-redraw tick and the
//! seconds-indicator blink. Both go through one mutex-guarded
//! [`ClockController`], so a flush never publishes another job's half-written
//! segment. The loops are plain generic `async fn`s; the application wraps
//! them in its executor's tasks and owns the mutex/notifier statics.

use embassy_futures::select::{Either, select};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;
use embassy_time::Timer;

use crate::clock::ClockController;
use crate::clock_time::ONE_SECOND;
use crate::error::Result;
use crate::pixel_strip::PixelStrip;

/// The controller shared between the periodic jobs.
pub type ClockMutex<S> = Mutex<CriticalSectionRawMutex, ClockController<S>>;

/// Signal that tells a periodic job to stop. One notifier per job.
pub type StopNotifier = Signal<CriticalSectionRawMutex, ()>;

/// Creates a new [`StopNotifier`], usable in statics.
#[must_use]
pub const fn stop_notifier() -> StopNotifier {
    Signal::new()
}

/// Redraw the time digits once per second until `stop` is signaled.
///
/// Each tick locks the controller for the duration of one full render, then
/// sleeps; the job never holds the lock across its sleep.
///
/// # Errors
///
/// Returns the first renderer error. Renderer errors are configuration
/// mistakes; the loop does not retry them.
pub async fn clock_render_loop<S: PixelStrip>(
    clock: &ClockMutex<S>,
    stop: &StopNotifier,
) -> Result<()> {
    loop {
        clock.lock().await.render_current_time()?;
        if let Either::First(()) = select(stop.wait(), Timer::after(ONE_SECOND)).await {
            return Ok(());
        }
    }
}

/// Blink the seconds indicator once per second until `stop` is signaled.
///
/// Runs on its own cadence; it is not phase-aligned with the digit tick.
///
/// # Errors
///
/// Returns the first renderer error, as in [`clock_render_loop`].
pub async fn second_indicator_loop<S: PixelStrip>(
    clock: &ClockMutex<S>,
    stop: &StopNotifier,
) -> Result<()> {
    loop {
        clock.lock().await.toggle_second_indicator()?;
        if let Either::First(()) = select(stop.wait(), Timer::after(ONE_SECOND)).await {
            return Ok(());
        }
    }
}

/// Stop both periodic jobs and black out the strip.
///
/// Signals the two stop notifiers, then acquires the controller mutex -
/// waiting out any render in flight - and clears the whole strip, flushed.
/// Call exactly once at process exit; it is safe to call from a
/// signal-handling or panic-unwind path, and a second call is harmless.
pub async fn shutdown<S: PixelStrip>(
    clock: &ClockMutex<S>,
    render_stop: &StopNotifier,
    indicator_stop: &StopNotifier,
) {
    render_stop.signal(());
    indicator_stop.signal(());
    clock.lock().await.shutdown();
}
