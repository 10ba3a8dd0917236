//! Host-level tests for the diffing clock controller and seconds indicator.

use strip_clock::{ClockConfig, ClockController, Error, MemoryStrip, OFF, Rgb, TimeDigits};

const PIXELS: usize = 32 * 9;

const DIM_WHITE: Rgb = Rgb::new(30, 30, 30);
const BLUE: Rgb = Rgb::new(0, 0, 255);

fn controller() -> ClockController<MemoryStrip<PIXELS>> {
    ClockController::new(MemoryStrip::new(), ClockConfig::default())
        .expect("default layout fits the buffer")
}

fn digits(hour: u8, minute: u8) -> TimeDigits {
    TimeDigits::from_hour_minute(hour, minute)
}

fn show_count(clock: &ClockController<MemoryStrip<PIXELS>>) -> usize {
    clock.strip().device().show_count()
}

fn segment_is(clock: &ClockController<MemoryStrip<PIXELS>>, segment_num: usize, color: Rgb) -> bool {
    let start = clock
        .strip()
        .index_for_segment(segment_num)
        .expect("valid segment");
    clock.strip().device().shown()[start..start + 9]
        .iter()
        .all(|&p| p == color)
}

#[test]
fn decomposes_zero_padded_twelve_hour_readings() {
    assert_eq!(
        digits(9, 59),
        TimeDigits {
            hour_tens: 0,
            hour_ones: 9,
            minute_tens: 5,
            minute_ones: 9,
        }
    );
    assert_eq!(
        digits(12, 5),
        TimeDigits {
            hour_tens: 1,
            hour_ones: 2,
            minute_tens: 0,
            minute_ones: 5,
        }
    );
    assert_eq!(
        digits(1, 0),
        TimeDigits {
            hour_tens: 0,
            hour_ones: 1,
            minute_tens: 0,
            minute_ones: 0,
        }
    );
}

#[test]
fn first_render_paints_all_four_positions() {
    let mut clock = controller();
    clock.render_digits(digits(10, 59)).expect("renders");

    // One batched flush per position.
    assert_eq!(show_count(&clock), 4);
    // Hour-tens shows the leading 1 on its two physical segments.
    assert!(segment_is(&clock, 8, BLUE));
    assert!(segment_is(&clock, 9, BLUE));
}

#[test]
fn unchanged_digits_cause_no_writes_at_all() {
    let mut clock = controller();
    clock.render_digits(digits(10, 59)).expect("renders");
    let flushes = show_count(&clock);
    let frame = *clock.strip().device().shown();

    clock.render_digits(digits(10, 59)).expect("renders");

    assert_eq!(show_count(&clock), flushes);
    assert_eq!(*clock.strip().device().shown(), frame);
}

#[test]
fn minute_rollover_redraws_only_the_changed_positions() {
    let mut clock = controller();
    clock.render_digits(digits(10, 59)).expect("renders");
    let flushes = show_count(&clock);

    // 10:59 -> 11:00 changes hour-ones and both minute digits; the leading
    // 1 stays put.
    clock.render_digits(digits(11, 0)).expect("renders");

    assert_eq!(show_count(&clock), flushes + 3);
    assert!(segment_is(&clock, 8, BLUE));
    assert!(segment_is(&clock, 9, BLUE));
}

#[test]
fn reaching_ten_oclock_lights_the_leading_one() {
    let mut clock = controller();
    clock.render_digits(digits(9, 59)).expect("renders");
    assert!(segment_is(&clock, 8, OFF));
    assert!(segment_is(&clock, 9, OFF));
    let flushes = show_count(&clock);

    // 09:59 -> 10:00 changes every position.
    clock.render_digits(digits(10, 0)).expect("renders");

    assert_eq!(show_count(&clock), flushes + 4);
    assert!(segment_is(&clock, 8, BLUE));
    assert!(segment_is(&clock, 9, BLUE));
}

#[test]
fn wrapping_past_twelve_clears_the_leading_one() {
    let mut clock = controller();
    clock.render_digits(digits(12, 59)).expect("renders");
    assert!(segment_is(&clock, 8, BLUE));
    let flushes = show_count(&clock);

    // 12:59 -> 01:00: hour-tens drops to 0 and is cleared, not drawn.
    clock.render_digits(digits(1, 0)).expect("renders");

    assert_eq!(show_count(&clock), flushes + 4);
    assert!(segment_is(&clock, 8, OFF));
    assert!(segment_is(&clock, 9, OFF));
}

#[test]
fn second_indicator_toggles_there_and_back() {
    let mut clock = controller();
    assert!(!clock.second_indicator_is_on());
    assert!(segment_is(&clock, 20, OFF));

    clock.toggle_second_indicator().expect("toggles on");
    assert!(clock.second_indicator_is_on());
    assert!(segment_is(&clock, 20, DIM_WHITE));
    assert_eq!(show_count(&clock), 1);

    clock.toggle_second_indicator().expect("toggles off");
    assert!(!clock.second_indicator_is_on());
    assert!(segment_is(&clock, 20, OFF));
    assert_eq!(show_count(&clock), 2);
}

#[test]
fn digit_redraws_leave_a_lit_indicator_alone() {
    let mut clock = controller();
    clock.toggle_second_indicator().expect("toggles on");
    clock.render_digits(digits(11, 11)).expect("renders");

    // Segment 20 belongs to no digit position, so rendering digits never
    // repaints it.
    assert!(segment_is(&clock, 20, DIM_WHITE));
}

#[test]
fn indicator_segment_outside_the_strip_is_rejected_at_construction() {
    for second_indicator_segment in [0, 33] {
        let config = ClockConfig {
            second_indicator_segment,
            ..ClockConfig::default()
        };
        let result = ClockController::new(MemoryStrip::<PIXELS>::new(), config);
        assert!(matches!(
            result.map(|_| ()),
            Err(Error::InvalidSegment { .. })
        ));
    }
}

#[test]
fn too_small_a_buffer_is_rejected_at_construction() {
    let result = ClockController::new(MemoryStrip::<64>::new(), ClockConfig::default());
    assert!(matches!(
        result.map(|_| ()),
        Err(Error::InsufficientPixels {
            required: 288,
            available: 64,
        })
    ));
}

#[test]
fn render_current_time_paints_every_position_once() {
    let mut clock = controller();
    clock.render_current_time().expect("renders");
    assert_eq!(show_count(&clock), 4);
}

#[test]
fn shutdown_blacks_out_and_forgets_rendered_state() {
    let mut clock = controller();
    clock.render_digits(digits(10, 30)).expect("renders");
    clock.toggle_second_indicator().expect("toggles on");

    clock.shutdown();

    assert!(clock.strip().device().shown().iter().all(|&p| p == OFF));
    assert!(!clock.second_indicator_is_on());

    // A revived controller repaints from scratch instead of suppressing.
    let flushes = show_count(&clock);
    clock.render_digits(digits(10, 30)).expect("renders");
    assert_eq!(show_count(&clock), flushes + 4);
}
