//! Host-level tests for the static glyph and geometry tables.

use strip_clock::glyphs::{SLOT_COUNT, flag_iter};
use strip_clock::{DigitPosition, Glyphs, NO_SEGMENT};

const KNOWN_CHARS: &str = " 0123456789abcdefghijklmnopqrstuvwxyz-_=°([)}?\"'";

#[test]
fn every_pattern_fits_in_seven_slots() {
    for ch in KNOWN_CHARS.chars() {
        let pattern = Glyphs::glyph(ch).expect("known character");
        assert_eq!(pattern & 0b_1000_0000, 0, "pattern for {ch:?} uses bit 8");
    }
}

#[test]
fn digit_characters_match_the_digits_table() {
    for value in 0..=9u8 {
        let ch = char::from(b'0' + value);
        assert_eq!(
            Glyphs::glyph(ch),
            Some(Glyphs::DIGITS[usize::from(value)])
        );
    }
}

#[test]
fn unknown_characters_have_no_pattern() {
    for ch in ['!', '+', 'A', 'Z', ':', '\n'] {
        assert_eq!(Glyphs::glyph(ch), None);
    }
}

#[test]
fn blank_and_letter_l_light_nothing() {
    assert_eq!(Glyphs::glyph(' '), Some(Glyphs::SPACE));
    assert!(flag_iter(Glyphs::glyph('l').expect("known")).all(|flag| !flag));
}

#[test]
fn flag_iter_expands_least_significant_bit_first() {
    let flags: Vec<bool> = flag_iter(Glyphs::SLOT_1 | Glyphs::SLOT_7).collect();
    assert_eq!(flags, [true, false, false, false, false, false, true]);
}

#[test]
fn every_position_has_exactly_seven_slots() {
    for position in DigitPosition::ALL {
        assert_eq!(position.segments().len(), SLOT_COUNT);
    }
}

#[test]
fn physical_segments_are_unique_across_positions() {
    let mut seen = Vec::new();
    for position in DigitPosition::ALL {
        for segment_num in position.segments() {
            if segment_num == NO_SEGMENT {
                continue;
            }
            assert!(
                !seen.contains(&segment_num),
                "segment {segment_num} appears in two positions"
            );
            seen.push(segment_num);
        }
    }
    // 7 + 7 + 7 for the full digits, 2 for the hour-tens verticals.
    assert_eq!(seen.len(), 23);
}

#[test]
fn the_seconds_indicator_segment_belongs_to_no_digit() {
    for position in DigitPosition::ALL {
        assert!(!position.segments().contains(&20));
    }
}

#[test]
fn hour_tens_uses_only_the_two_right_hand_verticals() {
    let segments = DigitPosition::HourTens.segments();
    assert_eq!(segments, [8, 0, 0, 0, 0, 9, 0]);
}
