#![allow(clippy::float_cmp)]

use super::*;

use crate::consts::MIN_SIDE_LENGTH;

fn collector(sides: usize) -> SideLengthCollector {
    SideLengthCollector::new(sides, MIN_SIDE_LENGTH)
}

// =============================================================
// State progression
// =============================================================

#[test]
fn starts_collecting_side_one() {
    let c = collector(4);
    assert_eq!(c.state(), MeasureState::Collecting(1));
    assert_eq!(c.current_side(), Some(1));
    assert!(!c.is_complete());
}

#[test]
fn accepted_submission_advances_one_side() {
    let mut c = collector(4);
    let state = c.submit("2.5").unwrap();
    assert_eq!(state, MeasureState::Collecting(2));
    assert_eq!(c.lengths(), &[2.5]);
}

#[test]
fn submitting_every_side_completes() {
    let mut c = collector(3);
    c.submit("1.0").unwrap();
    c.submit("2.0").unwrap();
    let state = c.submit("3.0").unwrap();
    assert_eq!(state, MeasureState::Complete);
    assert!(c.is_complete());
    assert_eq!(c.current_side(), None);
    assert_eq!(c.lengths(), &[1.0, 2.0, 3.0]);
}

#[test]
fn submitting_after_complete_changes_nothing() {
    let mut c = collector(1);
    c.submit("4.2").unwrap();
    let state = c.submit("9.9").unwrap();
    assert_eq!(state, MeasureState::Complete);
    assert_eq!(c.lengths(), &[4.2]);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_input_is_rejected_without_advancing() {
    let mut c = collector(3);
    assert!(matches!(c.submit(""), Err(MeasureError::Empty)));
    assert!(matches!(c.submit("   "), Err(MeasureError::Empty)));
    assert_eq!(c.current_side(), Some(1));
}

#[test]
fn non_numeric_input_is_rejected_without_advancing() {
    let mut c = collector(3);
    assert!(matches!(c.submit("abc"), Err(MeasureError::NotANumber)));
    assert!(matches!(c.submit("1.2.3"), Err(MeasureError::NotANumber)));
    assert_eq!(c.current_side(), Some(1));
}

#[test]
fn nan_and_infinity_are_rejected() {
    let mut c = collector(3);
    assert!(matches!(c.submit("NaN"), Err(MeasureError::NotANumber)));
    assert!(matches!(c.submit("inf"), Err(MeasureError::NotANumber)));
}

#[test]
fn below_minimum_is_rejected_without_advancing() {
    let mut c = collector(3);
    assert!(matches!(c.submit("0.05"), Err(MeasureError::TooShort { .. })));
    assert!(matches!(c.submit("-3"), Err(MeasureError::TooShort { .. })));
    assert_eq!(c.current_side(), Some(1));
    assert!(c.lengths().is_empty());
}

#[test]
fn exactly_minimum_is_accepted() {
    let mut c = collector(3);
    c.submit("0.1").unwrap();
    assert_eq!(c.lengths(), &[0.1]);
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let mut c = collector(3);
    c.submit(" 2.75 ").unwrap();
    assert_eq!(c.lengths(), &[2.75]);
}

// =============================================================
// Edit-in-place
// =============================================================

#[test]
fn edit_overwrites_without_moving_the_wizard() {
    let mut c = collector(3);
    c.submit("1.0").unwrap();
    c.submit("2.0").unwrap();
    c.edit(1, "5.5").unwrap();
    assert_eq!(c.lengths(), &[5.5, 2.0]);
    assert_eq!(c.current_side(), Some(3));
}

#[test]
fn edit_validates_like_submission() {
    let mut c = collector(3);
    c.submit("1.0").unwrap();
    assert!(matches!(c.edit(1, "0.05"), Err(MeasureError::TooShort { .. })));
    assert!(matches!(c.edit(1, "abc"), Err(MeasureError::NotANumber)));
    assert_eq!(c.lengths(), &[1.0]);
}

#[test]
fn edit_rejects_sides_without_a_value() {
    let mut c = collector(3);
    c.submit("1.0").unwrap();
    assert!(matches!(c.edit(0, "2.0"), Err(MeasureError::NoSuchSide { .. })));
    assert!(matches!(c.edit(2, "2.0"), Err(MeasureError::NoSuchSide { side: 2 })));
}

#[test]
fn edit_works_after_completion() {
    let mut c = collector(2);
    c.submit("1.0").unwrap();
    c.submit("2.0").unwrap();
    c.edit(2, "7.0").unwrap();
    assert!(c.is_complete());
    assert_eq!(c.lengths(), &[1.0, 7.0]);
}

// =============================================================
// Reset
// =============================================================

#[test]
fn reset_returns_to_side_one() {
    let mut c = collector(3);
    c.submit("1.0").unwrap();
    c.submit("2.0").unwrap();
    c.reset();
    assert_eq!(c.state(), MeasureState::Collecting(1));
    assert!(c.lengths().is_empty());
}

#[test]
fn reset_after_complete_reopens_input() {
    let mut c = collector(2);
    c.submit("1.0").unwrap();
    c.submit("2.0").unwrap();
    assert!(c.is_complete());
    c.reset();
    assert!(!c.is_complete());
    assert_eq!(c.current_side(), Some(1));
}

// =============================================================
// Error messages
// =============================================================

#[test]
fn too_short_message_names_the_minimum() {
    let mut c = collector(1);
    let err = c.submit("0.01").unwrap_err();
    assert_eq!(err.to_string(), "please input a number larger than 0.1");
}
