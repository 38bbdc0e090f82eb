#![allow(clippy::float_cmp)]

use super::*;

const TOLERANCE: f64 = 0.01;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn seg(ax: f64, ay: f64, bx: f64, by: f64) -> Segment {
    Segment::new(pt(ax, ay), pt(bx, by))
}

fn ccw_square() -> Vec<Point> {
    vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(10.0, 10.0), pt(0.0, 10.0)]
}

fn cw_square() -> Vec<Point> {
    let mut points = ccw_square();
    points.reverse();
    points
}

// =============================================================
// signed_area
// =============================================================

#[test]
fn signed_area_of_ccw_square_is_positive() {
    assert_eq!(signed_area(&ccw_square()), 100.0);
}

#[test]
fn signed_area_of_cw_square_is_negative() {
    assert_eq!(signed_area(&cw_square()), -100.0);
}

#[test]
fn signed_area_changes_sign_under_reversal() {
    let points = vec![pt(0.0, 0.0), pt(7.0, 1.0), pt(4.0, 6.0), pt(-1.0, 3.0)];
    let reversed: Vec<Point> = points.iter().rev().copied().collect();
    let forward = signed_area(&points);
    let backward = signed_area(&reversed);
    assert!(forward != 0.0);
    assert_eq!(forward, -backward);
}

#[test]
fn signed_area_is_zero_below_three_points() {
    assert_eq!(signed_area(&[]), 0.0);
    assert_eq!(signed_area(&[pt(1.0, 1.0)]), 0.0);
    assert_eq!(signed_area(&[pt(1.0, 1.0), pt(2.0, 2.0)]), 0.0);
}

#[test]
fn signed_area_of_triangle() {
    // Right triangle with legs 10, CCW: area 50.
    let points = vec![pt(0.0, 0.0), pt(10.0, 0.0), pt(0.0, 10.0)];
    assert_eq!(signed_area(&points), 50.0);
}

// =============================================================
// is_counter_clockwise
// =============================================================

#[test]
fn ccw_square_classifies_ccw() {
    assert!(is_counter_clockwise(&ccw_square()));
}

#[test]
fn cw_square_classifies_cw() {
    assert!(!is_counter_clockwise(&cw_square()));
}

#[test]
fn degenerate_input_classifies_ccw() {
    assert!(is_counter_clockwise(&[pt(0.0, 0.0), pt(1.0, 1.0)]));
}

// =============================================================
// Segment
// =============================================================

#[test]
fn point_at_interpolates() {
    let s = seg(0.0, 0.0, 10.0, 0.0);
    assert_eq!(s.point_at(0.0), pt(0.0, 0.0));
    assert_eq!(s.point_at(0.5), pt(5.0, 0.0));
    assert_eq!(s.point_at(1.0), pt(10.0, 0.0));
}

#[test]
fn segment_length() {
    assert_eq!(seg(0.0, 0.0, 3.0, 4.0).length(), 5.0);
}

// =============================================================
// segment_intersection
// =============================================================

#[test]
fn crossing_segments_intersect_at_midpoints() {
    let a = seg(0.0, 0.0, 10.0, 0.0);
    let b = seg(5.0, -5.0, 5.0, 5.0);
    let (t, u) = segment_intersection(&a, &b, TOLERANCE).unwrap();
    assert_eq!(t, 0.5);
    assert_eq!(u, 0.5);
}

#[test]
fn distant_segments_do_not_intersect() {
    let a = seg(0.0, 0.0, 10.0, 0.0);
    let b = seg(0.0, 5.0, 10.0, 5.0);
    assert!(segment_intersection(&a, &b, TOLERANCE).is_none());
}

#[test]
fn shared_endpoint_reports_one_and_zero() {
    // b starts where a ends, at a right angle.
    let a = seg(0.0, 0.0, 10.0, 0.0);
    let b = seg(10.0, 0.0, 10.0, 10.0);
    let (t, u) = segment_intersection(&a, &b, TOLERANCE).unwrap();
    assert_eq!(t, 1.0);
    assert_eq!(u, 0.0);
}

#[test]
fn near_miss_within_tolerance_counts() {
    // Lines cross just beyond a's endpoint, 0.005 away.
    let a = seg(0.0, 0.0, 10.0, 0.0);
    let b = seg(10.005, -5.0, 10.005, 5.0);
    let hit = segment_intersection(&a, &b, TOLERANCE);
    assert!(hit.is_some());
    let (t, _) = hit.unwrap();
    assert_eq!(t, 1.0);
}

#[test]
fn near_miss_beyond_tolerance_does_not_count() {
    let a = seg(0.0, 0.0, 10.0, 0.0);
    let b = seg(10.05, -5.0, 10.05, 5.0);
    assert!(segment_intersection(&a, &b, TOLERANCE).is_none());
}

#[test]
fn parallel_separated_segments_do_not_intersect() {
    let a = seg(0.0, 0.0, 10.0, 0.0);
    let b = seg(0.0, 1.0, 10.0, 1.0);
    assert!(segment_intersection(&a, &b, TOLERANCE).is_none());
}

#[test]
fn collinear_overlapping_segments_intersect() {
    let a = seg(0.0, 0.0, 10.0, 0.0);
    let b = seg(5.0, 0.0, 15.0, 0.0);
    let (t, u) = segment_intersection(&a, &b, TOLERANCE).unwrap();
    assert_eq!(t, 0.5);
    assert_eq!(u, 0.0);
}

#[test]
fn collinear_touching_segments_report_endpoint_params() {
    let a = seg(0.0, 0.0, 10.0, 0.0);
    let b = seg(10.0, 0.0, 20.0, 0.0);
    let (t, u) = segment_intersection(&a, &b, TOLERANCE).unwrap();
    assert_eq!(t, 1.0);
    assert_eq!(u, 0.0);
}

#[test]
fn collinear_disjoint_segments_do_not_intersect() {
    let a = seg(0.0, 0.0, 10.0, 0.0);
    let b = seg(11.0, 0.0, 20.0, 0.0);
    assert!(segment_intersection(&a, &b, TOLERANCE).is_none());
}

#[test]
fn zero_length_segment_against_a_segment() {
    let a = seg(5.0, 0.0, 5.0, 0.0);
    let b = seg(0.0, 0.0, 10.0, 0.0);
    let (t, u) = segment_intersection(&a, &b, TOLERANCE).unwrap();
    assert_eq!(t, 0.0);
    assert_eq!(u, 0.5);
}

#[test]
fn two_coincident_zero_length_segments() {
    let a = seg(5.0, 5.0, 5.0, 5.0);
    let b = seg(5.0, 5.0, 5.0, 5.0);
    assert!(segment_intersection(&a, &b, TOLERANCE).is_some());
}
