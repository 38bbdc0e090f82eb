//! Elementary 2D geometry: signed area, winding classification, and the
//! tolerant segment-segment intersection that backs the self-intersection
//! scan.
//!
//! The sign convention is mathematical: world y grows up, so a positive
//! signed area means counter-clockwise vertex order.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::viewport::Point;

/// Relative threshold below which two segment directions count as parallel.
const PARALLEL_EPSILON: f64 = 1e-9;

/// Signed area of the polygon over `points`, computed with the shoelace sum
/// plus its wrap-around term. Returns 0.0 for fewer than 3 points. Positive
/// means counter-clockwise.
#[must_use]
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut area = 0.0;
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let next = points[(i + 1) % n];
        area += points[i].x * (next.y - prev.y);
    }
    area / 2.0
}

/// Whether the vertex order is counter-clockwise. Degenerate inputs (fewer
/// than 3 points, zero area) classify as counter-clockwise.
#[must_use]
pub fn is_counter_clockwise(points: &[Point]) -> bool {
    signed_area(points) >= 0.0
}

/// A directed line segment between two world-space points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
}

impl Segment {
    #[must_use]
    pub fn new(a: Point, b: Point) -> Self {
        Self { a, b }
    }

    /// The point at parametric position `t`, where 0 is `a` and 1 is `b`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point {
        Point {
            x: self.a.x + (self.b.x - self.a.x) * t,
            y: self.a.y + (self.b.y - self.a.y) * t,
        }
    }

    /// Euclidean length.
    #[must_use]
    pub fn length(&self) -> f64 {
        let dx = self.b.x - self.a.x;
        let dy = self.b.y - self.a.y;
        dx.hypot(dy)
    }

    fn delta(&self) -> (f64, f64) {
        (self.b.x - self.a.x, self.b.y - self.a.y)
    }
}

/// Tolerant segment-segment intersection with parametric reporting.
///
/// Returns `Some((t, u))` when the segments pass within `tolerance` world
/// units of each other, where `t` and `u` are the parametric positions of
/// the contact on `a` and `b` respectively, clamped to `[0, 1]`. Parallel
/// segments whose carrier lines are within tolerance report the start of
/// their parametric overlap; parallel segments with no overlap, and any
/// pair whose closest approach exceeds the tolerance, return `None`.
#[must_use]
pub fn segment_intersection(a: &Segment, b: &Segment, tolerance: f64) -> Option<(f64, f64)> {
    let (dax, day) = a.delta();
    let (dbx, dby) = b.delta();
    let len_a = a.length();
    let len_b = b.length();

    if len_a == 0.0 || len_b == 0.0 {
        return degenerate_intersection(a, b, len_a, len_b, tolerance);
    }

    let rx = b.a.x - a.a.x;
    let ry = b.a.y - a.a.y;
    let denom = dax * dby - day * dbx;

    if denom.abs() <= PARALLEL_EPSILON * len_a * len_b {
        return parallel_intersection(a, b, tolerance);
    }

    let t = (rx * dby - ry * dbx) / denom;
    let u = (rx * day - ry * dax) / denom;
    let t = t.clamp(0.0, 1.0);
    let u = u.clamp(0.0, 1.0);
    let pa = a.point_at(t);
    let pb = b.point_at(u);
    if distance(pa, pb) <= tolerance {
        Some((t, u))
    } else {
        None
    }
}

/// Parallel carriers: intersect only if the lines are within tolerance and
/// the projections of `b` onto `a` overlap `[0, 1]`.
fn parallel_intersection(a: &Segment, b: &Segment, tolerance: f64) -> Option<(f64, f64)> {
    let (dax, day) = a.delta();
    let (dbx, dby) = b.delta();
    let len_a2 = dax * dax + day * day;
    let len_b2 = dbx * dbx + dby * dby;

    let rx = b.a.x - a.a.x;
    let ry = b.a.y - a.a.y;
    let line_distance = (rx * day - ry * dax).abs() / len_a2.sqrt();
    if line_distance > tolerance {
        return None;
    }

    // Parametric positions of b's endpoints along a.
    let s0 = (rx * dax + ry * day) / len_a2;
    let s1 = ((b.b.x - a.a.x) * dax + (b.b.y - a.a.y) * day) / len_a2;
    let (lo, hi) = if s0 <= s1 { (s0, s1) } else { (s1, s0) };
    let start = lo.max(0.0);
    let end = hi.min(1.0);
    if start > end {
        return None;
    }

    let t = start;
    let pa = a.point_at(t);
    let u = ((pa.x - b.a.x) * dbx + (pa.y - b.a.y) * dby) / len_b2;
    Some((t, u.clamp(0.0, 1.0)))
}

/// One or both segments have zero length: fall back to point distances.
fn degenerate_intersection(
    a: &Segment,
    b: &Segment,
    len_a: f64,
    len_b: f64,
    tolerance: f64,
) -> Option<(f64, f64)> {
    if len_a == 0.0 && len_b == 0.0 {
        return (distance(a.a, b.a) <= tolerance).then_some((0.0, 0.0));
    }
    if len_a == 0.0 {
        let u = project_clamped(a.a, b);
        return (distance(a.a, b.point_at(u)) <= tolerance).then_some((0.0, u));
    }
    let t = project_clamped(b.a, a);
    (distance(b.a, a.point_at(t)) <= tolerance).then_some((t, 0.0))
}

/// Parametric position of `p` projected onto `seg`, clamped to `[0, 1]`.
fn project_clamped(p: Point, seg: &Segment) -> f64 {
    let (dx, dy) = seg.delta();
    let len2 = dx * dx + dy * dy;
    let t = ((p.x - seg.a.x) * dx + (p.y - seg.a.y) * dy) / len2;
    t.clamp(0.0, 1.0)
}

fn distance(a: Point, b: Point) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}
