//! The committed polygon: a closed, counter-clockwise ring of vertices.
//!
//! A session holds at most one of these at a time. The ring is explicit: the
//! first vertex is duplicated as the last, so downstream consumers see a
//! closed loop without needing a convention. A ring over `n` distinct
//! vertices therefore has `n + 1` entries and `n` sides.

#[cfg(test)]
#[path = "polygon_test.rs"]
mod polygon_test;

use crate::geometry::{self, Segment};
use crate::viewport::Point;

/// Parametric positions this close to a segment end count as that end when
/// deciding whether a contact is a shared vertex.
const ENDPOINT_EPSILON: f64 = 1e-9;

/// A committed, closed polygon ring. Immutable after commit.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    ring: Vec<Point>,
}

impl Polygon {
    /// Close a ring over the given fixed points.
    ///
    /// Points are copied in their original order when already
    /// counter-clockwise, otherwise in reverse, and the resulting first
    /// vertex is appended again to close the ring. Returns `None` for fewer
    /// than 3 points.
    #[must_use]
    pub fn close(fixed: &[Point]) -> Option<Self> {
        if fixed.len() < 3 {
            return None;
        }
        let mut ring: Vec<Point> = if geometry::is_counter_clockwise(fixed) {
            fixed.to_vec()
        } else {
            fixed.iter().rev().copied().collect()
        };
        let first = ring[0];
        ring.push(first);
        Some(Self { ring })
    }

    /// Ring vertices in order, closing duplicate included.
    #[must_use]
    pub fn ring(&self) -> &[Point] {
        &self.ring
    }

    /// Number of sides, one less than the ring length.
    #[must_use]
    pub fn side_count(&self) -> usize {
        self.ring.len() - 1
    }

    /// The `i`-th side as a segment, 0-based. `None` past the last side.
    #[must_use]
    pub fn side(&self, i: usize) -> Option<Segment> {
        let end = self.ring.get(i + 1)?;
        Some(Segment::new(self.ring[i], *end))
    }

    /// Whether any two sides touch or cross away from a shared vertex.
    ///
    /// Every unordered pair of sides is run through the tolerant segment
    /// intersection. A contact at parametric `(0, 1)` or `(1, 0)` is the
    /// shared vertex of consecutive sides (the ring-closing pair included)
    /// and does not count; anything else does. O(sides²), which is fine at
    /// hand-drawn scale.
    #[must_use]
    pub fn self_intersects(&self, tolerance: f64) -> bool {
        let sides = self.side_count();
        for i in 0..sides {
            for j in (i + 1)..sides {
                let (Some(a), Some(b)) = (self.side(i), self.side(j)) else {
                    continue;
                };
                let Some((t, u)) = geometry::segment_intersection(&a, &b, tolerance) else {
                    continue;
                };
                if !is_shared_vertex(t, u) {
                    return true;
                }
            }
        }
        false
    }
}

/// Contact at one segment's end and the other's start: the vertex two
/// consecutive sides have in common.
fn is_shared_vertex(t: f64, u: f64) -> bool {
    (param_is(t, 0.0) && param_is(u, 1.0)) || (param_is(t, 1.0) && param_is(u, 0.0))
}

fn param_is(value: f64, end: f64) -> bool {
    (value - end).abs() < ENDPOINT_EPSILON
}
