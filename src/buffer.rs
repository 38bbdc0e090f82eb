//! The in-progress sketch: an ordered list of points where the last entry is
//! the trailing point, continuously updated to track the pointer until the
//! shape is closed.
//!
//! The first pointer-down appends the point twice: once as the anchor that
//! stays fixed, once as the trailing point that immediately starts tracking.
//! Every later pointer-down freezes the current trailing point in place and
//! appends a fresh trailing point on top of it.

#[cfg(test)]
#[path = "buffer_test.rs"]
mod buffer_test;

use crate::viewport::Point;

/// Ordered buffer of sketch points, insertion order significant.
#[derive(Debug, Clone, Default)]
pub struct PointBuffer {
    points: Vec<Point>,
}

impl PointBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point. On an empty buffer the point is appended twice,
    /// establishing both the anchor and the trailing point.
    pub fn add(&mut self, p: Point) {
        if self.points.is_empty() {
            self.points.push(p);
        }
        self.points.push(p);
    }

    /// Overwrite the trailing point with the current pointer position.
    /// No-op on an empty buffer.
    pub fn update_trailing(&mut self, p: Point) {
        if let Some(last) = self.points.last_mut() {
            *last = p;
        }
    }

    /// Remove the trailing point, e.g. when the pointer leaves the canvas.
    /// No-op on an empty buffer.
    pub fn drop_trailing(&mut self) {
        self.points.pop();
    }

    /// Re-add a trailing point at `p` when the pointer re-enters the canvas.
    /// No-op on an empty buffer (re-entry without an anchor starts nothing).
    pub fn restore_trailing(&mut self, p: Point) {
        if !self.points.is_empty() {
            self.points.push(p);
        }
    }

    /// Remove the `n`-th point from the end (1 = the last point). Used to
    /// back out the most recently fixed point while preserving the trailing
    /// point. No-op when the buffer holds two or fewer points or when `n`
    /// is out of range.
    pub fn remove_from_end(&mut self, n: usize) {
        let count = self.points.len();
        if count <= 2 || n == 0 || n > count {
            return;
        }
        self.points.remove(count - n);
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Current number of points, trailing point included.
    #[must_use]
    pub fn count(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if the buffer holds no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points in insertion order, trailing point last.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
}
